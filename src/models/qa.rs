use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One answered question in the session's Q&A log.
///
/// The log is append-only and ordered by submission time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaExchange {
    pub question: String,
    pub answer: String,
    pub asked_at: DateTime<Utc>,
}

/// Input for submitting a question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskQuestionInput {
    pub question: String,
}
