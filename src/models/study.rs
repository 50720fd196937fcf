use serde::{Deserialize, Serialize};

/// A guided study: a themed set of reflection questions the user works
/// through, individually or as a group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BibleStudy {
    pub id: String,
    pub title: String,
    pub description: String,
    pub for_groups: bool,
    pub questions: Vec<StudyQuestion>,
}

/// One reflection question inside a study.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyQuestion {
    pub id: String,
    pub text: String,
    /// A prompt to guide the user's reflection before answering.
    pub reflection: String,
    pub answered: bool,
    pub user_answer: Option<String>,
}

/// Input for answering a study question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerQuestionInput {
    pub answer: String,
}
