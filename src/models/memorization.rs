use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A verse the user is committing to memory.
///
/// Progress only ever moves upward: a correct quiz answer adds 10 points,
/// capped at 100. Nothing in the session decreases it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemorizationVerse {
    pub id: String,
    /// Human-readable reference, e.g. "João 3:16".
    pub reference: String,
    pub text: String,
    /// 0-100.
    pub progress: u8,
    pub last_practiced: Option<DateTime<Utc>>,
}

/// A single memorization exercise tied to a verse.
///
/// Quiz items are immutable reference data; many items can point at the
/// same verse and one is chosen at random when a quiz starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizItem {
    pub id: String,
    pub verse_id: String,
    pub kind: QuizKind,
    pub prompt: String,
    /// Choice pool for `MultipleChoice`, word pool for `Arrange`.
    /// Empty for `FillBlank`.
    pub options: Vec<String>,
    pub expected: Expected,
}

/// The exercise format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuizKind {
    FillBlank,
    Arrange,
    MultipleChoice,
}

impl QuizKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FillBlank => "fill_blank",
            Self::Arrange => "arrange",
            Self::MultipleChoice => "multiple_choice",
        }
    }
}

/// What counts as a correct answer.
///
/// Text answers compare case-insensitively; sequences compare their
/// space-joined form exactly, case and order both significant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Expected {
    Text(String),
    Sequence(Vec<String>),
}

/// Aggregate memorization standing shown on the session summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemorizationSummary {
    /// Ladder label derived from average progress ("Iniciante" up to
    /// "Mestre da Palavra").
    pub level: String,
    /// Sum of all verse progress values.
    pub total_points: u32,
    pub verses_in_progress: usize,
    pub last_practiced: Option<DateTime<Utc>>,
}
