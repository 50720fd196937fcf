use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A scheduled sequence of daily scripture readings tracked by completion
/// percentage.
///
/// Plans are created on a user action and advanced in place, one reading at
/// a time. They are never deleted within a session.
///
/// # Invariant
/// `progress_percent` is always `round(days_completed / total_days * 100)`.
/// `days_completed` is not capped at `total_days`; see DESIGN.md for why the
/// overrun is preserved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingPlan {
    pub id: Uuid,
    pub name: String,
    pub kind: PlanKind,
    /// Derived from `days_completed` / `total_days`. 0-100 while the plan
    /// is within its span; keeps climbing past 100 on overrun.
    pub progress_percent: u32,
    pub current_reading: String,
    pub next_reading: String,
    pub days_completed: u32,
    pub total_days: u32,
    pub created_at: DateTime<Utc>,
}

/// How a plan's readings are organized.
///
/// - `Time`: a fixed calendar span (365 days).
/// - `Theme`: a short topical sequence (14 days).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlanKind {
    Time,
    Theme,
}

impl PlanKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Theme => "theme",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "time" => Some(Self::Time),
            "theme" => Some(Self::Theme),
            _ => None,
        }
    }
}

/// Input for creating a new reading plan.
///
/// The name must be non-blank after trimming; the duration and initial
/// readings are fixed per kind and not user-configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlanInput {
    pub name: String,
    pub kind: PlanKind,
}
