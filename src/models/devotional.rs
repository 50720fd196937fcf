use serde::{Deserialize, Serialize};

/// A short structured reflection keyed by a user profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Devotional {
    pub title: String,
    pub verse: String,
    pub reference: String,
    pub message: String,
    pub prayer: String,
    pub challenge: String,
}

/// The reader profile a devotional is generated for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    Young,
    Adult,
    Leader,
    Couple,
    Family,
    Elderly,
}

impl Profile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Young => "young",
            Self::Adult => "adult",
            Self::Leader => "leader",
            Self::Couple => "couple",
            Self::Family => "family",
            Self::Elderly => "elderly",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "young" => Some(Self::Young),
            "adult" => Some(Self::Adult),
            "leader" => Some(Self::Leader),
            "couple" => Some(Self::Couple),
            "family" => Some(Self::Family),
            "elderly" => Some(Self::Elderly),
            _ => None,
        }
    }
}

/// Input for generating a devotional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateDevotionalInput {
    pub profile: Profile,
}
