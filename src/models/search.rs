use serde::{Deserialize, Serialize};

/// The lens a scripture search is run through.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SearchKind {
    Keyword,
    Theme,
    Question,
}

impl SearchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Theme => "theme",
            Self::Question => "question",
        }
    }
}

/// One verse returned by a scripture search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub verse: String,
    pub reference: String,
    pub context: Option<String>,
    pub application: Option<String>,
}

/// Input for a scripture search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchInput {
    pub query: String,
    pub kind: SearchKind,
}
