use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An entry in the content library.
///
/// Content items are curated reference material — they are loaded once at
/// session start and never mutated or deleted. Filtering happens on top of
/// the fixed list; see [`crate::content::filter`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    pub kind: ContentKind,
    pub description: String,
    /// Publication or author credit shown alongside the title.
    pub source: String,
    pub url: Option<String>,
    pub published: NaiveDate,
    pub tags: Vec<String>,
}

/// The category of a content item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Article,
    Reflection,
    Video,
    Link,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Reflection => "reflection",
            Self::Video => "video",
            Self::Link => "link",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "article" => Some(Self::Article),
            "reflection" => Some(Self::Reflection),
            "video" => Some(Self::Video),
            "link" => Some(Self::Link),
            _ => None,
        }
    }
}
