use serde::{Deserialize, Serialize};

/// A named theological concept with a description and optional set of
/// denominational perspectives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TheologicalTopic {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Ordered perspectives rendered as independent labeled blocks.
    /// There is no merge or precedence logic between views.
    #[serde(default)]
    pub alternate_views: Vec<TopicView>,
}

/// One denominational perspective on a topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicView {
    pub title: String,
    pub description: String,
}
