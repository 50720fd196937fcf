use serde::{Deserialize, Serialize};

/// A generated sermon structure: introduction, three main points with
/// verses and applications, and a conclusion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SermonOutline {
    pub title: String,
    pub introduction: String,
    pub main_points: Vec<SermonPoint>,
    pub conclusion: String,
}

/// One main point of a sermon outline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SermonPoint {
    pub title: String,
    pub verses: String,
    pub application: String,
}

/// Input for generating a sermon outline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateSermonInput {
    pub theme: String,
}
