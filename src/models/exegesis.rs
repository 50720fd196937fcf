use serde::{Deserialize, Serialize};

/// A deep-analysis report for one scripture reference: original-language
/// text, historical context, theological notes and practical application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExegesisReport {
    pub original: OriginalText,
    pub historical: String,
    pub theological: String,
    pub application: String,
}

/// The passage in its source language alongside a translation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OriginalText {
    pub text: String,
    pub translation: String,
}

/// Input for requesting an exegesis report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeInput {
    pub reference: String,
}
