//! The simulated study assistant.
//!
//! Every call sleeps for the configured delay before producing its canned
//! payload, reproducing the latency of the generation backend it stands in
//! for. Handlers wrap these futures in a timeout and, where the UI allows
//! cancellation, check a [`crate::token::RequestGate`] after the await.

mod canned;

use std::time::Duration;

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{
    Devotional, ExegesisReport, Profile, SearchKind, SearchResult, SermonOutline,
};
use crate::qa;

#[derive(Debug, Clone)]
pub struct StudyAssistant {
    delay: Duration,
}

impl StudyAssistant {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    async fn simulate(&self, what: &str) {
        debug!(what, delay_ms = self.delay.as_millis() as u64, "simulated backend call");
        tokio::time::sleep(self.delay).await;
    }

    /// Verse search in one of three modes. Rejects a blank query.
    pub async fn search(&self, query: &str, kind: SearchKind) -> Result<Vec<SearchResult>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(Error::validation("search query must not be blank"));
        }
        self.simulate("search").await;
        Ok(canned::search_results(query, kind))
    }

    /// Devotional tailored to the reader profile.
    pub async fn devotional(&self, profile: Profile) -> Devotional {
        self.simulate("devotional").await;
        canned::devotional_for(profile)
    }

    /// Three-point sermon outline for a theme. Rejects a blank theme.
    pub async fn sermon(&self, theme: &str) -> Result<SermonOutline> {
        let theme = theme.trim();
        if theme.is_empty() {
            return Err(Error::validation("sermon theme must not be blank"));
        }
        self.simulate("sermon").await;
        Ok(canned::sermon_for(theme))
    }

    /// Original-language exegesis for a reference. Rejects a blank
    /// reference; unknown references get the placeholder report.
    pub async fn exegesis(&self, reference: &str) -> Result<ExegesisReport> {
        let reference = reference.trim();
        if reference.is_empty() {
            return Err(Error::validation("reference must not be blank"));
        }
        self.simulate("exegesis").await;
        Ok(canned::exegesis_for(reference))
    }

    /// Answer a study question through the keyword rulebook.
    pub async fn answer(&self, question: &str) -> Result<&'static str> {
        // Validate before paying the simulated latency.
        let answer = qa::respond(question)?;
        self.simulate("qa").await;
        Ok(answer)
    }
}
