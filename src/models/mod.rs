//! Domain models for the BIBL.IA study service.
//!
//! # Core Concepts
//!
//! ## Reference data
//!
//! Loaded once from the catalog at session start and never mutated:
//!
//! - [`ContentItem`]: an entry in the content library (articles, reflections,
//!   videos, links), filterable by text, category and tags.
//! - [`QuizItem`]: a single memorization exercise tied to a verse.
//! - [`TheologicalTopic`]: a named concept with an optional set of
//!   denominational perspectives.
//!
//! ## Session-owned state
//!
//! Mutated by user actions within one study session and lost on restart:
//!
//! - [`ReadingPlan`]: created on demand, advanced one reading at a time.
//! - [`MemorizationVerse`]: progress only ever moves upward, on a correct
//!   quiz answer.
//! - [`QaExchange`]: append-only question/answer log.
//! - [`BibleStudy`]: guided studies whose questions record the user's answer.

mod content;
mod devotional;
mod exegesis;
mod memorization;
mod plan;
mod qa;
mod search;
mod sermon;
mod study;
mod topic;

pub use content::*;
pub use devotional::*;
pub use exegesis::*;
pub use memorization::*;
pub use plan::*;
pub use qa::*;
pub use search::*;
pub use sermon::*;
pub use study::*;
pub use topic::*;
