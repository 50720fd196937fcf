//! Fixed reference data seeded into every session.
//!
//! Everything here is example content standing in for the real editorial
//! pipeline: the library, the topic index, the memorization pool and the
//! guided studies are each loaded once at store construction.

mod library;
mod memorization;
mod studies;
mod topics;

pub use library::content_library;
pub use memorization::{memorization_verses, quiz_pool};
pub use studies::bible_studies;
pub use topics::theological_topics;
