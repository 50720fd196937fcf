use thiserror::Error;

/// Failure kinds surfaced by store and assistant operations.
///
/// All of these are user-visible, inline-message failures; none is fatal to
/// the session. `Transient` and `Timeout` exist for the live backend that
/// will eventually replace the simulated assistant.
#[derive(Debug, Error)]
pub enum Error {
    /// Blank or otherwise invalid input.
    #[error("validation: {0}")]
    Validation(String),

    /// No matching plan, topic, study or quiz.
    #[error("not found: {0}")]
    NotFound(String),

    /// Retryable backend failure.
    #[error("transient: {0}")]
    Transient(String),

    /// The backend did not answer within the configured deadline.
    #[error("request timed out")]
    Timeout,
}

impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
