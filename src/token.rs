//! Request lifetime tracking for delayed operations.
//!
//! The assistant simulates network latency, and a result that arrives after
//! the user has moved on must not be written to session state. Each delayed
//! concern owns a [`RequestGate`]; a request takes a token when it starts
//! and checks it after the delay. Cancelling (or starting a newer request)
//! bumps the generation, so stale tokens fail the check and their results
//! are discarded.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Proof that a delayed request was the most recent one when it started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Generation counter shared between a request's start and its completion.
#[derive(Debug, Clone, Default)]
pub struct RequestGate {
    generation: Arc<AtomicU64>,
}

impl RequestGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, invalidating any still in flight.
    pub fn issue(&self) -> RequestToken {
        RequestToken(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Invalidate any request in flight without starting a new one.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Whether the token still identifies the most recent request.
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.generation.load(Ordering::SeqCst) == token.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_token_is_current() {
        let gate = RequestGate::new();
        let token = gate.issue();
        assert!(gate.is_current(token));
    }

    #[test]
    fn newer_request_invalidates_older_token() {
        let gate = RequestGate::new();
        let first = gate.issue();
        let second = gate.issue();
        assert!(!gate.is_current(first));
        assert!(gate.is_current(second));
    }

    #[test]
    fn cancel_invalidates_without_issuing() {
        let gate = RequestGate::new();
        let token = gate.issue();
        gate.cancel();
        assert!(!gate.is_current(token));
    }
}
