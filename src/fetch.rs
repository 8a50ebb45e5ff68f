//! Superseded-Request Guard
//!
//! Each view issues at most one relevant fetch per parameter change. When
//! parameters change again while a request is still in flight, the old
//! response must not overwrite the newer state. Views take a ticket before
//! spawning and check it before applying the response.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Monotonic sequence of fetch tickets for one view.
#[derive(Clone, Default)]
pub struct RequestSeq {
    current: Arc<AtomicU64>,
}

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a ticket for a new request, invalidating all earlier ones.
    pub fn issue(&self) -> u64 {
        self.current.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// True while `ticket` is still the newest issued request.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.current.load(Ordering::Relaxed) == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_ticket_is_current() {
        let seq = RequestSeq::new();
        let t = seq.issue();
        assert!(seq.is_current(t));
    }

    #[test]
    fn stale_ticket_is_rejected() {
        let seq = RequestSeq::new();
        let first = seq.issue();
        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn clones_share_the_sequence() {
        let seq = RequestSeq::new();
        let handle = seq.clone();
        let first = seq.issue();
        let second = handle.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }
}
