//! Monotonic request tickets for discarding out-of-order network responses.
//!
//! A handler takes a ticket before it starts a request and checks the ticket
//! again once the response arrives. If a newer request was started in the
//! meantime, the response is stale and must not overwrite the newer state.

use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one request issued by a [RequestSequence].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

/// Hands out increasing [RequestTicket]s and remembers the latest one.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: AtomicU64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, making every previously issued ticket stale.
    pub fn issue(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `ticket` belongs to the most recently started request.
    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}
