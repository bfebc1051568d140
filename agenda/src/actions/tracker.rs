use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Ticket handed out for one request against a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

/// Monotonic request counter shared by clones.
///
/// Only the holder of the latest ticket may publish its response, so a
/// slow response can never overwrite a newer request's result.
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    latest: Arc<AtomicU64>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request and return its ticket.
    pub fn issue(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Return whether no newer request was issued since `ticket`.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::RequestTracker;

    #[test]
    fn given_two_requests_when_checked_then_only_latest_is_current() {
        let tracker = RequestTracker::new();

        let first = tracker.issue();
        let second = tracker.clone().issue();

        assert!(first < second);
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }
}
