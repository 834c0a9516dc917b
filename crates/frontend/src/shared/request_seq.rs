//! Ordering of overlapping requests.
//!
//! Handlers never cancel in-flight requests. Instead each request takes a
//! ticket and its response is applied only if nothing newer got there first,
//! so a slow, superseded response cannot overwrite a fresher one.

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RequestSeq {
    issued: u64,
    applied: u64,
}

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticket for a request that is about to start.
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Apply the response of `ticket` unless a later-issued one was already applied.
    pub fn try_apply(&mut self, ticket: u64) -> bool {
        if ticket > self.applied {
            self.applied = ticket;
            true
        } else {
            false
        }
    }

    /// True while no request was issued after `ticket`.
    pub fn is_latest(&self, ticket: u64) -> bool {
        ticket == self.issued
    }

    /// Drop every response still in flight.
    pub fn invalidate(&mut self) {
        self.applied = self.issued;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_order_responses_apply() {
        let mut seq = RequestSeq::new();
        let a = seq.issue();
        assert!(seq.try_apply(a));
        let b = seq.issue();
        assert!(seq.try_apply(b));
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut seq = RequestSeq::new();
        let old = seq.issue();
        let new = seq.issue();
        assert!(seq.try_apply(new));
        assert!(!seq.try_apply(old));
    }

    #[test]
    fn test_older_response_applies_when_newer_failed() {
        let mut seq = RequestSeq::new();
        let reset = seq.issue();
        let _failed_submit = seq.issue();
        // the submit never applies anything
        assert!(seq.try_apply(reset));
    }

    #[test]
    fn test_ticket_applies_once() {
        let mut seq = RequestSeq::new();
        let t = seq.issue();
        assert!(seq.try_apply(t));
        assert!(!seq.try_apply(t));
    }

    #[test]
    fn test_invalidate_drops_pending() {
        let mut seq = RequestSeq::new();
        let t = seq.issue();
        seq.invalidate();
        assert!(!seq.try_apply(t));
        let next = seq.issue();
        assert!(seq.try_apply(next));
    }

    #[test]
    fn test_is_latest() {
        let mut seq = RequestSeq::new();
        let a = seq.issue();
        assert!(seq.is_latest(a));
        let b = seq.issue();
        assert!(!seq.is_latest(a));
        assert!(seq.is_latest(b));
    }
}
