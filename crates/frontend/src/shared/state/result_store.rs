//! The single "current result" of the page.
//!
//! Written only by the submit and reset handlers, and only once their
//! request has completed. Both draw tickets from the same sequence so the
//! later-started action wins when their responses overlap.

use crate::shared::request_seq::RequestSeq;
use contracts::usecases::u501_process_orders::ProcessingResult;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultStore {
    current: Option<ProcessingResult>,
    seq: RequestSeq,
}

impl ResultStore {
    /// Ticket for a submit or reset about to be sent.
    pub fn begin(&mut self) -> u64 {
        self.seq.issue()
    }

    /// Replace the held result. Returns false if the response was superseded.
    pub fn complete_submit(&mut self, ticket: u64, result: ProcessingResult) -> bool {
        if !self.seq.try_apply(ticket) {
            return false;
        }
        self.current = Some(result);
        true
    }

    /// Drop the held result. Returns false if the response was superseded.
    pub fn complete_reset(&mut self, ticket: u64) -> bool {
        if !self.seq.try_apply(ticket) {
            return false;
        }
        self.current = None;
        true
    }

    pub fn current(&self) -> Option<&ProcessingResult> {
        self.current.as_ref()
    }

    /// The results section is shown exactly while a result is held.
    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(orders: u64) -> ProcessingResult {
        let mut r = ProcessingResult {
            success: true,
            ..Default::default()
        };
        r.summary.total_orders_processed = orders;
        r
    }

    #[test]
    fn test_submit_then_reset() {
        let mut store = ResultStore::default();
        assert!(!store.is_visible());

        let t = store.begin();
        assert!(store.complete_submit(t, result(3)));
        assert!(store.is_visible());
        assert_eq!(store.current().unwrap().summary.total_orders_processed, 3);

        let t = store.begin();
        assert!(store.complete_reset(t));
        assert!(!store.is_visible());
        assert!(store.current().is_none());
    }

    #[test]
    fn test_failed_submit_leaves_previous_result() {
        let mut store = ResultStore::default();
        let t = store.begin();
        store.complete_submit(t, result(7));

        // a failing submit draws a ticket but never completes
        let _t = store.begin();
        assert_eq!(store.current().unwrap().summary.total_orders_processed, 7);
    }

    #[test]
    fn test_stale_submit_cannot_overwrite_reset() {
        let mut store = ResultStore::default();
        let submit = store.begin();
        let reset = store.begin();
        assert!(store.complete_reset(reset));
        assert!(!store.complete_submit(submit, result(1)));
        assert!(!store.is_visible());
    }

    #[test]
    fn test_superseded_submit_keeps_store_usable() {
        let mut store = ResultStore::default();
        let submit = store.begin();
        let reset = store.begin();
        assert!(store.complete_reset(reset));

        // the server processed the orders, but the later reset already applied
        assert!(!store.complete_submit(submit, result(4)));
        assert!(store.current().is_none());

        let next = store.begin();
        assert!(store.complete_submit(next, result(2)));
        assert_eq!(store.current().unwrap().summary.total_orders_processed, 2);
    }
}
