//! Application state, provided once through context.
//!
//! Every write to the held processing result goes through
//! [`AppGlobalContext::apply_result`] (submit succeeded) or
//! [`AppGlobalContext::clear_result`] (reset succeeded).

use crate::shared::request_seq::RequestSeq;
use crate::shared::state::result_store::ResultStore;
use crate::system::health::model::StatusCounts;
use crate::usecases::u501_process_orders::results::filters::ResultFilters;
use crate::usecases::u501_process_orders::results::tabs::ResultsTab;
use contracts::usecases::u501_process_orders::ProcessingResult;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub results: RwSignal<ResultStore>,
    pub active_tab: RwSignal<ResultsTab>,
    pub filters: RwSignal<ResultFilters>,
    pub status: RwSignal<StatusCounts>,
    pub status_seq: RwSignal<RequestSeq>,
    /// A submit is in flight: spinner shown, process button disabled.
    pub processing: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            results: RwSignal::new(ResultStore::default()),
            active_tab: RwSignal::new(ResultsTab::default()),
            filters: RwSignal::new(ResultFilters::default()),
            status: RwSignal::new(StatusCounts::default()),
            status_seq: RwSignal::new(RequestSeq::new()),
            processing: RwSignal::new(false),
        }
    }

    /// Ticket for a submit or reset about to be sent.
    pub fn begin_result_request(&self) -> u64 {
        let mut ticket = 0;
        self.results.update(|r| ticket = r.begin());
        ticket
    }

    /// Show a freshly processed result. Filters start over for the new tables.
    pub fn apply_result(&self, ticket: u64, result: ProcessingResult) -> bool {
        let mut applied = false;
        self.results
            .update(|r| applied = r.complete_submit(ticket, result));
        if applied {
            self.filters.set(ResultFilters::default());
        }
        applied
    }

    pub fn clear_result(&self, ticket: u64) -> bool {
        let mut applied = false;
        self.results.update(|r| applied = r.complete_reset(ticket));
        applied
    }

    pub fn switch_tab(&self, tab: ResultsTab) {
        self.active_tab.set(tab);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not provided in context (provide it in app root)")
}
