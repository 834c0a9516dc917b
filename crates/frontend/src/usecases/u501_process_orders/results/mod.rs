//! Results section: summary cards above four tabbed panels.
//!
//! Everything below renders from the held [`ProcessingResult`]; nothing here
//! writes application state except the active tab and the filters.

pub mod filters;
mod inventory_tab;
mod orders_tab;
mod summary_tab;
pub mod tabs;
mod unmapped_tab;

use crate::layout::global_context::{use_global_context, AppGlobalContext};
use contracts::usecases::u501_process_orders::ProcessingResult;
use inventory_tab::InventoryTab;
use leptos::prelude::*;
use orders_tab::OrdersTab;
use summary_tab::SummaryTab;
use tabs::{ResultsTab, TabBar, TabPanel};
use unmapped_tab::UnmappedTab;

/// Read a projection of the held result, tracking changes.
fn with_result<T: Default>(ctx: AppGlobalContext, f: impl FnOnce(&ProcessingResult) -> T) -> T {
    ctx.results.with(|store| store.current().map(f).unwrap_or_default())
}

#[component]
fn SummaryCards() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div id="summaryCards" class="summary-cards">
            {move || {
                with_result(ctx, |r| r.summary.totals().to_vec())
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="summary-card">
                                <h3>{value}</h3>
                                <p>{label}</p>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
pub fn ResultsSection() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <Show when=move || ctx.results.with(|r| r.is_visible())>
            <section id="resultsSection" class="results-section show">
                <h2>"Processing Results"</h2>
                <SummaryCards />
                <TabBar />
                <TabPanel tab=ResultsTab::Summary>
                    <SummaryTab />
                </TabPanel>
                <TabPanel tab=ResultsTab::Inventory>
                    <InventoryTab />
                </TabPanel>
                <TabPanel tab=ResultsTab::Orders>
                    <OrdersTab />
                </TabPanel>
                <TabPanel tab=ResultsTab::Unmapped>
                    <UnmappedTab />
                </TabPanel>
            </section>
        </Show>
    }
}
