use super::with_result;
use crate::layout::global_context::use_global_context;
use contracts::usecases::u501_process_orders::Summary;
use leptos::prelude::*;

fn marketplace_table(summary: &Summary) -> Option<AnyView> {
    if summary.marketplace_summary.is_empty() {
        return None;
    }

    let rows = summary
        .marketplace_summary
        .iter()
        .map(|(name, stats)| {
            view! {
                <tr>
                    <td><strong>{name.to_uppercase()}</strong></td>
                    <td class="number">{stats.orders_processed}</td>
                    <td class="number">{stats.unique_mskus}</td>
                    <td class="number">{stats.total_quantity}</td>
                    <td class="number">{stats.unmapped_skus}</td>
                </tr>
            }
        })
        .collect_view();

    Some(
        view! {
            <h3>"Marketplace Summary"</h3>
            <div class="table-container">
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Marketplace"</th>
                            <th>"Orders"</th>
                            <th>"Unique MSKUs"</th>
                            <th>"Total Quantity"</th>
                            <th>"Unmapped SKUs"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
        }
        .into_any(),
    )
}

#[component]
pub fn SummaryTab() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div id="summaryContent">
            {move || {
                let summary = with_result(ctx, |r| r.summary.clone());
                let totals = summary
                    .totals()
                    .into_iter()
                    .map(|(label, value)| {
                        view! { <p><strong>{label} ":"</strong> " " {value}</p> }
                    })
                    .collect_view();
                view! {
                    <div class="summary-details">
                        <h3>"Processing Summary"</h3>
                        {totals}
                        {marketplace_table(&summary)}
                    </div>
                }
            }}
        </div>
    }
}
