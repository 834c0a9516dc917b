use super::filters::MarketplaceFilter;
use super::with_result;
use crate::layout::global_context::use_global_context;
use contracts::usecases::u501_process_orders::ProcessedOrder;
use leptos::prelude::*;

fn order_row(order: ProcessedOrder) -> impl IntoView {
    let marketplace = order.marketplace_label();
    let badge = order.badge_class();
    let date = order.order_date_label();
    let location = order.customer_location_label();
    let product = order.product_name_label();
    let product_title = product.clone();
    view! {
        <tr>
            <td><strong>{marketplace}</strong></td>
            <td>{order.original_sku}</td>
            <td><strong>{order.mapped_msku}</strong></td>
            <td class="number">{order.quantity}</td>
            <td><span class=badge>{order.status}</span></td>
            <td>{date}</td>
            <td>{location}</td>
            <td class="cell-ellipsis" title=product_title>{product}</td>
        </tr>
    }
}

#[component]
pub fn OrdersTab() -> impl IntoView {
    let ctx = use_global_context();
    let filters = ctx.filters;

    let has_rows = move || with_result(ctx, |r| !r.processed_orders.is_empty());
    let marketplaces = move || with_result(ctx, |r| r.summary.marketplaces());
    let visible_rows = move || {
        let f = filters.get();
        with_result(ctx, |r| {
            f.visible_orders(&r.processed_orders)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="table-controls">
            <input
                type="text"
                id="ordersSearch"
                placeholder="Search orders..."
                prop:value=move || filters.with(|f| f.orders_search.clone())
                on:input=move |ev| {
                    let term = event_target_value(&ev);
                    filters.update(|f| f.orders_search = term);
                }
            />
            <select
                id="marketplaceFilter"
                prop:value=move || filters.with(|f| f.marketplace.value())
                on:change=move |ev| {
                    let marketplace = MarketplaceFilter::from_value(&event_target_value(&ev));
                    filters.update(|f| f.marketplace = marketplace);
                }
            >
                <option value=MarketplaceFilter::ALL_VALUE>"All Marketplaces"</option>
                {move || {
                    marketplaces()
                        .into_iter()
                        .map(|m| {
                            let label = m.to_uppercase();
                            view! { <option value=m>{label}</option> }
                        })
                        .collect_view()
                }}
            </select>
        </div>
        <div id="ordersContent" class="table-container">
            <Show
                when=has_rows
                fallback=|| view! { <p>"No processed orders found."</p> }
            >
                <table class="data-table" id="ordersTable">
                    <thead>
                        <tr>
                            <th>"Marketplace"</th>
                            <th>"Original SKU"</th>
                            <th>"Mapped MSKU"</th>
                            <th>"Quantity"</th>
                            <th>"Status"</th>
                            <th>"Order Date"</th>
                            <th>"Customer Location"</th>
                            <th>"Product Name"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible_rows().into_iter().map(order_row).collect_view()}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
