use super::filters::StatusFilter;
use super::with_result;
use crate::layout::global_context::use_global_context;
use contracts::usecases::u501_process_orders::InventoryUpdate;
use leptos::prelude::*;

fn update_row(item: InventoryUpdate) -> impl IntoView {
    let badge = item.badge_class();
    let status = item.stock_status().label();
    view! {
        <tr>
            <td><strong>{item.msku}</strong></td>
            <td>{item.panel}</td>
            <td class="number">{item.original_stock}</td>
            <td class="number">{item.sold_quantity}</td>
            <td class="number">{item.new_stock}</td>
            <td><span class=badge>{status}</span></td>
        </tr>
    }
}

#[component]
pub fn InventoryTab() -> impl IntoView {
    let ctx = use_global_context();
    let filters = ctx.filters;

    let has_rows = move || with_result(ctx, |r| !r.inventory_updates.is_empty());
    let visible_rows = move || {
        let f = filters.get();
        with_result(ctx, |r| {
            f.visible_inventory(&r.inventory_updates)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="table-controls">
            <input
                type="text"
                id="inventorySearch"
                placeholder="Search MSKU or panel..."
                prop:value=move || filters.with(|f| f.inventory_search.clone())
                on:input=move |ev| {
                    let term = event_target_value(&ev);
                    filters.update(|f| f.inventory_search = term);
                }
            />
            <select
                id="inventoryFilter"
                prop:value=move || filters.with(|f| f.inventory_status.value())
                on:change=move |ev| {
                    let status = StatusFilter::from_value(&event_target_value(&ev));
                    filters.update(|f| f.inventory_status = status);
                }
            >
                {StatusFilter::ALL
                    .into_iter()
                    .map(|s| view! { <option value=s.value()>{s.label()}</option> })
                    .collect_view()}
            </select>
        </div>
        <div id="inventoryContent" class="table-container">
            <Show
                when=has_rows
                fallback=|| view! { <p>"No inventory updates found."</p> }
            >
                <table class="data-table" id="inventoryTable">
                    <thead>
                        <tr>
                            <th>"MSKU"</th>
                            <th>"Panel"</th>
                            <th>"Original Stock"</th>
                            <th>"Sold Qty"</th>
                            <th>"New Stock"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible_rows().into_iter().map(update_row).collect_view()}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
