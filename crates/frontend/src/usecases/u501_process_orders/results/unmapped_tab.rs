use super::with_result;
use crate::layout::global_context::use_global_context;
use crate::layout::modal_service::{use_modal, ModalContent};
use crate::shared::dom_utils::closest_data_attr;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// Unmapped SKUs with a Search button each. The buttons carry `data-sku`
/// and share one listener on the table body.
#[component]
pub fn UnmappedTab() -> impl IntoView {
    let ctx = use_global_context();
    let modal = use_modal();

    let skus = move || with_result(ctx, |r| r.unmapped_skus.clone());

    let on_search = move |ev: MouseEvent| {
        if let Some(sku) = closest_data_attr(&ev, "data-sku") {
            modal.show(ModalContent::SkuSearch(sku));
        }
    };

    view! {
        <div id="unmappedContent">
            <Show
                when=move || !skus().is_empty()
                fallback=|| view! {
                    <p class="text-success">"✅ All SKUs were successfully mapped!"</p>
                }
            >
                <div class="mb-20">
                    <p class="text-warning">"⚠️ The following SKUs could not be mapped to MSKUs:"</p>
                </div>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            <th>"Unmapped SKU"</th>
                            <th>"Action"</th>
                        </tr>
                    </thead>
                    <tbody on:click=on_search>
                        {move || {
                            skus()
                                .into_iter()
                                .enumerate()
                                .map(|(index, sku)| {
                                    view! {
                                        <tr>
                                            <td>{index + 1}</td>
                                            <td><strong>{sku.clone()}</strong></td>
                                            <td>
                                                <button class="btn btn-info" data-sku=sku>
                                                    "Search"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
