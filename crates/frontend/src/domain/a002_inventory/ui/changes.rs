use super::super::api;
use crate::layout::modal_service::{ModalContent, ModalService};
use crate::shared::config::AppConfig;
use crate::shared::toast::ToastService;
use contracts::domain::a002_inventory::InventoryChangesResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub fn open_changes(config: AppConfig, modal: ModalService, toast: ToastService) {
    let ticket = modal.begin_load();
    spawn_local(async move {
        match api::fetch_changes(&config).await {
            Ok(data) => modal.finish_load(ticket, ModalContent::Changes(data)),
            Err(e) => {
                log::error!("Error fetching changes: {}", e);
                toast.error("Failed to load changes");
            }
        }
    });
}

#[component]
pub fn ChangesView(data: InventoryChangesResponse) -> impl IntoView {
    let title = data.title();

    if data.is_empty() {
        return view! {
            <h2>{title}</h2>
            <p class="text-info">"No inventory changes found. Process some orders first!"</p>
        }
        .into_any();
    }

    view! {
        <h2>{title}</h2>
        <div class="table-container">
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"MSKU"</th>
                        <th>"Panel"</th>
                        <th>"Original Stock"</th>
                        <th>"Current Stock"</th>
                        <th>"Difference"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    {data
                        .changes
                        .into_iter()
                        .map(|change| {
                            let difference = change.difference_label();
                            view! {
                                <tr>
                                    <td><strong>{change.msku}</strong></td>
                                    <td>{change.panel}</td>
                                    <td class="number">{change.original_stock}</td>
                                    <td class="number">{change.current_stock}</td>
                                    <td class="number text-danger">{difference}</td>
                                    <td>{change.status}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
    .into_any()
}
