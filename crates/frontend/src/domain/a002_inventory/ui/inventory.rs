use super::super::api;
use crate::layout::modal_service::{ModalContent, ModalService};
use crate::shared::config::AppConfig;
use crate::shared::toast::ToastService;
use contracts::domain::a002_inventory::InventoryResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub fn open_inventory(config: AppConfig, modal: ModalService, toast: ToastService) {
    let ticket = modal.begin_load();
    spawn_local(async move {
        match api::fetch_inventory(&config).await {
            Ok(data) => modal.finish_load(ticket, ModalContent::Inventory(data)),
            Err(e) => {
                log::error!("Error fetching inventory: {}", e);
                toast.error("Failed to load inventory");
            }
        }
    });
}

#[component]
pub fn InventoryView(data: InventoryResponse) -> impl IntoView {
    let title = data.title();
    let note = data.truncation_note();

    view! {
        <h2>{title}</h2>
        <div class="table-container">
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"MSKU"</th>
                        <th>"Panel"</th>
                        <th>"Current Stock"</th>
                        <th>"Original Stock"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    {data
                        .inventory
                        .into_iter()
                        .map(|item| {
                            view! {
                                <tr>
                                    <td><strong>{item.msku}</strong></td>
                                    <td>{item.panel}</td>
                                    <td class="number">{item.current_stock}</td>
                                    <td class="number">{item.original_stock}</td>
                                    <td>{item.status}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
        {note.map(|n| view! { <p class="mt-20 text-info">{n}</p> })}
    }
}
