use super::super::api;
use crate::layout::modal_service::{ModalContent, ModalService};
use crate::shared::config::AppConfig;
use crate::shared::toast::ToastService;
use contracts::domain::a001_sku_mapping::MappingsResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Fetch the mapping table and show it in the modal.
pub fn open_mappings(config: AppConfig, modal: ModalService, toast: ToastService) {
    let ticket = modal.begin_load();
    spawn_local(async move {
        match api::fetch_mappings(&config).await {
            Ok(data) => modal.finish_load(ticket, ModalContent::Mappings(data)),
            Err(e) => {
                log::error!("Error fetching mappings: {}", e);
                toast.error("Failed to load mappings");
            }
        }
    });
}

#[component]
pub fn MappingsView(data: MappingsResponse) -> impl IntoView {
    let title = data.title();
    let note = data.truncation_note();

    view! {
        <h2>{title}</h2>
        <div class="table-container">
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"SKU"</th>
                        <th>"MSKU"</th>
                    </tr>
                </thead>
                <tbody>
                    {data
                        .mappings
                        .into_iter()
                        .map(|m| {
                            view! {
                                <tr>
                                    <td>{m.sku}</td>
                                    <td><strong>{m.msku}</strong></td>
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
