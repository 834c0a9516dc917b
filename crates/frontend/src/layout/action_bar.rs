use crate::domain::a001_sku_mapping::ui::open_mappings;
use crate::domain::a002_inventory::ui::{open_changes, open_inventory};
use crate::layout::modal_service::use_modal;
use crate::shared::config::use_app_config;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use crate::usecases::u502_reset_inventory::view::ResetInventoryButton;
use leptos::prelude::*;

/// Reset plus the three buttons that open server data in the modal.
#[component]
pub fn ActionBar() -> impl IntoView {
    let config = use_app_config();
    let modal = use_modal();
    let toast = use_toast();

    let view_mappings = {
        let config = config.clone();
        move |_| open_mappings(config.clone(), modal, toast)
    };
    let view_inventory = {
        let config = config.clone();
        move |_| open_inventory(config.clone(), modal, toast)
    };
    let view_changes = move |_| open_changes(config.clone(), modal, toast);

    view! {
        <section class="actions-section">
            <ResetInventoryButton />
            <button id="viewMappingsBtn" class="btn btn-info" on:click=view_mappings>
                {icon("mapping")} " View Mappings"
            </button>
            <button id="viewInventoryBtn" class="btn btn-info" on:click=view_inventory>
                {icon("inventory")} " View Inventory"
            </button>
            <button id="viewChangesBtn" class="btn btn-info" on:click=view_changes>
                {icon("changes")} " View Changes"
            </button>
        </section>
    }
}
