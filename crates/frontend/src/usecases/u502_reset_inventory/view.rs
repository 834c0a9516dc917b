use super::api;
use crate::layout::global_context::use_global_context;
use crate::shared::api_utils::failure_message;
use crate::shared::config::use_app_config;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use crate::system::health::model::refresh_status;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u502_reset_inventory::{ResetInventory, CONFIRM_MESSAGE, FALLBACK_ERROR};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn confirmed() -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(CONFIRM_MESSAGE).ok())
        .unwrap_or(false)
}

/// Restores server inventory and hides the results of earlier processing.
#[component]
pub fn ResetInventoryButton() -> impl IntoView {
    let ctx = use_global_context();
    let config = use_app_config();
    let toast = use_toast();

    let on_click = move |_| {
        if !confirmed() {
            return;
        }

        log::info!("{}: requested", ResetInventory::full_name());
        let ticket = ctx.begin_result_request();
        let config = config.clone();

        spawn_local(async move {
            match api::reset_inventory(&config).await {
                Ok(()) => {
                    toast.success("Inventory reset successfully!");
                    refresh_status(ctx, config);
                    if !ctx.clear_result(ticket) {
                        log::debug!("reset-inventory response {} superseded, results kept", ticket);
                    }
                }
                Err(e) => {
                    log::error!("Reset error: {}", e);
                    toast.error(failure_message(FALLBACK_ERROR, &e));
                }
            }
        });
    };

    view! {
        <button
            id="resetBtn"
            class="btn btn-warning"
            title=ResetInventory::description()
            on:click=on_click
        >
            {icon("reset")} " " {ResetInventory::display_name()}
        </button>
    }
}
