pub mod action_bar;
pub mod global_context;
pub mod header;
pub mod modal_service;

use crate::shared::config::use_app_config;
use crate::shared::toast::{use_toast, ToastHost};
use crate::system::health::model::{check_server_health, refresh_status};
use crate::system::health::ui::StatusCards;
use crate::usecases::u501_process_orders::results::ResultsSection;
use crate::usecases::u501_process_orders::view::ProcessOrdersForm;
use action_bar::ActionBar;
use global_context::use_global_context;
use header::Header;
use leptos::prelude::*;
use modal_service::ModalHost;
use thaw::Spinner;

pub use modal_service::ModalService;

#[component]
fn LoadingIndicator() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <Show when=move || ctx.processing.get()>
            <div id="loadingSpinner" class="loading-spinner show">
                <Spinner />
                <p>"Processing orders..."</p>
            </div>
        </Show>
    }
}

/// Single-page layout.
///
/// ```text
/// +------------------------------------------+
/// |  Header                                   |
/// |  Status cards                             |
/// |  Upload form                              |
/// |  Actions                                  |
/// |  Loading indicator                        |
/// |  Results (hidden until a result is held)  |
/// +------------------------------------------+
/// ```
///
/// The modal and the toast float above everything.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_global_context();
    let config = use_app_config();
    let toast = use_toast();

    // Startup: health check, then the counts.
    check_server_health(ctx, config.clone(), toast);
    refresh_status(ctx, config);

    view! {
        <div class="container">
            <Header />
            <StatusCards />
            <ProcessOrdersForm />
            <ActionBar />
            <LoadingIndicator />
            <ResultsSection />
        </div>
        <ModalHost />
        <ToastHost />
    }
}
