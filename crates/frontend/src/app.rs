use crate::layout::global_context::AppGlobalContext;
use crate::layout::{ModalService, Shell};
use crate::shared::config::AppConfig;
use crate::shared::toast::ToastService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    log::info!("API base: {}", config.api_base);
    provide_context(config);

    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // One modal and one toast slot for the whole page.
    provide_context(ModalService::new());
    provide_context(ToastService::new());

    view! {
        <Shell />
    }
}
