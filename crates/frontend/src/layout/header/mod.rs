use crate::shared::config::use_app_config;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let config = use_app_config();

    view! {
        <header class="header">
            <h1>"Warehouse Management System"</h1>
            <p class="header__subtitle">"SKU mapping and inventory updates from marketplace orders"</p>
            <small class="header__api" title="API server">{config.api_base}</small>
        </header>
    }
}
