use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
fn StatusCard(
    id: &'static str,
    label: &'static str,
    icon_name: &'static str,
    #[prop(into)] value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="status-card">
            <div class="status-card__icon">{icon(icon_name)}</div>
            <div class="status-card__content">
                <h3 id=id>{move || value.get()}</h3>
                <p>{label}</p>
            </div>
        </div>
    }
}

/// Server status and loaded-data counts.
#[component]
pub fn StatusCards() -> impl IntoView {
    let ctx = use_global_context();
    let status = ctx.status;

    let server = Signal::derive(move || status.with(|s| s.server_status.clone()));
    let mappings = Signal::derive(move || status.with(|s| s.mappings.to_string()));
    let combos = Signal::derive(move || status.with(|s| s.combos.to_string()));
    let inventory = Signal::derive(move || status.with(|s| s.inventory.to_string()));

    view! {
        <section class="status-section">
            <StatusCard id="serverStatus" label="Server Status" icon_name="status" value=server />
            <StatusCard id="mappingsCount" label="SKU Mappings" icon_name="mapping" value=mappings />
            <StatusCard id="combosCount" label="Combo Products" icon_name="orders" value=combos />
            <StatusCard id="inventoryCount" label="Inventory Items" icon_name="inventory" value=inventory />
        </section>
    }
}
