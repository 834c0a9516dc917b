use leptos::prelude::*;

const REMEDIES: [&str; 4] = [
    "Check if the SKU exists in your master mapping file",
    "Verify the SKU spelling/format",
    "Add this SKU to your master mapping file",
    "Contact your administrator for mapping updates",
];

/// Guidance for a SKU the server could not map.
#[component]
pub fn SkuSearchView(sku: String) -> impl IntoView {
    view! {
        <h2>"SKU Search"</h2>
        <p>"Searching for SKU: " <strong>{sku}</strong></p>
        <p class="text-warning">"This SKU was not found in the master mapping file."</p>
        <p>"Possible solutions:"</p>
        <ul>
            {REMEDIES.iter().map(|r| view! { <li>{*r}</li> }).collect_view()}
        </ul>
    }
}
