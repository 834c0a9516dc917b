//! Helpers for delegated event handling.

use wasm_bindgen::JsCast;

/// Value of `attr` on the event target or its nearest ancestor carrying it.
///
/// Lets one listener on a container serve every generated row or button,
/// which identifies itself through a `data-*` attribute.
pub fn closest_data_attr(ev: &web_sys::Event, attr: &str) -> Option<String> {
    let element = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let holder = element.closest(&format!("[{}]", attr)).ok().flatten()?;
    holder.get_attribute(attr)
}

/// Files currently selected in a file input, in selection order.
pub fn selected_files(input: &web_sys::HtmlInputElement) -> Vec<web_sys::File> {
    match input.files() {
        Some(list) => (0..list.length()).filter_map(|i| list.get(i)).collect(),
        None => Vec::new(),
    }
}
