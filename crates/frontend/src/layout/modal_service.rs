//! Single reusable modal.
//!
//! The modal holds one typed [`ModalContent`] at a time; opening another view
//! replaces the body. Loads draw a ticket so a slow response can neither
//! replace a newer view nor reopen a modal the user already closed.

use crate::domain::a001_sku_mapping::ui::{MappingsView, SkuSearchView};
use crate::domain::a002_inventory::ui::{ChangesView, InventoryView};
use crate::shared::modal_frame::ModalFrame;
use crate::shared::request_seq::RequestSeq;
use contracts::domain::a001_sku_mapping::MappingsResponse;
use contracts::domain::a002_inventory::{InventoryChangesResponse, InventoryResponse};
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum ModalContent {
    Mappings(MappingsResponse),
    Inventory(InventoryResponse),
    Changes(InventoryChangesResponse),
    SkuSearch(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalSlot {
    content: Option<ModalContent>,
    seq: RequestSeq,
}

impl ModalSlot {
    pub fn begin_load(&mut self) -> u64 {
        self.seq.issue()
    }

    /// Show the result of a load unless it was superseded or the modal was closed since.
    pub fn finish_load(&mut self, ticket: u64, content: ModalContent) -> bool {
        if !self.seq.try_apply(ticket) {
            return false;
        }
        self.content = Some(content);
        true
    }

    /// Show content that needs no request, superseding pending loads.
    pub fn show(&mut self, content: ModalContent) {
        self.seq.issue();
        self.seq.invalidate();
        self.content = Some(content);
    }

    pub fn close(&mut self) {
        self.seq.invalidate();
        self.content = None;
    }

    pub fn content(&self) -> Option<&ModalContent> {
        self.content.as_ref()
    }
}

#[derive(Clone, Copy)]
pub struct ModalService {
    slot: RwSignal<ModalSlot>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            slot: RwSignal::new(ModalSlot::default()),
        }
    }

    pub fn begin_load(&self) -> u64 {
        let mut ticket = 0;
        self.slot.update(|s| ticket = s.begin_load());
        ticket
    }

    pub fn finish_load(&self, ticket: u64, content: ModalContent) {
        let mut shown = false;
        self.slot.update(|s| shown = s.finish_load(ticket, content));
        if !shown {
            log::debug!("modal load {} superseded, dropping response", ticket);
        }
    }

    pub fn show(&self, content: ModalContent) {
        self.slot.update(|s| s.show(content));
    }

    pub fn close(&self) {
        self.slot.update(|s| s.close());
    }
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_modal() -> ModalService {
    use_context::<ModalService>().expect("ModalService not provided in context (provide it in app root)")
}

fn render_content(content: ModalContent) -> AnyView {
    match content {
        ModalContent::Mappings(data) => view! { <MappingsView data=data /> }.into_any(),
        ModalContent::Inventory(data) => view! { <InventoryView data=data /> }.into_any(),
        ModalContent::Changes(data) => view! { <ChangesView data=data /> }.into_any(),
        ModalContent::SkuSearch(sku) => view! { <SkuSearchView sku=sku /> }.into_any(),
    }
}

/// Renders the modal at the application root. Must be mounted exactly once.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_modal();

    // Escape closes the modal. Mounted once for the app lifetime, so the closure is leaked.
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" && svc.slot.with_untracked(|s| s.content().is_some()) {
                    svc.close();
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    });

    let on_close = Callback::new(move |_| svc.close());

    // Ticket bookkeeping of a pending load must not rebuild the view on screen.
    let content = Memo::new(move |_| svc.slot.with(|s| s.content().cloned()));

    view! {
        {move || {
            content.get().map(|content| {
                view! {
                    <ModalFrame on_close=on_close>
                        {render_content(content)}
                    </ModalFrame>
                }
            })
        }}
    }
}
