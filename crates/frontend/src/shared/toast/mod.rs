//! Transient notification banner.
//!
//! One slot, no queue: a new toast replaces the visible one. Each toast
//! dismisses itself after [`TOAST_DURATION_MS`]; a dismissal only clears the
//! slot if its toast is still the one shown.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub const TOAST_DURATION_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn class(&self) -> String {
        format!("toast {} show", self.kind.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastSlot {
    current: Option<Toast>,
    next_id: u64,
}

impl ToastSlot {
    /// Replace the visible toast; returns the id its dismissal must present.
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.next_id += 1;
        self.current = Some(Toast {
            id: self.next_id,
            message: message.into(),
            kind,
        });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|t| t.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}

#[derive(Clone, Copy)]
pub struct ToastService {
    slot: RwSignal<ToastSlot>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            slot: RwSignal::new(ToastSlot::default()),
        }
    }

    pub fn show(&self, message: impl Into<String>, kind: ToastKind) {
        let message = message.into();
        let mut id = 0;
        self.slot.update(|s| id = s.show(message, kind));

        let slot = self.slot;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            slot.update(|s| {
                s.dismiss(id);
            });
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Error);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Info);
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context (provide it in app root)")
}

/// Renders the toast slot. Must be mounted exactly once.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_toast();

    let class = move || {
        svc.slot
            .with(|s| s.current().map(Toast::class))
            .unwrap_or_else(|| "toast".to_string())
    };
    let message = move || {
        svc.slot
            .with(|s| s.current().map(|t| t.message.clone()))
            .unwrap_or_default()
    };

    view! {
        <div id="toast" class=class role="status">
            {message}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_call_wins() {
        let mut slot = ToastSlot::default();
        slot.show("first", ToastKind::Info);
        slot.show("second", ToastKind::Error);
        let t = slot.current().unwrap();
        assert_eq!(t.message, "second");
        assert_eq!(t.class(), "toast error show");
    }

    #[test]
    fn test_earlier_dismissal_keeps_newer_toast() {
        let mut slot = ToastSlot::default();
        let first = slot.show("Server connection successful", ToastKind::Success);
        let second = slot.show("Processing failed: bad file", ToastKind::Error);
        assert!(!slot.dismiss(first));
        assert_eq!(slot.current().unwrap().id, second);
        assert!(slot.dismiss(second));
        assert!(slot.current().is_none());
    }
}
