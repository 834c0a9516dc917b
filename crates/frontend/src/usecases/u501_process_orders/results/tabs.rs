//! Result tabs. Exactly one tab is active; its button and panel carry `active`.

use crate::layout::global_context::use_global_context;
use crate::shared::dom_utils::closest_data_attr;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultsTab {
    #[default]
    Summary,
    Inventory,
    Orders,
    Unmapped,
}

impl ResultsTab {
    pub const ALL: [ResultsTab; 4] = [
        ResultsTab::Summary,
        ResultsTab::Inventory,
        ResultsTab::Orders,
        ResultsTab::Unmapped,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ResultsTab::Summary => "summary",
            ResultsTab::Inventory => "inventory",
            ResultsTab::Orders => "orders",
            ResultsTab::Unmapped => "unmapped",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResultsTab::Summary => "Summary",
            ResultsTab::Inventory => "Inventory Updates",
            ResultsTab::Orders => "Processed Orders",
            ResultsTab::Unmapped => "Unmapped SKUs",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }

    /// Element id of the tab's panel, e.g. "summaryTab".
    pub fn panel_id(&self) -> String {
        format!("{}Tab", self.key())
    }

    pub fn button_class(&self, active: ResultsTab) -> &'static str {
        if *self == active {
            "tab-button active"
        } else {
            "tab-button"
        }
    }

    pub fn panel_class(&self, active: ResultsTab) -> &'static str {
        if *self == active {
            "tab-content active"
        } else {
            "tab-content"
        }
    }
}

/// Tab buttons. One delegated listener resolves the clicked tab from `data-tab`.
#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_global_context();

    let on_click = move |ev: MouseEvent| {
        if let Some(tab) = closest_data_attr(&ev, "data-tab").and_then(|k| ResultsTab::from_key(&k)) {
            ctx.switch_tab(tab);
        }
    };

    view! {
        <div class="tabs" on:click=on_click>
            {ResultsTab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            class=move || tab.button_class(ctx.active_tab.get())
                            data-tab=tab.key()
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Panel shell of one tab; hidden unless its tab is active.
#[component]
pub fn TabPanel(tab: ResultsTab, children: Children) -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div id=tab.panel_id() class=move || tab.panel_class(ctx.active_tab.get())>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_active_for_every_tab() {
        for active in ResultsTab::ALL {
            let buttons = ResultsTab::ALL
                .iter()
                .filter(|t| t.button_class(active).ends_with("active"))
                .count();
            let panels = ResultsTab::ALL
                .iter()
                .filter(|t| t.panel_class(active).ends_with("active"))
                .count();
            assert_eq!(buttons, 1, "{:?}", active);
            assert_eq!(panels, 1, "{:?}", active);
            assert_eq!(active.button_class(active), "tab-button active");
            assert_eq!(active.panel_class(active), "tab-content active");
        }
    }

    #[test]
    fn test_default_is_summary() {
        assert_eq!(ResultsTab::default(), ResultsTab::Summary);
    }

    #[test]
    fn test_keys_round_trip() {
        for tab in ResultsTab::ALL {
            assert_eq!(ResultsTab::from_key(tab.key()), Some(tab));
        }
        assert_eq!(ResultsTab::from_key("history"), None);
        assert_eq!(ResultsTab::Orders.panel_id(), "ordersTab");
    }
}
