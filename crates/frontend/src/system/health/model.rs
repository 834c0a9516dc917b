//! Status cards: server health plus the three loaded-data counts.

use super::api;
use crate::domain::a001_sku_mapping::api::fetch_mappings;
use crate::domain::a002_inventory::api::fetch_inventory;
use crate::domain::a003_combo::api::fetch_combos;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_utils::ApiError;
use crate::shared::config::AppConfig;
use crate::shared::toast::ToastService;
use contracts::system::health::HealthResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub const OFFLINE: &str = "Offline";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCounts {
    pub server_status: String,
    pub mappings: u64,
    pub combos: u64,
    pub inventory: u64,
}

impl Default for StatusCounts {
    fn default() -> Self {
        Self {
            server_status: "Checking...".to_string(),
            mappings: 0,
            combos: 0,
            inventory: 0,
        }
    }
}

impl StatusCounts {
    pub fn apply_health(&mut self, health: &HealthResponse) {
        self.server_status = health.status.clone();
        self.mappings = health.mappings_loaded;
        self.combos = health.combos_loaded;
        self.inventory = health.inventory_items;
    }

    /// Counts keep their last known values.
    pub fn mark_offline(&mut self) {
        self.server_status = OFFLINE.to_string();
    }
}

/// Startup connectivity check; the only status path that notifies the user.
pub fn check_server_health(ctx: AppGlobalContext, config: AppConfig, toast: ToastService) {
    spawn_local(async move {
        match api::check_health(&config).await {
            Ok(health) => {
                ctx.status.update(|s| s.apply_health(&health));
                toast.success("Server connection successful");
            }
            Err(e) => {
                ctx.status.update(|s| s.mark_offline());
                toast.error("Failed to connect to server");
                log::error!("Server health check failed: {}", e);
            }
        }
    });
}

async fn load_counts(ctx: AppGlobalContext, config: &AppConfig, ticket: u64) -> Result<(), ApiError> {
    let is_latest = move || ctx.status_seq.with_untracked(|s| s.is_latest(ticket));

    let mappings = fetch_mappings(config).await?;
    if is_latest() {
        ctx.status.update(|s| s.mappings = mappings.total_mappings);
    }

    let combos = fetch_combos(config).await?;
    if is_latest() {
        ctx.status.update(|s| s.combos = combos.total_combos);
    }

    let inventory = fetch_inventory(config).await?;
    if is_latest() {
        ctx.status.update(|s| s.inventory = inventory.total_items);
    }
    Ok(())
}

/// Re-read the three counts. Only the most recently started refresh writes.
pub fn refresh_status(ctx: AppGlobalContext, config: AppConfig) {
    let mut ticket = 0;
    ctx.status_seq.update(|s| ticket = s.issue());
    spawn_local(async move {
        if let Err(e) = load_counts(ctx, &config, ticket).await {
            log::error!("Failed to load status data: {}", e);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_fills_all_cards() {
        let mut counts = StatusCounts::default();
        counts.apply_health(&HealthResponse {
            status: "OK".to_string(),
            mappings_loaded: 10,
            combos_loaded: 2,
            inventory_items: 99,
        });
        assert_eq!(counts.server_status, "OK");
        assert_eq!((counts.mappings, counts.combos, counts.inventory), (10, 2, 99));
    }

    #[test]
    fn test_offline_keeps_counts() {
        let mut counts = StatusCounts {
            server_status: "OK".to_string(),
            mappings: 5,
            combos: 1,
            inventory: 7,
        };
        counts.mark_offline();
        assert_eq!(counts.server_status, "Offline");
        assert_eq!(counts.mappings, 5);
    }
}
