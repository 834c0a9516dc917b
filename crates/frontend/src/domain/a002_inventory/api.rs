use crate::shared::api_utils::{get_json, ApiError};
use crate::shared::config::AppConfig;
use contracts::domain::a002_inventory::{InventoryChangesResponse, InventoryResponse};

/// `GET /inventory`
pub async fn fetch_inventory(config: &AppConfig) -> Result<InventoryResponse, ApiError> {
    get_json(config, "/inventory").await
}

/// `GET /inventory-changes`
pub async fn fetch_changes(config: &AppConfig) -> Result<InventoryChangesResponse, ApiError> {
    get_json(config, "/inventory-changes").await
}
