use crate::shared::api_utils::{get_json, ApiError};
use crate::shared::config::AppConfig;
use contracts::domain::a001_sku_mapping::MappingsResponse;

/// `GET /mappings`
pub async fn fetch_mappings(config: &AppConfig) -> Result<MappingsResponse, ApiError> {
    get_json(config, "/mappings").await
}
