use crate::shared::api_utils::{get_json, ApiError};
use crate::shared::config::AppConfig;
use contracts::domain::a003_combo::CombosResponse;

/// `GET /combos`
pub async fn fetch_combos(config: &AppConfig) -> Result<CombosResponse, ApiError> {
    get_json(config, "/combos").await
}
