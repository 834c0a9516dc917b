use crate::shared::api_utils::{get_json, ApiError};
use crate::shared::config::AppConfig;
use contracts::system::health::HealthResponse;

/// `GET /health`
pub async fn check_health(config: &AppConfig) -> Result<HealthResponse, ApiError> {
    get_json(config, "/health").await
}
