use crate::shared::api_utils::{post_action, ApiError};
use crate::shared::config::AppConfig;
use contracts::usecases::u502_reset_inventory::FALLBACK_ERROR;

/// `POST /reset-inventory`
pub async fn reset_inventory(config: &AppConfig) -> Result<(), ApiError> {
    post_action(config, "/reset-inventory", FALLBACK_ERROR).await
}
