//! API utilities for client-server communication
//!
//! Every endpoint is a plain request/response round trip: no retries, no
//! timeout beyond the browser's, no cancellation. Failures are classified
//! into [`ApiError`] and turned into toast text by the caller.

use super::config::AppConfig;
use contracts::usecases::common::ActionResponse;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),
    /// Non-2xx status without a usable payload.
    #[error("HTTP error: {0}")]
    Http(u16),
    /// The payload did not match the expected shape.
    #[error("Invalid response: {0}")]
    Decode(String),
    /// The server answered `success: false`; holds its message verbatim.
    #[error("{0}")]
    Application(String),
    /// A browser API needed to build the request is unavailable.
    #[error("Browser error: {0}")]
    Browser(String),
}

/// Toast text for a failed action, e.g. "Processing failed: bad file".
pub fn failure_message(prefix: &str, error: &ApiError) -> String {
    format!("{}: {}", prefix, error)
}

/// Resolve a `{success, error?}` enveloped response.
///
/// A decoded server message is reported even on a non-2xx status; a body that
/// cannot be decoded falls back to the status code.
pub fn settle_envelope<T, R>(
    http_ok: bool,
    status: u16,
    decoded: Result<T, String>,
    into_result: impl FnOnce(T) -> Result<R, String>,
) -> Result<R, ApiError> {
    match decoded {
        Ok(body) => match into_result(body) {
            Ok(value) if http_ok => Ok(value),
            Ok(_) => Err(ApiError::Http(status)),
            Err(message) => Err(ApiError::Application(message)),
        },
        Err(_) if !http_ok => Err(ApiError::Http(status)),
        Err(e) => Err(ApiError::Decode(e)),
    }
}

/// `GET` an endpoint and decode its JSON body.
pub async fn get_json<T: DeserializeOwned>(config: &AppConfig, path: &str) -> Result<T, ApiError> {
    let response = Request::get(&config.url(path))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }

    let data = response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    log::debug!("GET {} ok", path);
    Ok(data)
}

/// Bodiless `POST` to an endpoint answering with [`ActionResponse`].
pub async fn post_action(config: &AppConfig, path: &str, fallback: &str) -> Result<(), ApiError> {
    let response = Request::post(&config.url(path))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let http_ok = response.ok();
    let status = response.status();
    let decoded = response
        .json::<ActionResponse>()
        .await
        .map_err(|e| e.to_string());

    settle_envelope(http_ok, status, decoded, |body| body.into_result(fallback))
}
