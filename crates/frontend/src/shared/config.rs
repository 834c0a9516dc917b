//! Startup configuration.
//!
//! The server base URL is resolved once when the app mounts and handed to
//! every API call through context. Precedence: `?api=` query parameter, then
//! the current host on port 3000. The override lives only as long as the page
//! load; nothing is persisted.

use leptos::prelude::*;
use serde::Deserialize;
use web_sys::window;

const API_PORT: u16 = 3000;
const FALLBACK_API_BASE: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
}

#[derive(Debug, Default, Deserialize)]
struct QueryParams {
    api: Option<String>,
}

/// Extract the `api` override from a `location.search` string.
pub fn parse_api_override(search: &str) -> Option<String> {
    serde_qs::from_str::<QueryParams>(search.trim_start_matches('?'))
        .ok()
        .and_then(|p| p.api)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Pick the API base from the candidate sources. `location` is `(protocol, hostname)`.
pub fn resolve_api_base(query_override: Option<String>, location: Option<(String, String)>) -> String {
    let base = query_override
        .or_else(|| {
            location
                .filter(|(_, host)| !host.is_empty())
                .map(|(protocol, host)| format!("{}//{}:{}", protocol, host, API_PORT))
        })
        .unwrap_or_else(|| FALLBACK_API_BASE.to_string());
    base.trim().trim_end_matches('/').to_string()
}

impl AppConfig {
    /// Read the browser environment and resolve the configuration.
    pub fn load() -> Self {
        let location = window().map(|w| w.location());
        let query_override = location
            .as_ref()
            .and_then(|l| l.search().ok())
            .and_then(|search| parse_api_override(&search));

        let protocol_host = location.and_then(|l| {
            let protocol = l.protocol().unwrap_or_else(|_| "http:".to_string());
            l.hostname().ok().map(|host| (protocol, host))
        });

        Self {
            api_base: resolve_api_base(query_override, protocol_host),
        }
    }

    /// Absolute URL of an endpoint path such as "/health".
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig not provided in context (provide it in app root)")
}
