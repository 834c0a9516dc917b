use serde::{Deserialize, Serialize};

/// `GET /combos`. Only the count is shown; combo definitions stay on the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombosResponse {
    #[serde(default)]
    pub total_combos: u64,
}
