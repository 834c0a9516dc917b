use serde::{Deserialize, Serialize};

/// `GET /health`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub mappings_loaded: u64,
    #[serde(default)]
    pub combos_loaded: u64,
    #[serde(default)]
    pub inventory_items: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_health() {
        let h: HealthResponse = serde_json::from_value(json!({
            "status": "OK",
            "mappingsLoaded": 1200,
            "combosLoaded": 14,
            "inventoryItems": 310
        }))
        .unwrap();
        assert_eq!(h.status, "OK");
        assert_eq!(h.mappings_loaded, 1200);
        assert_eq!(h.combos_loaded, 14);
        assert_eq!(h.inventory_items, 310);
    }

    #[test]
    fn test_missing_counts_default_to_zero() {
        let h: HealthResponse = serde_json::from_value(json!({ "status": "OK" })).unwrap();
        assert_eq!(h.mappings_loaded, 0);
        assert_eq!(h.combos_loaded, 0);
        assert_eq!(h.inventory_items, 0);
    }
}
