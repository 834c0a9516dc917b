use crate::shared::list_window::truncation_note;
use serde::{Deserialize, Serialize};

/// Marketplace SKU resolved to a master SKU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkuMapping {
    pub sku: String,
    pub msku: String,
}

/// `GET /mappings`. The list may be truncated; `total_mappings` is the real count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingsResponse {
    #[serde(default)]
    pub total_mappings: u64,
    #[serde(default)]
    pub mappings: Vec<SkuMapping>,
}

impl MappingsResponse {
    pub fn title(&self) -> String {
        format!("SKU to MSKU Mappings ({} total)", self.total_mappings)
    }

    pub fn truncation_note(&self) -> Option<String> {
        truncation_note(self.mappings.len(), self.total_mappings, "mappings")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mappings(n: usize) -> Vec<serde_json::Value> {
        (0..n)
            .map(|i| json!({ "sku": format!("AMZ-{i}"), "msku": format!("MSKU-{i}") }))
            .collect()
    }

    #[test]
    fn test_truncated_mappings() {
        let r: MappingsResponse = serde_json::from_value(json!({
            "totalMappings": 500,
            "mappings": mappings(100)
        }))
        .unwrap();
        assert_eq!(r.mappings.len(), 100);
        assert_eq!(r.title(), "SKU to MSKU Mappings (500 total)");
        assert_eq!(
            r.truncation_note().as_deref(),
            Some("Showing first 100 of 500 mappings")
        );
    }

    #[test]
    fn test_full_mappings_have_no_note() {
        let r: MappingsResponse = serde_json::from_value(json!({
            "totalMappings": 2,
            "mappings": mappings(2)
        }))
        .unwrap();
        assert_eq!(r.truncation_note(), None);
        assert_eq!(r.mappings[1].msku, "MSKU-1");
    }
}
