use crate::shared::list_window::truncation_note;
use serde::{Deserialize, Serialize};

/// Server-side stock record for one MSKU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub msku: String,
    #[serde(default)]
    pub panel: String,
    #[serde(default)]
    pub current_stock: i64,
    #[serde(default)]
    pub original_stock: i64,
    #[serde(default)]
    pub status: String,
}

/// `GET /inventory`. Possibly truncated, see `total_items`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryResponse {
    #[serde(default)]
    pub total_items: u64,
    #[serde(default)]
    pub inventory: Vec<InventoryItem>,
}

impl InventoryResponse {
    pub fn title(&self) -> String {
        format!("Current Inventory ({} total)", self.total_items)
    }

    pub fn truncation_note(&self) -> Option<String> {
        truncation_note(self.inventory.len(), self.total_items, "items")
    }
}

/// Stock movement of one MSKU since the last reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryChange {
    pub msku: String,
    #[serde(default)]
    pub panel: String,
    #[serde(default)]
    pub original_stock: i64,
    #[serde(default)]
    pub current_stock: i64,
    #[serde(default)]
    pub difference: i64,
    #[serde(default)]
    pub status: String,
}

impl InventoryChange {
    /// Differences are deductions, shown with a leading minus.
    pub fn difference_label(&self) -> String {
        format!("-{}", self.difference)
    }
}

/// `GET /inventory-changes`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryChangesResponse {
    #[serde(default)]
    pub total_changes: u64,
    #[serde(default)]
    pub changes: Vec<InventoryChange>,
}

impl InventoryChangesResponse {
    pub fn is_empty(&self) -> bool {
        self.total_changes == 0
    }

    pub fn title(&self) -> String {
        if self.is_empty() {
            "Inventory Changes".to_string()
        } else {
            format!("Inventory Changes ({} items affected)", self.total_changes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_inventory() {
        let r: InventoryResponse = serde_json::from_value(json!({
            "totalItems": 250,
            "inventory": [
                { "msku": "CSTE_0001", "panel": "P1", "currentStock": 40, "originalStock": 45, "status": "Active" },
                { "msku": "CSTE_0002", "panel": "P2", "currentStock": 0, "originalStock": 3, "status": "Active" }
            ]
        }))
        .unwrap();
        assert_eq!(r.inventory.len(), 2);
        assert_eq!(r.inventory[0].current_stock, 40);
        assert_eq!(r.title(), "Current Inventory (250 total)");
        assert_eq!(
            r.truncation_note().as_deref(),
            Some("Showing first 2 of 250 items")
        );
    }

    #[test]
    fn test_changes_title_and_difference() {
        let r: InventoryChangesResponse = serde_json::from_value(json!({
            "totalChanges": 1,
            "changes": [
                { "msku": "CSTE_0001", "panel": "P1", "originalStock": 45, "currentStock": 40, "difference": 5, "status": "Active" }
            ]
        }))
        .unwrap();
        assert!(!r.is_empty());
        assert_eq!(r.title(), "Inventory Changes (1 items affected)");
        assert_eq!(r.changes[0].difference_label(), "-5");
    }

    #[test]
    fn test_no_changes() {
        let r: InventoryChangesResponse =
            serde_json::from_value(json!({ "totalChanges": 0, "changes": [] })).unwrap();
        assert!(r.is_empty());
        assert_eq!(r.title(), "Inventory Changes");
    }
}
