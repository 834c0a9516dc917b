use super::{InventoryUpdate, ProcessedOrder, Summary};
use serde::{Deserialize, Serialize};

/// Outcome of a successful `POST /process-orders`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingResult {
    pub success: bool,
    pub summary: Summary,
    pub inventory_updates: Vec<InventoryUpdate>,
    pub processed_orders: Vec<ProcessedOrder>,
    pub unmapped_skus: Vec<String>,
}

/// Raw `POST /process-orders` payload. On failure only `success` and `error` are set.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessOrdersResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub summary: Option<Summary>,
    #[serde(default)]
    pub inventory_updates: Vec<InventoryUpdate>,
    #[serde(default)]
    pub processed_orders: Vec<ProcessedOrder>,
    #[serde(default)]
    pub unmapped_skus: Vec<String>,
}

impl ProcessOrdersResponse {
    /// Split into the displayable result or the server's failure message.
    pub fn into_result(self) -> Result<ProcessingResult, String> {
        if !self.success {
            return Err(self
                .error
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| super::FAILURE_PREFIX.to_string()));
        }
        Ok(ProcessingResult {
            success: true,
            summary: self.summary.unwrap_or_default(),
            inventory_updates: self.inventory_updates,
            processed_orders: self.processed_orders,
            unmapped_skus: self.unmapped_skus,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_payload() {
        let r: ProcessOrdersResponse = serde_json::from_value(json!({
            "success": true,
            "summary": {
                "totalOrdersProcessed": 1,
                "uniqueMskusAffected": 1,
                "totalQuantitySold": 3,
                "outOfStockItems": 0,
                "unmappedSkusCount": 1,
                "marketplaceSummary": {
                    "meesho": { "ordersProcessed": 1, "uniqueMskus": 1, "totalQuantity": 3, "unmappedSkus": 1 }
                }
            },
            "inventoryUpdates": [
                { "msku": "CSTE_0001", "panel": "P1", "originalStock": 12, "soldQuantity": 3, "newStock": 9, "isOutOfStock": false, "notInInventory": false }
            ],
            "processedOrders": [
                { "marketplace": "meesho", "originalSku": "MS-1", "mappedMsku": "CSTE_0001", "quantity": 3, "status": "Delivered", "orderDate": "2024-05-01" }
            ],
            "unmappedSkus": ["MS-404"]
        }))
        .unwrap();

        let result = r.into_result().unwrap();
        assert!(result.success);
        assert_eq!(result.summary.total_quantity_sold, 3);
        assert_eq!(result.inventory_updates[0].new_stock, 9);
        assert_eq!(result.processed_orders[0].order_date_label(), "2024-05-01");
        assert_eq!(result.unmapped_skus, vec!["MS-404"]);
    }

    #[test]
    fn test_failure_payload_carries_message() {
        let r: ProcessOrdersResponse =
            serde_json::from_value(json!({ "success": false, "error": "bad file" })).unwrap();
        assert_eq!(r.into_result(), Err("bad file".to_string()));
    }

    #[test]
    fn test_failure_without_message() {
        let r: ProcessOrdersResponse =
            serde_json::from_value(json!({ "success": false })).unwrap();
        assert_eq!(r.into_result(), Err("Processing failed".to_string()));
    }

    #[test]
    fn test_empty_error_uses_fallback() {
        let r: ProcessOrdersResponse =
            serde_json::from_value(json!({ "success": false, "error": "" })).unwrap();
        assert_eq!(r.into_result(), Err("Processing failed".to_string()));
    }
}
