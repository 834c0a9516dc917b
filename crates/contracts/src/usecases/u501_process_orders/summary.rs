use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-marketplace totals of one processing run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceStats {
    #[serde(default)]
    pub orders_processed: u64,
    #[serde(default)]
    pub unique_mskus: u64,
    #[serde(default)]
    pub total_quantity: i64,
    #[serde(default)]
    pub unmapped_skus: u64,
}

/// Aggregate counts of one processing run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    #[serde(default)]
    pub total_orders_processed: u64,
    #[serde(default)]
    pub unique_mskus_affected: u64,
    #[serde(default)]
    pub total_quantity_sold: i64,
    #[serde(default)]
    pub out_of_stock_items: u64,
    #[serde(default)]
    pub unmapped_skus_count: u64,
    /// Keyed by marketplace name as the server reports it; ordered by name.
    #[serde(default)]
    pub marketplace_summary: BTreeMap<String, MarketplaceStats>,
}

impl Summary {
    /// Marketplace names in display order, used to fill the orders filter.
    pub fn marketplaces(&self) -> Vec<String> {
        self.marketplace_summary.keys().cloned().collect()
    }

    /// `(label, value)` pairs for the summary cards and the summary tab.
    pub fn totals(&self) -> [(&'static str, String); 5] {
        [
            ("Orders Processed", self.total_orders_processed.to_string()),
            ("Unique MSKUs", self.unique_mskus_affected.to_string()),
            ("Total Quantity Sold", self.total_quantity_sold.to_string()),
            ("Out of Stock Items", self.out_of_stock_items.to_string()),
            ("Unmapped SKUs", self.unmapped_skus_count.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_marketplaces_sorted_by_name() {
        let s: Summary = serde_json::from_value(json!({
            "totalOrdersProcessed": 3,
            "marketplaceSummary": {
                "flipkart": { "ordersProcessed": 1, "uniqueMskus": 1, "totalQuantity": 2, "unmappedSkus": 0 },
                "amazon": { "ordersProcessed": 2, "uniqueMskus": 2, "totalQuantity": 5, "unmappedSkus": 1 }
            }
        }))
        .unwrap();
        assert_eq!(s.marketplaces(), vec!["amazon", "flipkart"]);
        assert_eq!(s.marketplace_summary["amazon"].total_quantity, 5);
    }

    #[test]
    fn test_totals_labels() {
        let s = Summary {
            total_orders_processed: 12,
            unique_mskus_affected: 4,
            total_quantity_sold: 30,
            out_of_stock_items: 1,
            unmapped_skus_count: 2,
            ..Default::default()
        };
        let totals = s.totals();
        assert_eq!(totals[0], ("Orders Processed", "12".to_string()));
        assert_eq!(totals[4], ("Unmapped SKUs", "2".to_string()));
        assert!(s.marketplaces().is_empty());
    }
}
