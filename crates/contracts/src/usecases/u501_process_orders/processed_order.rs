use serde::{Deserialize, Serialize};

const MISSING: &str = "N/A";

/// One order line after SKU mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedOrder {
    #[serde(default)]
    pub marketplace: String,
    #[serde(default)]
    pub original_sku: String,
    #[serde(default)]
    pub mapped_msku: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub order_date: Option<String>,
    #[serde(default)]
    pub customer_location: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
}

fn or_missing(value: &Option<String>) -> String {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => MISSING.to_string(),
    }
}

impl ProcessedOrder {
    pub fn marketplace_label(&self) -> String {
        self.marketplace.to_uppercase()
    }

    /// Case-insensitive match on the order's free-text status.
    pub fn status_class(&self) -> &'static str {
        let status = self.status.to_lowercase();
        if status.contains("delivered") {
            "delivered"
        } else if status.contains("shipped") {
            "shipped"
        } else if status.contains("cancelled") {
            "cancelled"
        } else {
            ""
        }
    }

    pub fn badge_class(&self) -> String {
        let class = self.status_class();
        if class.is_empty() {
            "status".to_string()
        } else {
            format!("status {}", class)
        }
    }

    pub fn order_date_label(&self) -> String {
        or_missing(&self.order_date)
    }

    pub fn customer_location_label(&self) -> String {
        or_missing(&self.customer_location)
    }

    pub fn product_name_label(&self) -> String {
        or_missing(&self.product_name)
    }

    /// Lowercased text of every displayed cell, for the free-text search.
    pub fn search_text(&self) -> String {
        [
            self.marketplace_label(),
            self.original_sku.clone(),
            self.mapped_msku.clone(),
            self.quantity.to_string(),
            self.status.clone(),
            self.order_date_label(),
            self.customer_location_label(),
            self.product_name_label(),
        ]
        .join(" ")
        .to_lowercase()
    }
}
