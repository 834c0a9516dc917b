use serde::{Deserialize, Serialize};

/// Stock at or above this is not flagged as low.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Effect of one processing run on one MSKU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryUpdate {
    pub msku: String,
    #[serde(default)]
    pub panel: String,
    #[serde(default)]
    pub original_stock: i64,
    #[serde(default)]
    pub sold_quantity: i64,
    #[serde(default)]
    pub new_stock: i64,
    #[serde(default)]
    pub is_out_of_stock: bool,
    #[serde(default)]
    pub not_in_inventory: bool,
}

/// Status text of an update row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    NotFound,
    OutOfStock,
    InStock,
}

impl StockStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::NotFound => "Not Found",
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::InStock => "In Stock",
        }
    }
}

/// Visual class of an update row. Also what the status filter matches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockClass {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockClass::OutOfStock => "outofstock",
            StockClass::LowStock => "lowstock",
            StockClass::InStock => "instock",
        }
    }
}

impl InventoryUpdate {
    pub fn stock_status(&self) -> StockStatus {
        if self.not_in_inventory {
            StockStatus::NotFound
        } else if self.is_out_of_stock {
            StockStatus::OutOfStock
        } else {
            StockStatus::InStock
        }
    }

    /// Independent of `not_in_inventory`: a missing MSKU is still colored by its numbers.
    pub fn stock_class(&self) -> StockClass {
        if self.is_out_of_stock {
            StockClass::OutOfStock
        } else if self.new_stock < LOW_STOCK_THRESHOLD {
            StockClass::LowStock
        } else {
            StockClass::InStock
        }
    }

    pub fn badge_class(&self) -> String {
        format!("status {}", self.stock_class().as_str())
    }

    /// Lowercased text of every displayed cell, for the free-text search.
    pub fn search_text(&self) -> String {
        [
            self.msku.clone(),
            self.panel.clone(),
            self.original_stock.to_string(),
            self.sold_quantity.to_string(),
            self.new_stock.to_string(),
            self.stock_status().label().to_string(),
        ]
        .join(" ")
        .to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(new_stock: i64, is_out_of_stock: bool, not_in_inventory: bool) -> InventoryUpdate {
        InventoryUpdate {
            msku: "CSTE_0001".to_string(),
            panel: "P1".to_string(),
            original_stock: 20,
            sold_quantity: 20 - new_stock,
            new_stock,
            is_out_of_stock,
            not_in_inventory,
        }
    }

    #[test]
    fn test_status_is_exclusive_and_exhaustive() {
        for &out in &[false, true] {
            for &missing in &[false, true] {
                let status = update(5, out, missing).stock_status();
                let expected = if missing {
                    StockStatus::NotFound
                } else if out {
                    StockStatus::OutOfStock
                } else {
                    StockStatus::InStock
                };
                assert_eq!(status, expected, "out={out} missing={missing}");
            }
        }
    }

    #[test]
    fn test_in_stock_low_stock_class_iff_below_threshold() {
        for new_stock in [-1, 0, 1, 9, 10, 11, 500] {
            let u = update(new_stock, false, false);
            assert_eq!(u.stock_status(), StockStatus::InStock);
            assert_eq!(
                u.stock_class() == StockClass::LowStock,
                new_stock < LOW_STOCK_THRESHOLD,
                "new_stock={new_stock}"
            );
        }
    }

    #[test]
    fn test_out_of_stock_class_wins() {
        let u = update(0, true, false);
        assert_eq!(u.stock_class(), StockClass::OutOfStock);
        assert_eq!(u.badge_class(), "status outofstock");
        assert_eq!(u.stock_status().label(), "Out of Stock");
    }

    #[test]
    fn test_not_found_label() {
        let u = update(50, false, true);
        assert_eq!(u.stock_status().label(), "Not Found");
        assert_eq!(u.stock_class(), StockClass::InStock);
    }

    #[test]
    fn test_search_text_covers_cells() {
        let text = update(4, false, false).search_text();
        assert!(text.contains("cste_0001"));
        assert!(text.contains("p1"));
        assert!(text.contains("in stock"));
    }
}
