//! Client-side row filtering of the result tables.
//!
//! Filters never re-fetch and never change the active tab; they only select
//! which of the already received rows are displayed. Free-text search and the
//! dropdown of the same table combine.

use contracts::usecases::u501_process_orders::{InventoryUpdate, ProcessedOrder};

/// Inventory status dropdown. Matches on the row's status class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    OutOfStock,
    LowStock,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [
        StatusFilter::All,
        StatusFilter::OutOfStock,
        StatusFilter::LowStock,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::OutOfStock => "outofstock",
            StatusFilter::LowStock => "lowstock",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All Items",
            StatusFilter::OutOfStock => "Out of Stock",
            StatusFilter::LowStock => "Low Stock",
        }
    }

    /// Unknown values show everything.
    pub fn from_value(value: &str) -> Self {
        match value {
            "outofstock" => StatusFilter::OutOfStock,
            "lowstock" => StatusFilter::LowStock,
            _ => StatusFilter::All,
        }
    }

    pub fn matches(&self, update: &InventoryUpdate) -> bool {
        match self {
            StatusFilter::All => true,
            _ => update.badge_class().contains(self.value()),
        }
    }
}

/// Orders marketplace dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MarketplaceFilter {
    #[default]
    All,
    Only(String),
}

impl MarketplaceFilter {
    pub const ALL_VALUE: &'static str = "all";

    pub fn from_value(value: &str) -> Self {
        if value == Self::ALL_VALUE || value.is_empty() {
            MarketplaceFilter::All
        } else {
            MarketplaceFilter::Only(value.to_string())
        }
    }

    pub fn value(&self) -> String {
        match self {
            MarketplaceFilter::All => Self::ALL_VALUE.to_string(),
            MarketplaceFilter::Only(m) => m.clone(),
        }
    }

    /// Case-insensitive substring test against the row's first cell.
    pub fn matches_cell(&self, first_cell: &str) -> bool {
        match self {
            MarketplaceFilter::All => true,
            MarketplaceFilter::Only(m) => first_cell.to_lowercase().contains(&m.to_lowercase()),
        }
    }

    pub fn matches(&self, order: &ProcessedOrder) -> bool {
        self.matches_cell(&order.marketplace_label())
    }
}

/// Case-insensitive substring test; `row_text` is already lowercased.
pub fn matches_search(row_text: &str, term: &str) -> bool {
    row_text.contains(&term.to_lowercase())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultFilters {
    pub inventory_search: String,
    pub inventory_status: StatusFilter,
    pub orders_search: String,
    pub marketplace: MarketplaceFilter,
}

impl ResultFilters {
    pub fn visible_inventory<'a>(&self, rows: &'a [InventoryUpdate]) -> Vec<&'a InventoryUpdate> {
        rows.iter()
            .filter(|r| self.inventory_status.matches(r))
            .filter(|r| matches_search(&r.search_text(), &self.inventory_search))
            .collect()
    }

    pub fn visible_orders<'a>(&self, rows: &'a [ProcessedOrder]) -> Vec<&'a ProcessedOrder> {
        rows.iter()
            .filter(|r| self.marketplace.matches(r))
            .filter(|r| matches_search(&r.search_text(), &self.orders_search))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(msku: &str, new_stock: i64, out: bool) -> InventoryUpdate {
        InventoryUpdate {
            msku: msku.to_string(),
            panel: "P1".to_string(),
            original_stock: 50,
            sold_quantity: 50 - new_stock,
            new_stock,
            is_out_of_stock: out,
            not_in_inventory: false,
        }
    }

    fn order(marketplace: &str, sku: &str) -> ProcessedOrder {
        ProcessedOrder {
            marketplace: marketplace.to_string(),
            original_sku: sku.to_string(),
            mapped_msku: "CSTE_0001".to_string(),
            quantity: 1,
            status: "Shipped".to_string(),
            order_date: None,
            customer_location: None,
            product_name: None,
        }
    }

    fn inventory_rows() -> Vec<InventoryUpdate> {
        vec![
            update("CSTE_A", 40, false),
            update("CSTE_B", 3, false),
            update("CSTE_C", 0, true),
        ]
    }

    fn order_rows() -> Vec<ProcessedOrder> {
        vec![
            order("amazon", "AMZ-1"),
            order("flipkart", "FK-1"),
            order("Amazon", "AMZ-2"),
            order("meesho", "MS-1"),
        ]
    }

    fn mskus(rows: Vec<&InventoryUpdate>) -> Vec<&str> {
        rows.into_iter().map(|r| r.msku.as_str()).collect()
    }

    #[test]
    fn test_status_filter() {
        let rows = inventory_rows();
        let mut f = ResultFilters::default();
        assert_eq!(f.visible_inventory(&rows).len(), 3);

        f.inventory_status = StatusFilter::OutOfStock;
        assert_eq!(mskus(f.visible_inventory(&rows)), vec!["CSTE_C"]);

        f.inventory_status = StatusFilter::LowStock;
        assert_eq!(mskus(f.visible_inventory(&rows)), vec!["CSTE_B"]);
    }

    #[test]
    fn test_status_filter_values() {
        for filter in StatusFilter::ALL {
            assert_eq!(StatusFilter::from_value(filter.value()), filter);
        }
        assert_eq!(StatusFilter::from_value("instock"), StatusFilter::All);
    }

    #[test]
    fn test_search_combines_with_status() {
        let rows = inventory_rows();
        let f = ResultFilters {
            inventory_search: "cste_b".to_string(),
            inventory_status: StatusFilter::OutOfStock,
            ..Default::default()
        };
        assert!(f.visible_inventory(&rows).is_empty());
    }

    #[test]
    fn test_inventory_search_case_insensitive() {
        let rows = inventory_rows();
        let f = ResultFilters {
            inventory_search: "Cste_A".to_string(),
            ..Default::default()
        };
        assert_eq!(mskus(f.visible_inventory(&rows)), vec!["CSTE_A"]);
    }

    #[test]
    fn test_marketplace_all_shows_every_row() {
        let rows = order_rows();
        let f = ResultFilters::default();
        assert_eq!(f.visible_orders(&rows).len(), rows.len());
    }

    #[test]
    fn test_marketplace_filter_matches_first_cell() {
        let rows = order_rows();
        let f = ResultFilters {
            marketplace: MarketplaceFilter::from_value("amazon"),
            ..Default::default()
        };
        let visible: Vec<&str> = f
            .visible_orders(&rows)
            .into_iter()
            .map(|o| o.original_sku.as_str())
            .collect();
        let expected: Vec<&str> = rows
            .iter()
            .filter(|o| o.marketplace_label().to_lowercase().contains("amazon"))
            .map(|o| o.original_sku.as_str())
            .collect();
        assert_eq!(visible, expected);
        assert_eq!(visible, vec!["AMZ-1", "AMZ-2"]);
    }

    #[test]
    fn test_orders_search_and_marketplace() {
        let rows = order_rows();
        let f = ResultFilters {
            orders_search: "amz-2".to_string(),
            marketplace: MarketplaceFilter::Only("AMAZON".to_string()),
            ..Default::default()
        };
        assert_eq!(f.visible_orders(&rows).len(), 1);
    }

    #[test]
    fn test_marketplace_values() {
        assert_eq!(MarketplaceFilter::from_value("all"), MarketplaceFilter::All);
        assert_eq!(MarketplaceFilter::from_value(""), MarketplaceFilter::All);
        assert_eq!(MarketplaceFilter::All.value(), "all");
        assert_eq!(MarketplaceFilter::Only("meesho".into()).value(), "meesho");
    }
}
