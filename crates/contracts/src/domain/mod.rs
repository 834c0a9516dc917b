pub mod a001_sku_mapping;
pub mod a002_inventory;
pub mod a003_combo;
