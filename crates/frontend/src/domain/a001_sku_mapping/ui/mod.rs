mod mappings;
mod sku_search;

pub use mappings::{open_mappings, MappingsView};
pub use sku_search::SkuSearchView;
