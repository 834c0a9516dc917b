pub mod inventory_update;
pub mod processed_order;
pub mod response;
pub mod summary;

pub use inventory_update::{InventoryUpdate, StockClass, StockStatus};
pub use processed_order::ProcessedOrder;
pub use response::{ProcessOrdersResponse, ProcessingResult};
pub use summary::{MarketplaceStats, Summary};

use crate::usecases::common::UseCaseMetadata;

pub struct ProcessOrders;

impl UseCaseMetadata for ProcessOrders {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "process_orders"
    }

    fn display_name() -> &'static str {
        "Process Orders"
    }

    fn description() -> &'static str {
        "Upload marketplace order files, map SKUs to MSKUs and deduct inventory"
    }
}

/// Multipart field for the optional master mapping file.
pub const MASTER_FILE_FIELD: &str = "masterFile";

/// Multipart field repeated once per order file.
pub const ORDER_FILES_FIELD: &str = "orderFiles";

pub const SUCCESS_MESSAGE: &str = "Orders processed successfully!";

/// Prefix of every failure toast of this use case.
pub const FAILURE_PREFIX: &str = "Processing failed";
