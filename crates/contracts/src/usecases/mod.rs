pub mod common;
pub mod u501_process_orders;
pub mod u502_reset_inventory;
