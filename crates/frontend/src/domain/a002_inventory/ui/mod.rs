mod changes;
mod inventory;

pub use changes::{open_changes, ChangesView};
pub use inventory::{open_inventory, InventoryView};
