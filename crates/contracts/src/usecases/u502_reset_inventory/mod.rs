//! Restore server inventory to the state loaded at startup.
//!
//! `POST /reset-inventory` answers with [`ActionResponse`].

use crate::usecases::common::UseCaseMetadata;

pub struct ResetInventory;

impl UseCaseMetadata for ResetInventory {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "reset_inventory"
    }

    fn display_name() -> &'static str {
        "Reset Inventory"
    }

    fn description() -> &'static str {
        "Undo every deduction made by processed orders"
    }
}

/// Question asked before the reset request is sent.
pub const CONFIRM_MESSAGE: &str = "Are you sure you want to reset inventory to original state?";

/// Used when the server rejects the reset without a message.
pub const FALLBACK_ERROR: &str = "Reset failed";
