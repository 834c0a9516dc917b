pub mod api_utils;
pub mod config;
pub mod dom_utils;
pub mod icons;
pub mod modal_frame;
pub mod request_seq;
pub mod state;
pub mod toast;
