//! Wire types shared by the warehouse client.
//!
//! Everything here is decoded from the order-processing server's JSON and
//! carries the pure display derivations the UI renders. Nothing in this crate
//! touches the browser, so it is tested on the host.

pub mod domain;
pub mod shared;
pub mod system;
pub mod usecases;
