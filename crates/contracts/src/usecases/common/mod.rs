//! Common types and traits for all use cases

pub mod action_response;
pub mod usecase_metadata;

pub use action_response::ActionResponse;
pub use usecase_metadata::UseCaseMetadata;
