pub mod api;
pub mod model;
pub mod results;
pub mod view;
