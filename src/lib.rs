pub mod api;
pub mod args;
pub mod cache;
pub mod error;
pub mod model;
pub mod score;
pub mod setup;
pub mod view;

pub use error::CoreError;
