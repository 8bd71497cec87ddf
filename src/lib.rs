//! Storefront Cache - product-listing service for a mattress storefront
//!
//! Serves paginated product listings through a lazily-evicted TTL response
//! cache that is cleared on every catalog write.

pub mod api;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::{build_key, ResponseCache};
pub use config::Config;
