//! Request, response and domain models for the storefront API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod product;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use product::{Product, ProductPage};
pub use requests::{CreateProductRequest, ListQuery, UpdateProductRequest};
pub use responses::{CacheStatsResponse, HealthResponse, InvalidateResponse};
