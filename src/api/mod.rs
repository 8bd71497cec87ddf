//! API Module
//!
//! HTTP handlers and routing for the storefront REST API.
//!
//! # Endpoints
//! - `GET /products` - Paginated product listing (cached)
//! - `POST /products` - Create a product
//! - `GET /products/:id` - Fetch one product
//! - `PUT /products/:id` - Update a product
//! - `DELETE /products/:id` - Delete a product
//! - `GET /cache/stats` - Cache statistics
//! - `DELETE /cache` - Clear the listing cache
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
