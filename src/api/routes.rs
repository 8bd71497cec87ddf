//! API Routes
//!
//! Configures the Axum router with all storefront endpoints.

use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cache_stats_handler, clear_cache_handler, create_product_handler, delete_product_handler,
    get_product_handler, health_handler, list_products_handler, update_product_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /products` - Paginated listing, served from the response cache when fresh
/// - `POST /products` - Create a product
/// - `GET|PUT|DELETE /products/:id` - Read, update or delete one product
/// - `GET /cache/stats` - Cache statistics
/// - `DELETE /cache` - Clear the listing cache
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/products",
            get(list_products_handler).post(create_product_handler),
        )
        .route(
            "/products/:id",
            get(get_product_handler)
                .put(update_product_handler)
                .delete(delete_product_handler),
        )
        .route("/cache", delete(clear_cache_handler))
        .route("/cache/stats", get(cache_stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
