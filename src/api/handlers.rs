//! API Handlers
//!
//! HTTP request handlers for the storefront endpoints. The listing handler is
//! the response cache's only reader; every successful mutation clears it.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderName, HeaderValue, StatusCode},
    Json,
};
use tracing::info;

use crate::cache::{build_key, ResponseCache};
use crate::catalog::ProductCatalog;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{
    CacheStatsResponse, CreateProductRequest, HealthResponse, InvalidateResponse, ListQuery,
    Product, ProductPage, UpdateProductRequest,
};

/// Response header reporting whether a listing came from the cache.
pub const CACHE_STATUS_HEADER: &str = "x-cache";

type CacheStatus = [(HeaderName, HeaderValue); 1];

fn cache_status(hit: bool) -> CacheStatus {
    let value = if hit { "HIT" } else { "MISS" };
    [(
        HeaderName::from_static(CACHE_STATUS_HEADER),
        HeaderValue::from_static(value),
    )]
}

/// Application state shared across all handlers.
///
/// The cache and catalog are constructed once at startup and shared by `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<ResponseCache<ProductPage>>,
    pub catalog: Arc<ProductCatalog>,
    pub default_page_size: u32,
    pub max_page_size: u32,
}

impl AppState {
    /// Creates a new AppState around an existing cache and catalog.
    pub fn new(cache: ResponseCache<ProductPage>, catalog: ProductCatalog) -> Self {
        let defaults = Config::default();
        Self {
            cache: Arc::new(cache),
            catalog: Arc::new(catalog),
            default_page_size: defaults.default_page_size,
            max_page_size: defaults.max_page_size,
        }
    }

    /// Creates a new AppState from configuration, seeding the catalog.
    pub fn from_config(config: &Config) -> Self {
        let catalog = ProductCatalog::new();
        catalog.seed(config.seed_products);

        Self {
            cache: Arc::new(ResponseCache::new(config.cache_ttl())),
            catalog: Arc::new(catalog),
            default_page_size: config.default_page_size,
            max_page_size: config.max_page_size,
        }
    }

    /// Clears the listing cache after a write to the catalog.
    fn invalidate_listings(&self, reason: &str) {
        let dropped = self.cache.invalidate_all();
        info!(reason, dropped, "Listing cache invalidated");
    }
}

/// Handler for GET /products
///
/// Serves the page from the cache when fresh, otherwise reads the catalog and
/// caches the result. The `x-cache` header reports `HIT` or `MISS`.
pub async fn list_products_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<(CacheStatus, Json<ProductPage>)> {
    let (page, limit) = query
        .resolve(state.default_page_size, state.max_page_size)
        .map_err(AppError::InvalidRequest)?;

    let key = build_key(page, limit);
    if let Some(cached) = state.cache.get(&key) {
        return Ok((cache_status(true), Json(cached)));
    }

    let fresh = state.catalog.list(page, limit);
    state.cache.set(key, fresh.clone());

    Ok((cache_status(false), Json(fresh)))
}

/// Handler for GET /products/:id
pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Product>> {
    Ok(Json(state.catalog.get(id)?))
}

/// Handler for POST /products
pub async fn create_product_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>)> {
    if let Some(error_msg) = req.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }

    let product = state.catalog.create(req);
    state.invalidate_listings("product created");

    Ok((StatusCode::CREATED, Json(product)))
}

/// Handler for PUT /products/:id
pub async fn update_product_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<UpdateProductRequest>,
) -> Result<Json<Product>> {
    if let Some(error_msg) = req.validate() {
        return Err(AppError::InvalidRequest(error_msg));
    }

    let product = state.catalog.update(id, req)?;
    state.invalidate_listings("product updated");

    Ok(Json(product))
}

/// Handler for DELETE /products/:id
pub async fn delete_product_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Product>> {
    let product = state.catalog.delete(id)?;
    state.invalidate_listings("product deleted");

    Ok(Json(product))
}

/// Handler for GET /cache/stats
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    let stats = state.cache.stats();
    let ttl_ms = state.cache.ttl().as_millis() as u64;

    Json(CacheStatsResponse::new(&stats, ttl_ms))
}

/// Handler for DELETE /cache
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<InvalidateResponse> {
    let cleared = state.cache.invalidate_all();
    info!(cleared, "Listing cache cleared on request");

    Json(InvalidateResponse::new(cleared))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
