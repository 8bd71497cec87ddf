//! Response DTOs for the storefront API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for the cache stats endpoint (GET /cache/stats)
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub expirations: u64,
    pub invalidations: u64,
    /// Entries physically present, including stale ones not yet evicted
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    pub ttl_ms: u64,
}

impl CacheStatsResponse {
    /// Creates a new CacheStatsResponse from a stats snapshot
    pub fn new(stats: &CacheStats, ttl_ms: u64) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            expirations: stats.expirations,
            invalidations: stats.invalidations,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
            ttl_ms,
        }
    }
}

/// Response body for DELETE /cache
#[derive(Debug, Clone, Serialize)]
pub struct InvalidateResponse {
    pub message: String,
    /// Number of entries dropped
    pub cleared: usize,
}

impl InvalidateResponse {
    pub fn new(cleared: usize) -> Self {
        Self {
            message: format!("Cache cleared ({} entries)", cleared),
            cleared,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
