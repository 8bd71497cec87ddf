//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::DEFAULT_TTL_MS;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Time-to-live of cached listing pages in milliseconds
    pub cache_ttl_ms: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Page size used when a listing request omits `limit`
    pub default_page_size: u32,
    /// Largest accepted `limit`
    pub max_page_size: u32,
    /// Number of demo products created at startup
    pub seed_products: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_MS` - Cache TTL in milliseconds (default: 300000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `DEFAULT_PAGE_SIZE` - Listing page size when omitted (default: 10)
    /// - `MAX_PAGE_SIZE` - Largest accepted page size (default: 100)
    /// - `SEED_PRODUCTS` - Demo products created at startup (default: 25)
    ///
    /// Missing or unparsable values fall back to the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_ttl_ms: env_or("CACHE_TTL_MS", defaults.cache_ttl_ms),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            default_page_size: env_or("DEFAULT_PAGE_SIZE", defaults.default_page_size),
            max_page_size: env_or("MAX_PAGE_SIZE", defaults.max_page_size),
            seed_products: env_or("SEED_PRODUCTS", defaults.seed_products),
        }
    }

    /// Cache TTL as a [`Duration`].
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_millis(self.cache_ttl_ms)
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl_ms: DEFAULT_TTL_MS,
            server_port: 3000,
            default_page_size: 10,
            max_page_size: 100,
            seed_products: 25,
        }
    }
}
