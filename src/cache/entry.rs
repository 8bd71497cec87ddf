//! Cache Entry Module
//!
//! Defines a single cached payload and the instant it was stored.

use std::time::Duration;

// == Cache Entry ==
/// A cached payload together with its storage timestamp.
///
/// The payload is opaque: the cache never inspects or transforms it.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The cached payload
    pub data: V,
    /// Storage timestamp (Unix milliseconds)
    pub timestamp: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry stamped with `now_ms`.
    pub fn new(data: V, now_ms: u64) -> Self {
        Self {
            data,
            timestamp: now_ms,
        }
    }

    // == Age ==
    /// Milliseconds elapsed since the entry was stored.
    ///
    /// Saturates at zero if the clock moved backwards.
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.timestamp)
    }

    // == Is Expired ==
    /// Checks if the entry has outlived `ttl`.
    ///
    /// Boundary condition: an entry whose age equals the TTL exactly is still
    /// fresh. It only becomes stale once its age is strictly greater.
    pub fn is_expired(&self, now_ms: u64, ttl: Duration) -> bool {
        u128::from(self.age_ms(now_ms)) > ttl.as_millis()
    }
}
