//! Cache Store Module
//!
//! Thread-safe TTL cache with lazy eviction. Expired entries are only removed
//! by the `get` that discovers them or by `invalidate_all`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, Clock, SystemClock};

/// Map and counters, guarded together so a lookup and its bookkeeping are atomic.
#[derive(Debug)]
struct Inner<V> {
    entries: HashMap<String, CacheEntry<V>>,
    stats: CacheStats,
}

// == Response Cache ==
/// Memoizes expensive reads for at most `ttl`, keyed by request parameters.
///
/// Every operation takes the internal lock for its whole duration and never
/// awaits, so the cache can be shared across request handlers behind an `Arc`.
#[derive(Debug)]
pub struct ResponseCache<V> {
    inner: Mutex<Inner<V>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl<V: Clone> ResponseCache<V> {
    // == Constructor ==
    /// Creates an empty cache reading the wall clock.
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    /// Creates an empty cache reading time from `clock`.
    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                entries: HashMap::new(),
                stats: CacheStats::new(),
            }),
            ttl,
            clock,
        }
    }

    // == Get ==
    /// Returns the value stored under `key` if it is still fresh.
    ///
    /// A stale entry is removed and reported as absent. A lookup on an unknown
    /// key only bumps the miss counter.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = self.clock.now_ms();
        let mut inner = self.lock();

        let expired = inner
            .entries
            .get(key)
            .map(|entry| entry.is_expired(now, self.ttl));

        match expired {
            Some(false) => {
                inner.stats.record_hit();
                debug!(key = %key, "cache hit");
                inner.entries.get(key).map(|entry| entry.data.clone())
            }
            Some(true) => {
                inner.entries.remove(key);
                inner.stats.record_expiration();
                inner.stats.record_miss();
                debug!(key = %key, "cache entry expired, removed");
                None
            }
            None => {
                inner.stats.record_miss();
                debug!(key = %key, "cache miss");
                None
            }
        }
    }

    // == Set ==
    /// Stores `value` under `key`, replacing any previous entry and its timestamp.
    pub fn set(&self, key: impl Into<String>, value: V) {
        let entry = CacheEntry::new(value, self.clock.now_ms());
        let key = key.into();
        debug!(key = %key, "cache set");
        self.lock().entries.insert(key, entry);
    }

    // == Invalidate All ==
    /// Drops every entry regardless of age.
    ///
    /// Returns the number of entries dropped, stale ones included.
    pub fn invalidate_all(&self) -> usize {
        let mut inner = self.lock();
        let dropped = inner.entries.len();
        inner.entries.clear();
        inner.stats.record_invalidation();
        debug!(dropped, "cache invalidated");
        dropped
    }

    // == Contains Key ==
    /// Reports whether an entry is physically present, fresh or stale.
    ///
    /// Unlike [`get`](Self::get) this never evicts and never touches counters.
    pub fn contains_key(&self, key: &str) -> bool {
        self.lock().entries.contains_key(key)
    }

    // == Stats ==
    /// Returns a snapshot of the counters.
    pub fn stats(&self) -> CacheStats {
        let inner = self.lock();
        let mut stats = inner.stats.clone();
        stats.set_total_entries(inner.entries.len());
        stats
    }

    /// Returns the configured time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Length ==
    /// Number of entries physically present, including stale ones not yet evicted.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    /// Entries hold only reconstructible data, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Inner<V>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
