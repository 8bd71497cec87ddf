//! Cache Module
//!
//! Provides the in-memory TTL response cache used by the product listing.

mod clock;
mod entry;
mod key;
mod stats;
mod store;


// Re-export public types
pub use clock::{current_timestamp_ms, Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use key::{build_key, KEY_PREFIX};
pub use stats::CacheStats;
pub use store::ResponseCache;

// == Public Constants ==
/// Default time-to-live for cached listing pages (5 minutes)
pub const DEFAULT_TTL_MS: u64 = 300_000;
