//! Clock Module
//!
//! Time sources for entry timestamps. Production code reads the wall clock,
//! tests drive a manual clock to exercise expiry without sleeping.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

// == Clock Trait ==
/// Source of the current instant in Unix milliseconds.
pub trait Clock: Send + Sync + std::fmt::Debug {
    /// Returns the current instant in milliseconds.
    fn now_ms(&self) -> u64;
}

// == System Clock ==
/// Wall-clock time from [`SystemTime`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        current_timestamp_ms()
    }
}

// == Manual Clock ==
/// A clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicU64,
}

impl ManualClock {
    /// Creates a manual clock starting at `start_ms`.
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: AtomicU64::new(start_ms),
        }
    }

    /// Jumps to an absolute instant.
    pub fn set(&self, now_ms: u64) {
        self.now.store(now_ms, Ordering::SeqCst);
    }

    /// Moves the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        let by_ms = u64::try_from(by.as_millis()).unwrap_or(u64::MAX);
        let _ = self
            .now
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |now| {
                Some(now.saturating_add(by_ms))
            });
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
///
/// A system clock set before the epoch reads as zero.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_monotonic_enough() {
        let clock = SystemClock;
        let first = clock.now_ms();
        let second = clock.now_ms();

        assert!(first > 0);
        assert!(second >= first);
    }

    #[test]
    fn test_manual_clock_set_and_advance() {
        let clock = ManualClock::new(0);
        assert_eq!(clock.now_ms(), 0);

        clock.advance(Duration::from_millis(299_000));
        assert_eq!(clock.now_ms(), 299_000);

        clock.set(301_500);
        assert_eq!(clock.now_ms(), 301_500);
    }

    #[test]
    fn test_manual_clock_advance_saturates() {
        let clock = ManualClock::new(u64::MAX - 1);
        clock.advance(Duration::from_secs(10));

        assert_eq!(clock.now_ms(), u64::MAX);
    }
}
