//! Wall Clock
//! Mission: Injectable time source so expiry checks are deterministic in tests

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// Source of the current wall-clock time.
///
/// The authenticator reads time through this trait exclusively, so token
/// expiry can be exercised against simulated time instead of sleeping.
pub trait Clock: Send + Sync {
    /// Current time as unix seconds (UTC).
    fn now_secs(&self) -> i64;
}

/// The real system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_secs(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// Manually advanced clock.
///
/// Shared behind `Arc`, hence the atomic; `advance_secs` only moves forward.
#[derive(Debug, Default)]
pub struct ManualClock {
    secs: AtomicI64,
}

impl ManualClock {
    pub fn new(start_secs: i64) -> Self {
        Self {
            secs: AtomicI64::new(start_secs),
        }
    }

    pub fn advance_secs(&self, delta: i64) {
        debug_assert!(delta >= 0, "ManualClock: delta must be non-negative");
        self.secs.fetch_add(delta, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_secs(&self) -> i64 {
        self.secs.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advances() {
        let clock = ManualClock::new(1_700_000_000);
        assert_eq!(clock.now_secs(), 1_700_000_000);

        clock.advance_secs(90);
        assert_eq!(clock.now_secs(), 1_700_000_090);

        clock.advance_secs(0);
        assert_eq!(clock.now_secs(), 1_700_000_090);
    }

    #[test]
    fn test_system_clock_is_past_epoch() {
        // 2023-01-01; anything earlier means the host clock is broken.
        assert!(SystemClock.now_secs() > 1_672_531_200);
    }
}
