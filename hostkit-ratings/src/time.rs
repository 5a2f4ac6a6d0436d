//! Wall-clock access
//!
//! Timestamps are recorded as epoch milliseconds. The clock is a trait so
//! tests can inject fixed instants and verify last-write-wins behavior.

use chrono::Utc;

/// Source of the current wall-clock time
pub trait Clock: Send + Sync {
    /// Current time as Unix epoch milliseconds
    fn now_millis(&self) -> i64;
}

/// System wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}
