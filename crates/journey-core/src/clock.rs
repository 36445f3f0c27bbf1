//! Clock abstraction for determinism.
//!
//! Combat and quest events carry a timestamp; tests pin it with a fixed
//! clock so event streams compare equal across runs.

use chrono::{DateTime, Utc};

/// Source of wall-clock time for event metadata.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_monotonic_enough_for_event_ordering() {
        let clock = SystemClock;

        let first = clock.now();
        let second = clock.now();

        assert!(second >= first);
    }
}
