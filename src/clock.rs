//! Wall-clock abstraction.
//!
//! Study log dates and chat timestamps are taken from an injected [`Clock`]
//! so the session core can be exercised with a fixed time in tests.

use chrono::{Duration, Local, NaiveDateTime};
use parking_lot::Mutex;

/// Source of local wall-clock time.
pub trait Clock: Send + Sync {
    /// Current local date and time (no zone attached).
    fn now(&self) -> NaiveDateTime;
}

/// Reads the host's local time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A settable clock for deterministic tests and replays.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<NaiveDateTime>,
}

impl ManualClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Jump to an absolute time.
    pub fn set(&self, now: NaiveDateTime) {
        *self.now.lock() = now;
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock()
    }
}
