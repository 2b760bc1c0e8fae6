//! Injectable time source.
//! The engine captures exactly one `now` per operation, so tests can drive
//! elapsed-time arithmetic deterministically with a manual clock.

use chrono::{DateTime, Duration, Local};
use std::cell::Cell;

pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Wall-clock implementation used by the CLI.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Manually advanced clock for tests.
pub struct ManualClock {
    current: Cell<DateTime<Local>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Local>) -> Self {
        Self {
            current: Cell::new(start),
        }
    }

    pub fn advance_secs(&self, secs: i64) {
        self.current
            .set(self.current.get() + Duration::seconds(secs));
    }

    /// Moves the clock backwards, used to simulate clock skew.
    pub fn rewind_secs(&self, secs: i64) {
        self.current
            .set(self.current.get() - Duration::seconds(secs));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Local> {
        self.current.get()
    }
}
