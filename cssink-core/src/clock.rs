//! Injectable time source for the identifier generator.

use std::cell::Cell;
use std::rc::Rc;

use chrono::{Datelike, TimeZone, Utc};

pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_ms(&self) -> i64;
    /// Milliseconds of the start of the current calendar month (UTC).
    /// Anchoring identifiers to this keeps them short while staying monotonic
    /// for the process lifetime.
    fn month_start_ms(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn month_start_ms(&self) -> i64 {
        let now = Utc::now();
        Utc.with_ymd_and_hms(now.year(), now.month(), 1, 0, 0, 0)
            .earliest()
            .map(|start| start.timestamp_millis())
            .unwrap_or(0)
    }
}

/// Manually driven clock for deterministic identifiers in tests.
///
/// Clones share the same instant, so a copy can keep advancing time after the
/// original moved into a registry backend.
#[derive(Debug, Clone, Default)]
pub struct FakeClock {
    now: Rc<Cell<i64>>,
}

impl FakeClock {
    pub fn at(now_ms: i64) -> Self {
        Self {
            now: Rc::new(Cell::new(now_ms)),
        }
    }

    pub fn advance(&self, ms: i64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for FakeClock {
    fn now_ms(&self) -> i64 {
        self.now.get()
    }

    fn month_start_ms(&self) -> i64 {
        0
    }
}
