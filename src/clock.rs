//! Clock abstraction for timestamping records.
//!
//! Handlers never call `Utc::now()` directly; they go through the clock
//! held in the application state so tests can supply deterministic
//! timestamps.

use chrono::{DateTime, Utc};

/// Source of "now" for every timestamp the service writes.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
