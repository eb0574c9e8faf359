//! Clock abstraction for seed derivation.
//!
//! The wall clock is the only non-deterministic input to the library: it
//! supplies the default seed when a caller does not choose one.

use chrono::{DateTime, Utc};

/// Abstraction over system time, so default seeds can be pinned in tests.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current time as floating-point seconds since the Unix
    /// epoch, including the sub-second part.
    #[allow(clippy::cast_precision_loss)]
    fn epoch_seconds(&self) -> f64 {
        let now = self.now();
        now.timestamp() as f64 + f64::from(now.timestamp_subsec_nanos()) / 1e9
    }
}

/// Production clock that delegates to the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
