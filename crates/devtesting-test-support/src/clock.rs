//! Test clock — pins the time-derived default seed.

use chrono::{DateTime, Utc};
use devtesting_core::clock::Clock;

/// A clock that always returns a fixed point in time, so a generator built
/// from it always gets the same seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// A clock fixed at `seconds` after the Unix epoch.
    ///
    /// # Panics
    ///
    /// Panics if `seconds` is outside the range `chrono` can represent.
    #[must_use]
    pub fn at_epoch_seconds(seconds: i64) -> Self {
        Self(DateTime::from_timestamp(seconds, 0).expect("timestamp out of range"))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
