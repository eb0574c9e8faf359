//! Random dates.
//!
//! Dates are sampled as printable floating-point seconds since the Unix
//! epoch, so generated timestamps usually have a short decimal form (whole
//! seconds plus a multiple of 1/256 s).

use std::ops::{Range, RangeInclusive};

use chrono::{DateTime, TimeDelta, Utc};
use rand::Rng;

use crate::numeric::random_printable;

/// A range of dates that [`random_date`] can sample from.
pub trait DateRange {
    /// Returns a date in the range.
    ///
    /// # Panics
    ///
    /// Panics if the range is empty.
    fn sample_date<G: Rng + ?Sized>(&self, rng: &mut G) -> DateTime<Utc>;
}

impl DateRange for Range<DateTime<Utc>> {
    fn sample_date<G: Rng + ?Sized>(&self, rng: &mut G) -> DateTime<Utc> {
        assert!(self.start < self.end, "cannot sample from an empty range");

        let lower = to_seconds(self.start);
        let upper = to_seconds(self.end);
        // Endpoints closer than the float resolution collapse to one value.
        if lower >= upper {
            return self.start;
        }

        let date = from_seconds(random_printable(lower..upper, rng)).unwrap_or(self.start);
        if date >= self.end {
            self.end - TimeDelta::nanoseconds(1)
        } else {
            date.max(self.start)
        }
    }
}

impl DateRange for RangeInclusive<DateTime<Utc>> {
    fn sample_date<G: Rng + ?Sized>(&self, rng: &mut G) -> DateTime<Utc> {
        let (start, end) = (*self.start(), *self.end());
        assert!(start <= end, "cannot sample from an empty range");

        let lower = to_seconds(start);
        let upper = to_seconds(end);
        if lower > upper {
            return start;
        }

        let date = from_seconds(random_printable(lower..=upper, rng)).unwrap_or(start);
        date.clamp(start, end)
    }
}

/// Returns a random date in `range`, which may be half-open or closed.
///
/// # Panics
///
/// Panics if `range` is empty.
pub fn random_date<R, G>(range: &R, rng: &mut G) -> DateTime<Utc>
where
    R: DateRange + ?Sized,
    G: Rng + ?Sized,
{
    range.sample_date(rng)
}

#[allow(clippy::cast_precision_loss)]
fn to_seconds(date: DateTime<Utc>) -> f64 {
    date.timestamp() as f64 + f64::from(date.timestamp_subsec_nanos()) / 1e9
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn from_seconds(seconds: f64) -> Option<DateTime<Utc>> {
    let whole = seconds.floor();
    let nanos = ((seconds - whole) * 1e9).floor().clamp(0.0, 999_999_999.0) as u32;
    DateTime::from_timestamp(whole as i64, nanos)
}
