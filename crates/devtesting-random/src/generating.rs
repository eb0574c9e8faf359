//! Generator-holder protocol.
//!
//! Test fixtures that own a [`SeedableGenerator`] implement
//! [`RandomValueGenerating`] by exposing it, and gain every random value
//! helper as a method. Fixtures that would rather not implement the trait
//! can hold a [`RandomValueGenerator`] and delegate to it.
//!
//! Methods that take an optional count or flag draw the missing value first,
//! before generating anything else. Tests replay sequences drawn this way, so
//! the order is part of the contract.

use std::ops::RangeBounds;

use chrono::{DateTime, Utc};
use devtesting_core::clock::{Clock, SystemClock};
use devtesting_core::config::{resolve_default_seed, seed_from_clock, seed_override_from_env};
use devtesting_core::error::ConfigError;
use devtesting_core::logging::log_seed;
use rand::Rng;
use rand::distr::uniform::SampleRange;
use uuid::Uuid;

use crate::generator::SeedableGenerator;
use crate::numeric::{self, PrintableFloat, RandomInteger};
use crate::value;
use crate::value::case::CaseIterable;
use crate::value::date::DateRange;
use crate::value::url::{QueryItem, UrlComponents};

/// Default string length range when no count is given.
const DEFAULT_STRING_LENGTHS: std::ops::RangeInclusive<usize> = 5..=10;

/// Default byte buffer length range when no count is given.
const DEFAULT_BYTE_COUNTS: std::ops::RangeInclusive<usize> = 16..=128;

/// Logs `seed` and returns a generator seeded with it.
#[must_use]
pub fn make_random_number_generator(seed: u64) -> SeedableGenerator {
    log_seed(seed);
    SeedableGenerator::new(seed)
}

/// A type that owns a random number generator and a settable seed.
pub trait RandomValueGenerating {
    /// The generator all random values are drawn from.
    fn random_number_generator(&self) -> &SeedableGenerator;

    /// Mutable access to the generator all random values are drawn from.
    fn random_number_generator_mut(&mut self) -> &mut SeedableGenerator;

    /// The seed the generator was last seeded with.
    fn random_seed(&self) -> u64 {
        self.random_number_generator().seed()
    }

    /// Logs `seed` and reseeds the generator with it.
    fn set_random_seed(&mut self, seed: u64) {
        log_seed(seed);
        self.random_number_generator_mut().set_seed(seed);
    }

    /// Returns a random boolean.
    fn random_bool(&mut self) -> bool {
        value::random_bool(self.random_number_generator_mut())
    }

    /// Returns a random case of `T`, or `None` if `T` has no cases.
    fn random_case<T: CaseIterable>(&mut self) -> Option<T> {
        T::random_case(self.random_number_generator_mut())
    }

    /// Returns a random element of `elements`, or `None` if it is empty.
    fn random_element<I: IntoIterator>(&mut self, elements: I) -> Option<I::Item> {
        value::random_element(elements, self.random_number_generator_mut())
    }

    /// Returns random bytes. Without a `count`, the length is drawn
    /// uniformly from 16 to 128.
    fn random_bytes(&mut self, count: Option<usize>) -> Vec<u8> {
        let rng = self.random_number_generator_mut();
        let count = count.unwrap_or_else(|| rng.random_range(DEFAULT_BYTE_COUNTS));
        value::random_bytes(count, rng)
    }

    /// Returns a uniformly distributed integer in `range`. Use
    /// [`random_printable`](Self::random_printable) for floats.
    ///
    /// # Panics
    ///
    /// Panics if `range` is empty.
    fn random_in<T, R>(&mut self, range: R) -> T
    where
        T: RandomInteger,
        R: SampleRange<T>,
    {
        numeric::random_in(range, self.random_number_generator_mut())
    }

    /// Returns a floating-point value in `range` that usually has a short
    /// decimal form; see [`numeric::random_printable`].
    ///
    /// # Panics
    ///
    /// Panics if `range` is empty.
    fn random_printable<F, R>(&mut self, range: R) -> F
    where
        F: PrintableFloat,
        R: SampleRange<F> + RangeBounds<F> + Clone,
    {
        numeric::random_printable(range, self.random_number_generator_mut())
    }

    /// Returns `Some(make())` half the time; `make` is not called otherwise.
    fn random_optional<T>(&mut self, make: impl FnOnce() -> T) -> Option<T> {
        value::random_optional(make, self.random_number_generator_mut())
    }

    /// Returns a random alphanumeric string. Without a `count`, the length
    /// is drawn uniformly from 5 to 10.
    fn random_alphanumeric_string(&mut self, count: Option<usize>) -> String {
        let rng = self.random_number_generator_mut();
        let count = count.unwrap_or_else(|| rng.random_range(DEFAULT_STRING_LENGTHS));
        value::random_alphanumeric_string(count, rng)
    }

    /// Returns a random printable ASCII string. Without a `count`, the
    /// length is drawn uniformly from 5 to 10.
    fn random_basic_latin_string(&mut self, count: Option<usize>) -> String {
        let rng = self.random_number_generator_mut();
        let count = count.unwrap_or_else(|| rng.random_range(DEFAULT_STRING_LENGTHS));
        value::random_basic_latin_string(count, rng)
    }

    /// Returns a random string of `characters`. Without a `count`, the
    /// length is drawn uniformly from 5 to 10.
    ///
    /// # Panics
    ///
    /// Panics if `characters` is empty and the count is not zero.
    fn random_string(&mut self, characters: &[char], count: Option<usize>) -> String {
        let rng = self.random_number_generator_mut();
        let count = count.unwrap_or_else(|| rng.random_range(DEFAULT_STRING_LENGTHS));
        value::random_string(characters, count, rng)
    }

    /// Returns a random date in `range`.
    ///
    /// # Panics
    ///
    /// Panics if `range` is empty.
    fn random_date<R: DateRange + ?Sized>(&mut self, range: &R) -> DateTime<Utc> {
        value::random_date(range, self.random_number_generator_mut())
    }

    /// Returns a random version 4 UUID.
    fn random_uuid(&mut self) -> Uuid {
        value::random_uuid(self.random_number_generator_mut())
    }

    /// Returns a random URL string; see [`value::random_url_components`].
    fn random_url(
        &mut self,
        include_fragment: Option<bool>,
        include_query_items: Option<bool>,
    ) -> String {
        value::random_url(
            include_fragment,
            include_query_items,
            self.random_number_generator_mut(),
        )
    }

    /// Returns random URL components; see [`value::random_url_components`].
    fn random_url_components(
        &mut self,
        include_fragment: Option<bool>,
        include_query_items: Option<bool>,
    ) -> UrlComponents {
        value::random_url_components(
            include_fragment,
            include_query_items,
            self.random_number_generator_mut(),
        )
    }

    /// Returns a random URL query item.
    fn random_query_item(&mut self) -> QueryItem {
        value::random_query_item(self.random_number_generator_mut())
    }
}

/// A stand-alone holder of one generator.
///
/// ```
/// use devtesting_random::{RandomValueGenerating, RandomValueGenerator};
///
/// let mut generator = RandomValueGenerator::with_seed(1234);
/// let name = generator.random_alphanumeric_string(Some(8));
/// assert_eq!(name.len(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomValueGenerator {
    rng: SeedableGenerator,
}

impl RandomValueGenerator {
    /// Create a generator with the default seed: `DEVTESTING_RANDOM_SEED`
    /// when set, otherwise one derived from the system clock. The seed is
    /// logged.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(resolve_default_seed(&SystemClock))
    }

    /// Create a generator with `seed`. The seed is logged.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: make_random_number_generator(seed),
        }
    }

    /// Create a generator seeded from `clock`, ignoring any environment
    /// override. The seed is logged.
    #[must_use]
    pub fn from_clock(clock: &dyn Clock) -> Self {
        Self::with_seed(seed_from_clock(clock))
    }

    /// Create a generator with the seed in `DEVTESTING_RANDOM_SEED`, falling
    /// back to `clock` when the variable is unset. The seed is logged.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the variable is set but is not a valid seed.
    pub fn try_from_env(clock: &dyn Clock) -> Result<Self, ConfigError> {
        let seed = match seed_override_from_env()? {
            Some(seed) => seed,
            None => seed_from_clock(clock),
        };
        Ok(Self::with_seed(seed))
    }

    /// Consumes the holder and returns its generator.
    #[must_use]
    pub fn into_inner(self) -> SeedableGenerator {
        self.rng
    }
}

impl Default for RandomValueGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomValueGenerating for RandomValueGenerator {
    fn random_number_generator(&self) -> &SeedableGenerator {
        &self.rng
    }

    fn random_number_generator_mut(&mut self) -> &mut SeedableGenerator {
        &mut self.rng
    }
}
