//! Devtesting Random — reproducible random values for tests.
//!
//! [`SeedableGenerator`] is a small xoroshiro128++ generator whose entire
//! output is determined by one `u64` seed. It implements `rand::RngCore`, so
//! every function in [`numeric`] and [`value`] accepts it (or any other
//! `rand` generator). [`RandomValueGenerating`] bundles those functions as
//! methods for fixtures that own a generator, and logs each seed they use so
//! a failing test can be replayed.
//!
//! None of this is suitable for security-sensitive randomness.

pub mod collection;
pub mod generating;
pub mod generator;
pub mod numeric;
pub mod value;

pub use generating::{RandomValueGenerating, RandomValueGenerator, make_random_number_generator};
pub use generator::SeedableGenerator;
pub use numeric::{PrintableFloat, RandomInteger, random_in, random_printable};
pub use value::case::CaseIterable;
pub use value::url::{QueryItem, UrlComponents};
