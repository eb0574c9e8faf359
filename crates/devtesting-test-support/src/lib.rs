//! Shared test doubles and utilities for the devtesting crates.

mod clock;
mod error;
mod rng;

pub use clock::FixedClock;
pub use error::TestError;
pub use rng::{ConstantRng, SequenceRng};
