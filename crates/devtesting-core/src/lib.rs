//! Devtesting Core — ambient support shared by the devtesting crates.
//!
//! This crate defines the clock abstraction used to derive default seeds,
//! the seed configuration read from the environment, the diagnostic seed
//! log, and the error types for those concerns. It contains no random
//! number generation itself.

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;
