//! Error types for the recoverable parts of the library.
//!
//! Misuse of the random value generators (sampling an empty range, building a
//! non-empty string from no characters) is a programmer error and panics;
//! only configuration read from the outside world is reported as an error.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors raised while reading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A seed override could not be parsed as an unsigned 64-bit integer.
    #[error("invalid random seed {value:?}: {source}")]
    InvalidSeed {
        /// The raw value that failed to parse.
        value: String,
        /// The underlying parse failure.
        #[source]
        source: ParseIntError,
    },

    /// A seed override was present but not valid Unicode.
    #[error("random seed in {variable} is not valid unicode")]
    NotUnicode {
        /// The environment variable that held the value.
        variable: &'static str,
    },
}
