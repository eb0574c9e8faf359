//! Seed configuration.
//!
//! A generator built without an explicit seed uses the bit pattern of the
//! current time. Setting `DEVTESTING_RANDOM_SEED` pins that default so a
//! failing run can be replayed with the seed it logged.

use std::ffi::OsStr;

use crate::clock::Clock;
use crate::error::ConfigError;

/// Environment variable that overrides the time-derived default seed.
pub const SEED_ENV_VAR: &str = "DEVTESTING_RANDOM_SEED";

/// Derives a seed from the clock: the IEEE 754 bit pattern of the current
/// time expressed as floating-point seconds since the Unix epoch.
#[must_use]
pub fn seed_from_clock(clock: &dyn Clock) -> u64 {
    clock.epoch_seconds().to_bits()
}

/// Parses a seed written in decimal or as `0x`-prefixed hexadecimal.
/// Surrounding whitespace and `_` digit separators are ignored.
///
/// # Errors
///
/// Returns `ConfigError::InvalidSeed` if the value is not an unsigned 64-bit
/// integer.
pub fn parse_seed(raw: &str) -> Result<u64, ConfigError> {
    let trimmed = raw.trim();
    let digits: String = trimmed.chars().filter(|c| *c != '_').collect();
    let parsed = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => digits.parse::<u64>(),
    };

    parsed.map_err(|source| ConfigError::InvalidSeed {
        value: trimmed.to_owned(),
        source,
    })
}

/// Interprets a raw override value, as read from the environment.
///
/// # Errors
///
/// Returns `ConfigError` if the value is present but not a valid seed.
pub fn seed_override_from(value: Option<&OsStr>) -> Result<Option<u64>, ConfigError> {
    let Some(value) = value else {
        return Ok(None);
    };
    let value = value.to_str().ok_or(ConfigError::NotUnicode {
        variable: SEED_ENV_VAR,
    })?;
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse_seed(value).map(Some)
}

/// Reads the seed override from `DEVTESTING_RANDOM_SEED`.
///
/// # Errors
///
/// Returns `ConfigError` if the variable is set but not a valid seed.
pub fn seed_override_from_env() -> Result<Option<u64>, ConfigError> {
    seed_override_from(std::env::var_os(SEED_ENV_VAR).as_deref())
}

/// Resolves the default seed: the environment override when one is set,
/// otherwise a seed derived from `clock`. A malformed override is logged and
/// ignored.
#[must_use]
pub fn resolve_default_seed(clock: &dyn Clock) -> u64 {
    resolve_seed(seed_override_from_env(), clock)
}

fn resolve_seed(override_seed: Result<Option<u64>, ConfigError>, clock: &dyn Clock) -> u64 {
    match override_seed {
        Ok(Some(seed)) => seed,
        Ok(None) => seed_from_clock(clock),
        Err(error) => {
            tracing::warn!(%error, "ignoring {SEED_ENV_VAR}; falling back to a time-derived seed");
            seed_from_clock(clock)
        }
    }
}
