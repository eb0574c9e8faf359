//! Collections built by calling a closure a fixed number of times.
//!
//! These pair naturally with a random value generator:
//!
//! ```
//! use devtesting_random::collection::vec_of;
//! use devtesting_random::{RandomValueGenerating, RandomValueGenerator};
//!
//! let mut generator = RandomValueGenerator::with_seed(1);
//! let ids = vec_of(3, |_| generator.random_uuid());
//! assert_eq!(ids.len(), 3);
//! ```

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Returns `count` elements, the `i`th produced by `make(i)`.
pub fn vec_of<T>(count: usize, make: impl FnMut(usize) -> T) -> Vec<T> {
    (0..count).map(make).collect()
}

/// Like [`vec_of`], stopping at the first error.
///
/// # Errors
///
/// Returns the first error `make` returns.
pub fn try_vec_of<T, E>(count: usize, make: impl FnMut(usize) -> Result<T, E>) -> Result<Vec<T>, E> {
    (0..count).map(make).collect()
}

/// Calls `make` `count` times and collects the entries. Later entries
/// replace earlier ones with the same key, so the map may hold fewer than
/// `count` entries.
pub fn hash_map_of<K, V>(count: usize, mut make: impl FnMut() -> (K, V)) -> HashMap<K, V>
where
    K: Eq + Hash,
{
    (0..count).map(|_| make()).collect()
}

/// Like [`hash_map_of`], stopping at the first error.
///
/// # Errors
///
/// Returns the first error `make` returns.
pub fn try_hash_map_of<K, V, E>(
    count: usize,
    mut make: impl FnMut() -> Result<(K, V), E>,
) -> Result<HashMap<K, V>, E>
where
    K: Eq + Hash,
{
    (0..count).map(|_| make()).collect()
}

/// Calls `make` `count` times and collects the distinct results.
pub fn hash_set_of<T>(count: usize, mut make: impl FnMut() -> T) -> HashSet<T>
where
    T: Eq + Hash,
{
    (0..count).map(|_| make()).collect()
}

/// Like [`hash_set_of`], stopping at the first error.
///
/// # Errors
///
/// Returns the first error `make` returns.
pub fn try_hash_set_of<T, E>(
    count: usize,
    mut make: impl FnMut() -> Result<T, E>,
) -> Result<HashSet<T>, E>
where
    T: Eq + Hash,
{
    (0..count).map(|_| make()).collect()
}
