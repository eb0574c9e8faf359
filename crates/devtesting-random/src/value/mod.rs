//! Composite value generators.
//!
//! Each generator consumes draws from the supplied RNG in a fixed order, so
//! a seeded generator always produces the same values.

pub mod bytes;
pub mod case;
pub mod date;
pub mod string;
pub mod url;
pub mod uuid;

use rand::Rng;
use rand::seq::IteratorRandom;

pub use self::bytes::random_bytes;
pub use self::date::{DateRange, random_date};
pub use self::string::{
    alphanumeric_characters, basic_latin_characters, random_alphanumeric_string,
    random_basic_latin_string, random_string,
};
pub use self::url::{random_query_item, random_url, random_url_components};
pub use self::uuid::random_uuid;

/// Returns `true` or `false` with equal probability.
pub fn random_bool<G: Rng + ?Sized>(rng: &mut G) -> bool {
    rng.random()
}

/// Returns a uniformly chosen element, or `None` if `elements` is empty.
///
/// Exact-size iterators (slices, `Vec`s, sets, maps) cost at most one draw.
pub fn random_element<I, G>(elements: I, rng: &mut G) -> Option<I::Item>
where
    I: IntoIterator,
    G: Rng + ?Sized,
{
    elements.into_iter().choose(rng)
}

/// Returns `Some(value())` or `None` with equal probability. `value` is only
/// called when the result is `Some`.
pub fn random_optional<T, G>(value: impl FnOnce() -> T, rng: &mut G) -> Option<T>
where
    G: Rng + ?Sized,
{
    random_bool(rng).then(value)
}
