//! Random cases of finite enumerations.

use rand::Rng;
use rand::seq::IndexedRandom;

/// A type with a finite, listable set of values.
///
/// ```
/// use devtesting_random::{CaseIterable, SeedableGenerator};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Suit {
///     Clubs,
///     Diamonds,
///     Hearts,
///     Spades,
/// }
///
/// impl CaseIterable for Suit {
///     const ALL_CASES: &'static [Self] = &[Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];
/// }
///
/// let mut rng = SeedableGenerator::new(7);
/// assert!(Suit::random_case(&mut rng).is_some());
/// ```
pub trait CaseIterable: Sized + Clone + 'static {
    /// Every value of the type.
    const ALL_CASES: &'static [Self];

    /// Returns a uniformly chosen case, or `None` if the type has no cases.
    fn random_case<G: Rng + ?Sized>(rng: &mut G) -> Option<Self> {
        Self::ALL_CASES.choose(rng).cloned()
    }
}
