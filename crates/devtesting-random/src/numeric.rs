//! Range-restricted numeric sampling.

use std::ops::{Add, Div, RangeBounds};

use rand::Rng;
use rand::distr::uniform::{SampleRange, SampleUniform};

/// Number of equally spaced fractional offsets a printable float may have.
const SUBDIVISIONS: u16 = 256;

/// Returns a value uniformly distributed over `range`, which may be
/// half-open (`a..b`) or closed (`a..=b`).
///
/// # Panics
///
/// Panics if `range` is empty.
pub fn random_in<T, R, G>(range: R, rng: &mut G) -> T
where
    T: SampleUniform,
    R: SampleRange<T>,
    G: Rng + ?Sized,
{
    assert!(!range.is_empty(), "cannot sample from an empty range");
    rng.random_range(range)
}

mod sealed {
    pub trait Sealed {}
}

/// Integer types that fixtures sample uniformly.
///
/// Floating-point types are not included; fixtures draw floats with
/// [`random_printable`].
///
/// ```compile_fail
/// use devtesting_random::{RandomValueGenerating, RandomValueGenerator};
///
/// let mut generator = RandomValueGenerator::with_seed(1);
/// let value: f64 = generator.random_in(0.0..1.0);
/// ```
pub trait RandomInteger: SampleUniform + sealed::Sealed {}

macro_rules! impl_random_integer {
    ($($ty:ty),*) => {
        $(
            impl sealed::Sealed for $ty {}
            impl RandomInteger for $ty {}
        )*
    };
}

impl_random_integer!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128);

/// Floating-point types that [`random_printable`] can produce.
pub trait PrintableFloat:
    SampleUniform + PartialOrd + Copy + From<u16> + Add<Output = Self> + Div<Output = Self>
{
    /// Rounds toward zero.
    #[must_use]
    fn toward_zero(self) -> Self;
}

impl PrintableFloat for f32 {
    fn toward_zero(self) -> Self {
        self.trunc()
    }
}

impl PrintableFloat for f64 {
    fn toward_zero(self) -> Self {
        self.trunc()
    }
}

/// Returns a value in `range` that is usually "printable": a whole number
/// plus a multiple of 1/256, so its decimal text form is short and parses
/// back to exactly the same value.
///
/// A uniform value is drawn first and its integer part kept; a fractional
/// step is then drawn and added. If that candidate falls outside `range`
/// (narrow ranges, or ranges near a bound) the uniform value is returned
/// as-is, which is always in range but may not be printable.
///
/// # Panics
///
/// Panics if `range` is empty.
pub fn random_printable<F, R, G>(range: R, rng: &mut G) -> F
where
    F: PrintableFloat,
    R: SampleRange<F> + RangeBounds<F> + Clone,
    G: Rng + ?Sized,
{
    let uniform = random_in(range.clone(), rng);
    let step = rng.random_range(0..SUBDIVISIONS);
    let candidate = uniform.toward_zero() + F::from(step) / F::from(SUBDIVISIONS);

    if range.contains(&candidate) {
        candidate
    } else {
        uniform
    }
}
