//! Seedable xoroshiro128++ generator.
//!
//! The generator's 128 bits of state are expanded from a 64-bit seed with
//! splitmix64. Both algorithms are fixed: the outputs for a recorded seed
//! must never change, or logged seeds stop reproducing failures.

use devtesting_core::clock::SystemClock;
use devtesting_core::config::resolve_default_seed;
use rand::{RngCore, SeedableRng};

/// splitmix64, used only to expand a seed into generator state.
#[derive(Debug, Clone)]
struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    const fn new(state: u64) -> Self {
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);

        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }
}

/// A seedable, non-cryptographic pseudo-random number generator
/// (xoroshiro128++).
///
/// Cloning copies the state; the clone and the original then produce the
/// same sequence independently. The type is intentionally not `Copy`.
///
/// # Example
///
/// ```
/// use devtesting_random::SeedableGenerator;
///
/// let mut a = SeedableGenerator::new(42);
/// let mut b = SeedableGenerator::new(42);
/// assert_eq!(a.next_u64(), b.next_u64());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedableGenerator {
    seed: u64,
    state: [u64; 2],
}

impl SeedableGenerator {
    /// Create a generator whose output is fully determined by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            state: Self::expand(seed),
        }
    }

    /// Returns the seed the generator was last seeded with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Reseeds the generator. The previous state is discarded; afterwards the
    /// generator is indistinguishable from `SeedableGenerator::new(seed)`.
    pub fn set_seed(&mut self, seed: u64) {
        self.seed = seed;
        self.state = Self::expand(seed);
    }

    /// Returns the next 64 pseudo-random bits and advances the state.
    pub fn next_u64(&mut self) -> u64 {
        let [s0, mut s1] = self.state;
        let result = s0.wrapping_add(s1).rotate_left(17).wrapping_add(s0);

        s1 ^= s0;
        self.state = [s0.rotate_left(49) ^ s1 ^ (s1 << 21), s1.rotate_left(28)];

        result
    }

    fn expand(seed: u64) -> [u64; 2] {
        let mut splitmix = SplitMix64::new(seed);
        let s0 = splitmix.next_u64();
        let s1 = splitmix.next_u64();
        [s0, s1]
    }
}

impl Default for SeedableGenerator {
    /// Seeds from `DEVTESTING_RANDOM_SEED` when set, otherwise from the
    /// system clock.
    fn default() -> Self {
        Self::new(resolve_default_seed(&SystemClock))
    }
}

impl RngCore for SeedableGenerator {
    fn next_u32(&mut self) -> u32 {
        (SeedableGenerator::next_u64(self) >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        SeedableGenerator::next_u64(self)
    }

    /// Fills `dest` with the little-endian bytes of successive draws, eight
    /// bytes per draw; a trailing partial chunk discards the unused bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = SeedableGenerator::next_u64(self).to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for SeedableGenerator {
    /// The seed as little-endian bytes.
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::{Rng, RngCore, SeedableRng};

    use super::*;

    fn take(generator: &mut SeedableGenerator, count: usize) -> Vec<u64> {
        (0..count).map(|_| generator.next_u64()).collect()
    }

    #[test]
    fn test_splitmix64_matches_reference_output() {
        let mut splitmix = SplitMix64::new(0);

        assert_eq!(splitmix.next_u64(), 0xe220_a839_7b1d_cdaf);
        assert_eq!(splitmix.next_u64(), 0x6e78_9e6a_a1b9_65f4);
    }

    #[test]
    fn test_new_expands_seed_with_splitmix64() {
        let generator = SeedableGenerator::new(1);

        assert_eq!(generator.state, [0x910a_2dec_8902_5cc1, 0xbeeb_8da1_658e_ec67]);
    }

    #[test]
    fn test_next_u64_matches_reference_sequence_for_seed_zero() {
        let mut generator = SeedableGenerator::new(0);

        assert_eq!(
            take(&mut generator, 5),
            [
                0x6f68_e1e7_e264_6ee1,
                0xbf97_1b7f_4540_94ad,
                0x48f2_de55_6f30_de38,
                0x6ea7_c59f_89bb_fc75,
                0x7654_37c0_8f02_e2f5,
            ]
        );
    }

    #[test]
    fn test_next_u64_matches_reference_sequence_for_large_seed() {
        let mut generator = SeedableGenerator::new(0x0123_4567_89ab_cdef);

        assert_eq!(
            take(&mut generator, 5),
            [
                0x2abf_ea6a_9af1_8078,
                0x2132_616b_3556_5259,
                0x8503_78c3_b2e4_2309,
                0x326d_f705_cc29_056d,
                0x7d55_6729_fdd0_e190,
            ]
        );
    }

    #[test]
    fn test_new_records_seed() {
        let generator = SeedableGenerator::new(0xfeed);

        assert_eq!(generator.seed(), 0xfeed);
    }

    #[test]
    fn test_set_seed_updates_seed_and_state() {
        let mut generator = SeedableGenerator::new(3);
        let first = take(&mut generator, 100);

        generator.set_seed(3);

        assert_eq!(generator.seed(), 3);
        assert_eq!(take(&mut generator, 100), first);
    }

    #[test]
    fn test_clone_evolves_independently() {
        let mut original = SeedableGenerator::new(99);
        original.next_u64();
        let mut copy = original.clone();

        let from_original = take(&mut original, 10);
        let from_copy = take(&mut copy, 10);

        assert_eq!(from_original, from_copy);
        assert_eq!(original, copy);
    }

    #[test]
    fn test_different_seeds_produce_different_sequences() {
        let mut a = SeedableGenerator::new(1);
        let mut b = SeedableGenerator::new(2);

        assert_ne!(take(&mut a, 100), take(&mut b, 100));
    }

    #[test]
    fn test_next_u32_is_high_half_of_draw() {
        let mut a = SeedableGenerator::new(5);
        let mut b = SeedableGenerator::new(5);

        let word = a.next_u64();

        assert_eq!(RngCore::next_u32(&mut b), (word >> 32) as u32);
    }

    #[test]
    fn test_fill_bytes_uses_little_endian_draws() {
        let mut a = SeedableGenerator::new(8);
        let mut b = SeedableGenerator::new(8);
        let mut bytes = [0_u8; 11];

        a.fill_bytes(&mut bytes);
        let first = b.next_u64().to_le_bytes();
        let second = b.next_u64().to_le_bytes();

        assert_eq!(&bytes[..8], &first);
        assert_eq!(&bytes[8..], &second[..3]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_seedable_rng_from_seed_is_little_endian_u64() {
        let generator = SeedableGenerator::from_seed(0x0102_0304_0506_0708_u64.to_le_bytes());

        assert_eq!(generator.seed(), 0x0102_0304_0506_0708);
        assert_eq!(SeedableGenerator::seed_from_u64(77), SeedableGenerator::new(77));
    }

    #[test]
    fn test_works_with_rand_distributions() {
        let mut generator = SeedableGenerator::new(12);

        for _ in 0..1000 {
            let value = generator.random_range(10..20_u8);
            assert!((10..20).contains(&value));
        }
    }

    proptest! {
        #[test]
        fn prop_same_seed_same_sequence(seed in any::<u64>()) {
            let mut a = SeedableGenerator::new(seed);
            let mut b = SeedableGenerator::new(seed);

            for _ in 0..100 {
                prop_assert_eq!(a.next_u64(), b.next_u64());
            }
        }

        #[test]
        fn prop_reseeding_discards_history(seed in any::<u64>(), prior_draws in 0_usize..64) {
            let mut used = SeedableGenerator::new(seed.wrapping_add(1));
            for _ in 0..prior_draws {
                used.next_u64();
            }

            used.set_seed(seed);

            prop_assert_eq!(used, SeedableGenerator::new(seed));
        }
    }
}
