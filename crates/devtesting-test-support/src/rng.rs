//! Test RNGs — scripted `RngCore` implementations for tests.

use std::collections::VecDeque;

use rand::RngCore;

/// An RNG whose every draw is the same 64-bit word. With `ConstantRng(0)`,
/// uniform range samples land on the range's lower bound.
#[derive(Debug, Clone, Copy)]
pub struct ConstantRng(pub u64);

impl RngCore for ConstantRng {
    fn next_u32(&mut self) -> u32 {
        (self.0 >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_from(dest, || self.0);
    }
}

/// An RNG that returns 64-bit draws from a predetermined sequence. Panics if
/// the sequence is exhausted. Used in tests that need to know exactly which
/// words a generator consumed.
#[derive(Debug, Clone)]
pub struct SequenceRng {
    values: VecDeque<u64>,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given values.
    #[must_use]
    pub fn new(values: impl IntoIterator<Item = u64>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Returns the number of draws not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RngCore for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// # Panics
    ///
    /// Panics if every value in the sequence has been consumed.
    fn next_u64(&mut self) -> u64 {
        self.values
            .pop_front()
            .expect("SequenceRng exhausted; supply more values")
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_from(dest, || self.next_u64());
    }
}

fn fill_from(dest: &mut [u8], mut next: impl FnMut() -> u64) {
    for chunk in dest.chunks_mut(8) {
        let bytes = next().to_le_bytes();
        chunk.copy_from_slice(&bytes[..chunk.len()]);
    }
}
