//! Random byte buffers.

use rand::Rng;

/// Returns `count` random bytes.
///
/// Bytes are taken from successive 64-bit draws in little-endian order,
/// eight per draw; the unused bytes of the final draw are discarded. A
/// `count` of zero consumes no draws.
pub fn random_bytes<G: Rng + ?Sized>(count: usize, rng: &mut G) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(count);
    while bytes.len() < count {
        let word = rng.next_u64().to_le_bytes();
        let take = (count - bytes.len()).min(word.len());
        bytes.extend_from_slice(&word[..take]);
    }
    bytes
}
