//! Random version 4 UUIDs.

use rand::Rng;
use uuid::Uuid;

use super::bytes::random_bytes;

/// Returns a random (version 4, variant 2) UUID.
///
/// Sixteen bytes are drawn with [`random_bytes`]; the high nibble of byte 6
/// is set to the version (`0100`) and the top two bits of byte 8 to the
/// variant (`10`), as described in RFC 4122 §4.1.2 and §4.1.3. Every other
/// bit is left as drawn.
pub fn random_uuid<G: Rng + ?Sized>(rng: &mut G) -> Uuid {
    let mut bytes = [0_u8; 16];
    bytes.copy_from_slice(&random_bytes(16, rng));

    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    Uuid::from_bytes(bytes)
}
