//! Message-to-scalar adapter used by signing and verification.

use crate::hash::sha256::core::sha256;
use crate::primitives::U256;

/// Hashes a message with SHA-256 and interprets the digest as a big-endian
/// 256-bit integer.
///
/// The result is not yet reduced modulo the curve order; callers reduce
/// it with the group modulus they are working against.
pub(crate) fn hash_to_scalar(message: &[u8]) -> U256 {
    sha256(message)
}
