//! ECDSA over secp256k1.
//!
//! Key derivation, signing, and verification as specified by SEC 1,
//! composed with the crate's own SHA-256 implementation for message
//! hashing. Nonces are supplied by the caller rather than generated
//! internally — this module has no dependency on an RNG.

use crate::primitives::U256;
use crate::signatures::secp256k1::curve::{self, AffinePoint, G, N, P};
use crate::signatures::secp256k1::error::Secp256k1Error;
use crate::signatures::secp256k1::field::{mod_add, mod_inverse, mod_mul};
use crate::signatures::secp256k1::hash::hash_to_scalar;

/// A secp256k1 private key: a scalar in `[1, n-1]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PrivateKey(U256);

/// A secp256k1 public key: a point on the curve other than the identity.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PublicKey(AffinePoint);

/// An ECDSA signature `(r, s)`, each a scalar in `[1, n-1]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    pub r: U256,
    pub s: U256,
}

impl PrivateKey {
    /// Builds a private key from a scalar, checking it is in `[1, n-1]`.
    pub fn new(scalar: U256) -> Result<Self, Secp256k1Error> {
        if scalar == U256::ZERO || scalar >= N {
            return Err(Secp256k1Error::InvalidPrivateKey);
        }

        Ok(PrivateKey(scalar))
    }

    pub fn scalar(&self) -> U256 {
        self.0
    }
}

impl PublicKey {
    pub fn point(&self) -> AffinePoint {
        self.0
    }
}

/// Derives the public key `d * G` for a private key `d`.
pub fn derive_public_key(private_key: &PrivateKey) -> PublicKey {
    PublicKey(curve::scalar_multiply(private_key.0, G))
}

/// Signs `message` under `private_key` using the caller-supplied nonce `k`.
///
/// `k` crosses the boundary as a raw 64-bit integer and is widened to a
/// 256-bit scalar by zero-extension; it must be non-zero and must never
/// be reused across two signatures under the same key, and this function
/// has no way to enforce either property on the caller's behalf. Since
/// `n > 2^64`, a widened nonce can never reach `n`; the range check below
/// stays in place for structural completeness rather than because it can
/// actually trigger.
///
/// `r` is stored as the full `x` coordinate of `k*G`, not reduced modulo
/// the group order `n` (standard ECDSA defines `r = x mod n`). The two
/// agree whenever `x < n`, which is the overwhelming majority of cases;
/// they can diverge for `x` in `[n, p)`. `r` is reduced modulo `n` only
/// where the signing equation itself requires a value below `n` to
/// operate on.
pub fn sign(
    private_key: &PrivateKey,
    message: &[u8],
    nonce: u64,
) -> Result<Signature, Secp256k1Error> {
    if nonce == 0 {
        return Err(Secp256k1Error::InvalidNonce);
    }

    let nonce = U256::from(nonce);

    if nonce >= N {
        return Err(Secp256k1Error::InvalidNonce);
    }

    let r_point = curve::scalar_multiply(nonce, G);
    let r = r_point.x;

    if r == U256::ZERO {
        return Err(Secp256k1Error::DegenerateSignature);
    }

    let z = hash_to_scalar(message) % N;
    let k_inv = mod_inverse(nonce, N)?;

    let rd = mod_mul(r % N, private_key.0, N);
    let z_plus_rd = mod_add(z, rd, N);
    let s = mod_mul(k_inv, z_plus_rd, N);

    if s == U256::ZERO {
        return Err(Secp256k1Error::DegenerateSignature);
    }

    Ok(Signature { r, s })
}

/// Verifies `signature` over `message` under `public_key`.
///
/// The final comparison checks the recovered point's `x` coordinate
/// against `signature.r` directly, without reducing either side modulo
/// `n` — the mirror image of the unreduced `r` produced by [`sign`].
pub fn verify(
    public_key: &PublicKey,
    message: &[u8],
    signature: &Signature,
) -> Result<bool, Secp256k1Error> {
    if signature.r == U256::ZERO || signature.r >= P {
        return Err(Secp256k1Error::InvalidSignature);
    }
    if signature.s == U256::ZERO || signature.s >= N {
        return Err(Secp256k1Error::InvalidSignature);
    }

    let z = hash_to_scalar(message) % N;
    let w = mod_inverse(signature.s, N)?;

    let u1 = mod_mul(z, w, N);
    let u2 = mod_mul(signature.r % N, w, N);

    // Either scalar can vanish mod `n`: `u1` when the message hash
    // reduces to zero mod `n`; `u2` when `r` itself is a nonzero
    // multiple of `n` below `p` — the only such value is `r == n`,
    // since `2n > p`. Whichever one vanishes, its scalar multiplication
    // is undefined here (no identity point to return for `k = 0`), so
    // that term is dropped from the sum instead of being computed. If
    // both vanish there is no point to recover at all, and the
    // signature cannot be valid.
    let point = match (u1 == U256::ZERO, u2 == U256::ZERO) {
        (true, true) => return Ok(false),
        (true, false) => curve::scalar_multiply(u2, public_key.0),
        (false, true) => curve::scalar_multiply(u1, G),
        (false, false) => {
            let u1_g = curve::scalar_multiply(u1, G);
            let u2_q = curve::scalar_multiply(u2, public_key.0);
            curve::add(u1_g, u2_q)
        }
    };

    Ok(point.x == signature.r)
}
