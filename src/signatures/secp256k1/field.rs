//! Modular arithmetic over a 256-bit prime field.
//!
//! All functions here assume their operands are already reduced modulo
//! `m` (i.e. strictly smaller than `m`); callers at the curve and
//! signature layers are responsible for that invariant. `U256`'s own
//! `Add`/`Sub`/`Mul` wrap modulo 2^256, which is not the same as
//! reducing modulo a field prime close to 2^256, so addition and
//! multiplication here are built from scratch rather than delegated to
//! those operators.

use crate::primitives::U256;
use crate::signatures::secp256k1::error::Secp256k1Error;

/// Adds `a` and `b` modulo `m`, assuming `a < m` and `b < m`.
pub(crate) fn mod_add(a: U256, b: U256, m: U256) -> U256 {
    let sum = a + b;
    let overflowed = sum < a;

    if overflowed || sum >= m {
        sum - m
    } else {
        sum
    }
}

/// Subtracts `b` from `a` modulo `m`, assuming `a < m` and `b < m`.
pub(crate) fn mod_sub(a: U256, b: U256, m: U256) -> U256 {
    if a >= b {
        a - b
    } else {
        mod_add(a, m - b, m)
    }
}

/// Multiplies `a` and `b` modulo `m` via double-and-add, assuming
/// `a < m` and `b < m`.
///
/// `U256::Mul` only keeps the low 256 bits of a product, which loses
/// information once the true product exceeds 2^256 — a near certainty
/// when `m` itself is close to 2^256. Accumulating by repeated modular
/// doubling keeps every intermediate value below `m`.
pub(crate) fn mod_mul(a: U256, b: U256, m: U256) -> U256 {
    let mut acc = U256::ZERO;

    for bit in (0..256).rev() {
        acc = mod_add(acc, acc, m);

        let byte_idx = bit / 8;
        let bit_in_byte = 7 - (bit % 8);
        let set = (b.0[byte_idx] >> bit_in_byte) & 1 == 1;

        if set {
            acc = mod_add(acc, a, m);
        }
    }

    acc
}

/// Computes the modular inverse of `a` modulo `m` using the extended
/// Euclidean algorithm, keeping the Bezout coefficient reduced modulo
/// `m` at every step instead of tracking signed magnitudes.
pub(crate) fn mod_inverse(a: U256, m: U256) -> Result<U256, Secp256k1Error> {
    if a == U256::ZERO {
        return Err(Secp256k1Error::NotInvertible);
    }

    let (mut old_r, mut r) = (a, m);
    let (mut old_s, mut s) = (U256::ONE, U256::ZERO);

    while r != U256::ZERO {
        let q = old_r / r;
        let new_r = old_r - q * r;
        old_r = r;
        r = new_r;

        let qs = mod_mul(q, s, m);
        let new_s = mod_sub(old_s, qs, m);
        old_s = s;
        s = new_s;
    }

    if old_r != U256::ONE {
        return Err(Secp256k1Error::NotInvertible);
    }

    Ok(old_s)
}

/// Brute-force modular inverse used only to cross-check [`mod_inverse`]
/// against small moduli in tests.
#[cfg(test)]
pub(crate) fn mod_inverse_bruteforce(a: U256, m: U256) -> Option<U256> {
    let mut candidate = U256::ONE;

    while candidate < m {
        if mod_mul(a, candidate, m) == U256::ONE {
            return Some(candidate);
        }

        candidate = candidate + U256::ONE;
    }

    None
}
