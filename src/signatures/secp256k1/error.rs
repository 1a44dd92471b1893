//! Error type for the secp256k1 signature scheme.

/// Failure modes surfaced by key derivation, signing, and verification.
///
/// Construction-time checks (private keys, nonces, and signature
/// components out of range) are reported here rather than trusted as
/// caller preconditions, since they arrive from untrusted input in most
/// call sites.
#[derive(Debug)]
pub enum Secp256k1Error {
    /// A private key scalar was zero or was not smaller than the curve order.
    InvalidPrivateKey,
    /// A signing nonce `k` was zero or was not smaller than the curve order.
    InvalidNonce,
    /// A signature component was zero or out of its structural range:
    /// `r` (an unreduced field element) must be smaller than the field
    /// prime, `s` (a group-order scalar) must be smaller than the curve
    /// order.
    InvalidSignature,
    /// Signing produced `r == 0` or `s == 0`; the caller should retry with
    /// a different nonce.
    DegenerateSignature,
    /// No modular inverse exists (the value is not coprime with the modulus).
    NotInvertible,
}
