//! ECDSA over the secp256k1 curve.
//!
//! This module is organized the way the curve is actually used:
//! - [`field`] — modular arithmetic over the 256-bit prime field
//! - [`curve`] — affine point arithmetic on `y^2 = x^3 + 7`
//! - [`hash`] — message hashing for signing and verification
//! - [`core`] — the public `PrivateKey`/`PublicKey`/`Signature` API
//!
//! Only `core`'s types and functions, and `curve`'s constants, are part
//! of the public surface; the field and curve arithmetic are
//! implementation details.

pub(crate) mod curve;
pub(crate) mod field;
pub(crate) mod hash;

mod core;
mod error;

pub use core::{PrivateKey, PublicKey, Signature, derive_public_key, sign, verify};
pub use curve::{A, AffinePoint, B, G, N, P};
pub use error::Secp256k1Error;
