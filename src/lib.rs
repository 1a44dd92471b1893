//! Cryptographic utilities and primitives for Nebula
//!
//! This crate provides low-level cryptographic building blocks used
//! throughout the Nebula ecosystem.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API. All components
//! are designed to be dependency-free, explicit in their semantics, and
//! suitable for security-critical code.
//!
//! # Module overview
//!
//! - `hash`
//!   Cryptographic hash functions used by the rest of the crate (currently
//!   SHA-256).
//!
//! - `primitives`
//!   Fixed-size, low-level cryptographic primitives such as `U256`. These
//!   types provide explicit, predictable semantics and are used as
//!   fundamental building blocks across the crate.
//!
//! - `signatures`
//!   Digital signature schemes built on top of `hash` and `primitives`.
//!   Currently provides ECDSA over secp256k1.
//!
//! # Design goals
//!
//! - No heap allocations in core primitives
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics
//! - Clear separation between cryptographic code and supporting utilities
//!
//! This crate is not intended to replace full-featured, externally audited
//! cryptographic libraries, but to serve as a small, controlled foundation
//! for Nebula's internal cryptographic needs.

pub mod hash;
pub mod primitives;
pub mod signatures;
