//! Elliptic curve operations
//!
//! Currently limited to Curve25519 in Montgomery form, which is the
//! only curve the validation API covers.

#[cfg(feature = "ec")]
pub mod curve25519;
