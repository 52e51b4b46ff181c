//! # pointguard
//!
//! Defensive validation of Curve25519 public keys and Diffie-Hellman
//! coordinates.
//!
//! A 32-byte string received from the network is not necessarily the
//! encoding of a safe point: it may be an overlong (non-canonical)
//! encoding, a point of small order, an x-coordinate on the curve's
//! quadratic twist, or an on-curve point outside the prime-order
//! subgroup. Each of these is a known attack vector against protocols
//! that require contributory behavior. This library answers the single
//! question "is this byte string the canonical encoding of a point in
//! the prime-order subgroup?" in constant time.
//!
//! ```
//! use pointguard::prelude::*;
//!
//! // The standard Curve25519 base point, u = 9.
//! let mut basepoint = [0u8; 32];
//! basepoint[0] = 9;
//! assert!(is_valid_point(&basepoint));
//!
//! // The identity encoding is a small-order point and is rejected.
//! assert!(!is_valid_point(&[0u8; 32]));
//! ```
//!
//! ## Crate structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - `pointguard-api`: error types shared across the workspace
//! - `pointguard-internal`: constant-time and byte-order helpers
//! - `pointguard-params`: curve constants and the small-order table
//! - `pointguard-algorithms`: field arithmetic and the validation core
//! - `pointguard-x25519`: typed, validated public-key import

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use pointguard_algorithms as algorithms;
pub use pointguard_api as api;
pub use pointguard_internal as internal;
pub use pointguard_params as params;

// Feature-gated re-exports
#[cfg(feature = "x25519")]
pub use pointguard_x25519 as x25519;

/// Common imports for pointguard users
pub mod prelude {
    pub use crate::algorithms::ec::curve25519::{has_small_order, is_valid_point};
    pub use crate::api::{Error, Result};

    #[cfg(feature = "x25519")]
    pub use crate::x25519::X25519PublicKey;
}
