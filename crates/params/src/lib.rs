//! Domain parameters for the pointguard library
//!
//! Curve constants are kept in their own dependency-free crate so that
//! both the validation core and higher-level key wrappers can share one
//! authoritative set of values.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod curve25519;

pub use curve25519::*;
