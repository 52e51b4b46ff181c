//! Public API types for the pointguard library
//!
//! This crate carries the error type shared by every pointguard crate
//! that can fail, together with validation helpers for the common
//! "check a condition, fail with context" pattern. It is `no_std`
//! compatible; the `std` feature adds detail messages and the
//! `std::error::Error` impl.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;

// Re-export the primary error type and result
pub use error::{validate, Error, Result};

/// Specialized result type for key import and validation operations
pub type KeyResult<T> = Result<T>;
