//! Internal utilities for the pointguard library
//!
//! Shared helpers that are not part of the public validation API:
//! constant-time comparisons built on `subtle`, and little-endian
//! load helpers used by the field arithmetic.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod constant_time;
pub mod endian;
