//! Validation core for the pointguard library
//!
//! This crate holds the constant-time field arithmetic modulo
//! p = 2^255 - 19 and the Curve25519 point-validation routines built on
//! top of it. The public entry points are
//! [`ec::curve25519::is_valid_point`] and
//! [`ec::curve25519::has_small_order`].

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod ec;
