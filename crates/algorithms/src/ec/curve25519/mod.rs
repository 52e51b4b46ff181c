//! Curve25519 point validation
//!
//! Validation of externally supplied u-coordinates on the Montgomery
//! curve y^2 = x^3 + 486662*x^2 + x over GF(2^255 - 19).
//!
//! A 32-byte string passes [`is_valid_point`] only if all four of the
//! following hold:
//!
//! 1. the encoding is canonical (the value is below p, ignoring bit 255);
//! 2. the u-coordinate is not one of the twelve small-order encodings;
//! 3. u^3 + A*u^2 + u is a square, i.e. the point lies on the curve
//!    rather than on its quadratic twist;
//! 4. multiplying the point by the group order L yields the point at
//!    infinity, i.e. the point lies in the prime-order subgroup.
//!
//! The checks run on fixed-shape arithmetic; only the accept/reject
//! outcome is data-dependent.

mod field;
mod validate;


pub use field::FieldElement;
pub use validate::{has_small_order, is_valid_point};
