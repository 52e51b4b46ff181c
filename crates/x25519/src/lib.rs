//! Validated X25519 public-key import
//!
//! This crate wraps the raw validation predicate in a typed public key:
//! constructing an [`X25519PublicKey`] through [`X25519PublicKey::from_bytes`]
//! guarantees the contained encoding is canonical, of large order, on the
//! curve, and in the prime-order subgroup. Code that only accepts this
//! type cannot forget to validate a peer's key.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

use pointguard_algorithms::ec::curve25519::{has_small_order, is_valid_point};
use pointguard_api::{validate, Error, KeyResult};
use pointguard_internal::constant_time::ct_eq;
use pointguard_params::CURVE25519_POINT_SIZE;
use zeroize::Zeroize;

/// A Curve25519 public key that has passed full point validation
#[derive(Clone, Zeroize)]
pub struct X25519PublicKey([u8; CURVE25519_POINT_SIZE]);

impl X25519PublicKey {
    /// Import a public key from bytes, validating the encoded point
    ///
    /// Returns `Err` if the slice is not exactly 32 bytes, or if the
    /// encoding fails any of the point-validation filters (non-canonical,
    /// small order, off-curve, or outside the prime-order subgroup).
    pub fn from_bytes(bytes: &[u8]) -> KeyResult<Self> {
        validate::length("X25519PublicKey::from_bytes", bytes.len(), CURVE25519_POINT_SIZE)?;

        let mut encoding = [0u8; CURVE25519_POINT_SIZE];
        encoding.copy_from_slice(bytes);

        // Distinguish the small-order rejection in the error detail; a
        // peer submitting one of these is actively probing
        if has_small_order(&encoding) {
            return Err(Error::InvalidKey {
                context: "X25519PublicKey::from_bytes",
                #[cfg(feature = "std")]
                message: "public key encodes a small-order point".to_string(),
            });
        }

        validate::key(
            is_valid_point(&encoding),
            "X25519PublicKey::from_bytes",
            "public key is not a valid point in the prime-order subgroup",
        )?;

        Ok(Self(encoding))
    }

    /// Re-run point validation on the stored encoding
    ///
    /// Construction already validates, so this only returns `false` if
    /// the key was produced through unsafe means outside this crate.
    pub fn is_valid(&self) -> bool {
        is_valid_point(&self.0)
    }

    /// Borrow the encoded point
    pub fn as_bytes(&self) -> &[u8; CURVE25519_POINT_SIZE] {
        &self.0
    }

    /// Export the encoded point
    pub fn to_bytes(&self) -> [u8; CURVE25519_POINT_SIZE] {
        self.0
    }
}

impl AsRef<[u8]> for X25519PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq for X25519PublicKey {
    fn eq(&self, other: &Self) -> bool {
        // Public data, but uniform comparison costs nothing
        ct_eq(self.0, other.0)
    }
}

impl Eq for X25519PublicKey {}

impl core::fmt::Debug for X25519PublicKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("X25519PublicKey").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pointguard_params::{BASEPOINT_U, SMALL_ORDER_POINTS};

    #[test]
    fn imports_the_basepoint() {
        let key = X25519PublicKey::from_bytes(&BASEPOINT_U).unwrap();
        assert!(key.is_valid());
        assert_eq!(key.as_bytes(), &BASEPOINT_U);
        assert_eq!(key.to_bytes(), BASEPOINT_U);
    }

    #[test]
    fn imports_real_exchange_keys() {
        // RFC 7748 section 6.1 public keys
        let mut alice = [0u8; 32];
        hex::decode_to_slice(
            "8520f0098930a754748b7ddcb43ef75a0dbf3a0d26381af4eba4a98eaa9b4e6a",
            &mut alice,
        )
        .unwrap();
        assert!(X25519PublicKey::from_bytes(&alice).is_ok());
    }

    #[test]
    fn rejects_wrong_length() {
        let err = X25519PublicKey::from_bytes(&[0u8; 31]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidLength {
                context: "X25519PublicKey::from_bytes",
                expected: 32,
                actual: 31,
            }
        );
    }

    #[test]
    fn rejects_small_order_keys() {
        for entry in SMALL_ORDER_POINTS.iter() {
            let err = X25519PublicKey::from_bytes(entry).unwrap_err();
            assert!(matches!(err, Error::InvalidKey { .. }));
        }
    }

    #[test]
    fn rejects_twist_points() {
        let mut twist = [0u8; 32];
        twist[0] = 2;
        let err = X25519PublicKey::from_bytes(&twist).unwrap_err();
        assert!(matches!(err, Error::InvalidKey { .. }));
    }

    #[test]
    fn equality_is_by_encoding() {
        let a = X25519PublicKey::from_bytes(&BASEPOINT_U).unwrap();
        let b = X25519PublicKey::from_bytes(&BASEPOINT_U).unwrap();
        assert_eq!(a, b);
    }
}
