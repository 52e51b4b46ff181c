//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise.
/// This function runs in constant time regardless of the input values.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    ct_eq_choice(a, b).into()
}

/// Constant-time equality check that returns a `Choice` (0 or 1)
///
/// Every byte of both inputs is examined regardless of where the first
/// mismatch occurs.
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_slices_compare_equal() {
        assert!(ct_eq([1u8, 2, 3], [1u8, 2, 3]));
        assert!(bool::from(ct_eq_choice([0u8; 32], [0u8; 32])));
    }

    #[test]
    fn differing_slices_compare_unequal() {
        // Mismatch in the first byte and in the last byte alike
        assert!(!ct_eq([0u8, 2, 3], [1u8, 2, 3]));
        assert!(!ct_eq([1u8, 2, 3], [1u8, 2, 4]));
    }

    #[test]
    fn length_mismatch_compares_unequal() {
        assert!(!ct_eq([1u8, 2], [1u8, 2, 3]));
    }
}
