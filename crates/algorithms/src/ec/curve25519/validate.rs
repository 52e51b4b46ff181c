//! Point-validation routines for Curve25519
//!
//! Ports the classic defensive checks applied to an incoming
//! u-coordinate before it is allowed anywhere near a scalar
//! multiplication: encoding canonicity, small-order rejection, the
//! on-curve (quadratic residue) test and prime-order-subgroup
//! membership.

use pointguard_params::{
    APLUS2_OVER_FOUR, GROUP_ORDER, GROUP_ORDER_BITS, MONTGOMERY_A_BYTES, SMALL_ORDER_POINTS,
};
use subtle::{Choice, ConditionallySelectable};

use super::field::FieldElement;

/// Whether the 32-byte string is a canonical field-element encoding
///
/// Canonical means the encoded value (with bit 255 cleared) is below
/// p = 2^255 - 19. The comparison is branch-free: the borrow trick
/// `(x - 1) >> 8` turns "x == 0" and "x <= y" predicates into single
/// bits.
pub(crate) fn is_canonical(s: &[u8; 32]) -> Choice {
    // c == 0 iff bytes 1..=31 have the maximal pattern 0xff..0x7f
    let mut c: u8 = s[31] ^ 0x7f;
    for i in (1..31).rev() {
        c |= s[i] ^ 0xff;
    }
    let c = ((c as u32).wrapping_sub(1) >> 8) as u8;
    // d is nonzero iff s[0] >= 0xed, p's low byte
    let d = ((0xed_u32.wrapping_sub(1).wrapping_sub(s[0] as u32)) >> 8) as u8;

    // Non-canonical only when both the upper bytes are maximal and the
    // low byte reaches 0xed
    Choice::from((c & d & 1) ^ 1)
}

/// Whether the encoding matches one of the small-order points
///
/// Compares against every table entry unconditionally and folds the
/// outcome bits together, so the time taken is independent of which
/// entry (if any) matched.
pub(crate) fn small_order_choice(s: &[u8; 32]) -> Choice {
    let mut c = [0u8; 12];

    for (j, &byte) in s.iter().enumerate() {
        for (i, entry) in SMALL_ORDER_POINTS.iter().enumerate() {
            c[i] |= byte ^ entry[j];
        }
    }

    // c[i] == 0 iff entry i matched; underflow puts the answer in bit 8
    let mut k = 0u32;
    for &ci in &c {
        k |= (ci as u32).wrapping_sub(1);
    }

    Choice::from(((k >> 8) & 1) as u8)
}

/// Check whether a 32-byte string encodes a point of order 1, 2, 4 or 8
///
/// These are the points an attacker submits to force a predictable
/// Diffie-Hellman output. The check covers non-canonical aliases of
/// each small-order u-coordinate as well, and runs in constant time.
pub fn has_small_order(s: &[u8; 32]) -> bool {
    small_order_choice(s).into()
}

/// Whether u^3 + A*u^2 + u is a nonzero square, as a `Choice`
///
/// A square right-hand side means a y-coordinate exists, i.e. the
/// u-coordinate lies on the curve rather than on its quadratic twist.
/// Computes the Legendre symbol as y2^((p-1)/2) via a fixed
/// square-and-multiply chain; for a nonzero square the result is 1,
/// whose canonical encoding is odd, so the sign bit doubles as the
/// residue bit.
pub(crate) fn on_curve_choice(x: &FieldElement) -> Choice {
    // y2 = x^3 + A*x^2 + x = x(x^2 + A*x + 1)
    let a = FieldElement::from_bytes(&MONTGOMERY_A_BYTES);
    let x2 = x.square();
    let ax = a.mul(x);
    let mut rhs = x2.add(&ax);
    rhs = rhs.add(&FieldElement::one());
    let y2 = x.mul(&rhs);

    // t = y2^((p-5)/8); squaring twice and multiplying by y2 twice
    // yields y2^((p-1)/2)
    let mut t = y2.pow_p58();
    t = t.square();
    t = t.square();
    t = t.mul(&y2);
    t = t.mul(&y2);

    t.is_negative()
}

/// Whether multiplying the point by the group order L gives infinity
///
/// Runs the standard x-only Montgomery ladder over the 253 bits of L.
/// The point is in the prime-order subgroup exactly when the resulting
/// projective x/z collapses to zero. Swaps are performed with masked
/// selects, and the iteration count is fixed.
pub(crate) fn in_prime_subgroup_choice(x1: &FieldElement) -> Choice {
    let mut x2 = FieldElement::one();
    let mut z2 = FieldElement::zero();
    let mut x3 = *x1;
    let mut z3 = FieldElement::one();

    let mut swap = 0u8;
    for pos in (0..GROUP_ORDER_BITS).rev() {
        let b = (GROUP_ORDER[pos >> 3] >> (pos & 7)) & 1;
        swap ^= b;
        FieldElement::conditional_swap(&mut x2, &mut x3, Choice::from(swap));
        FieldElement::conditional_swap(&mut z2, &mut z3, Choice::from(swap));
        swap = b;

        let tmp0 = x3.sub(&z3);
        let tmp1 = x2.sub(&z2);
        x2 = x2.add(&z2);
        z2 = x3.add(&z3);
        z3 = tmp0.mul(&x2);
        z2 = z2.mul(&tmp1);
        let tmp0 = tmp1.square();
        let tmp1 = x2.square();
        x3 = z3.add(&z2);
        z2 = z3.sub(&z2);
        x2 = tmp1.mul(&tmp0);
        let tmp1 = tmp1.sub(&tmp0);
        z2 = z2.square();
        z3 = tmp1.mul_small(APLUS2_OVER_FOUR);
        x3 = x3.square();
        let tmp0 = tmp0.add(&z3);
        z3 = x1.mul(&z2);
        z2 = tmp1.mul(&tmp0);
    }
    FieldElement::conditional_swap(&mut x2, &mut x3, Choice::from(swap));
    FieldElement::conditional_swap(&mut z2, &mut z3, Choice::from(swap));

    // Affine x of L*P; x/z with z = 0 maps to 0, the encoding of
    // infinity in x-only coordinates
    z2 = z2.invert();
    x2 = x2.mul(&z2);

    x2.is_zero()
}

/// Check that a 32-byte string encodes a valid Curve25519 point
///
/// Returns `true` only if the string is the canonical encoding of a
/// u-coordinate that is on the curve, has large order, and lies in the
/// prime-order subgroup. Suitable as a gate in front of any X25519 or
/// Diffie-Hellman use of an externally supplied public key.
///
/// Bit 255 of the encoding is ignored, matching the X25519 convention.
pub fn is_valid_point(s: &[u8; 32]) -> bool {
    if !bool::from(is_canonical(s)) || bool::from(small_order_choice(s)) {
        return false;
    }

    let x = FieldElement::from_bytes(s);

    // Both field filters run unconditionally once the bytes decode, so
    // every input that reaches this point costs the same fixed number
    // of field operations
    let on_curve = on_curve_choice(&x);
    let in_subgroup = in_prime_subgroup_choice(&x);

    bool::from(on_curve & in_subgroup)
}
