//! Field arithmetic modulo p = 2^255 - 19
//!
//! Elements are represented as ten limbs alternating between 26 and 25
//! bits, so that products fit comfortably in `i64` accumulators. All
//! arithmetic is fixed-shape: limb counts, carry passes and exponent
//! scans never depend on the values involved.

use pointguard_internal::constant_time::ct_eq_choice;
use pointguard_internal::endian::u32_from_le_bytes;
use subtle::{Choice, ConditionallySelectable};
use zeroize::Zeroize;

/// Field element representing a value modulo p = 2^255 - 19
#[derive(Clone, Copy, Zeroize)]
pub struct FieldElement {
    // Ten limbs, 26 bits for even indices and 25 bits for odd indices
    pub(crate) v: [i32; 10],
}

// Prime p = 2^255 - 19 in limb representation
const PRIME_LIMBS: [i32; 10] = [
    0x3ffffed, 0x1ffffff, 0x3ffffff, 0x1ffffff,
    0x3ffffff, 0x1ffffff, 0x3ffffff, 0x1ffffff,
    0x3ffffff, 0x1ffffff,
];

/// (p-2) = 2^255 - 21 in little-endian form, the inversion exponent
const P_MINUS_2: [u8; 32] = [
    0xeb, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x7f,
];

/// (p-5)/8 = 2^252 - 3 in little-endian form, used by the residue test
const P_MINUS_5_OVER_8: [u8; 32] = [
    0xfd, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x0f,
];

/// Per-thread field-operation counter (test builds only)
///
/// Lets tests assert that validation performs the same number of field
/// operations for every input reaching the arithmetic, which is the
/// property the fixed-shape code is meant to guarantee.
#[cfg(test)]
pub(crate) mod op_count {
    use std::cell::Cell;

    std::thread_local! {
        static FIELD_OPS: Cell<usize> = Cell::new(0);
    }

    pub(crate) fn bump() {
        FIELD_OPS.with(|c| c.set(c.get() + 1));
    }

    /// Return the count accumulated on this thread and reset it
    pub(crate) fn take() -> usize {
        FIELD_OPS.with(|c| c.replace(0))
    }
}

impl FieldElement {
    /// Check limb bounds (debug builds only)
    #[cfg(debug_assertions)]
    fn check_bounds(&self) {
        for (i, &limb) in self.v.iter().enumerate() {
            let max = if i & 1 == 0 { 0x3ffffff } else { 0x1ffffff };
            debug_assert!(
                limb >= 0 && limb <= max,
                "Limb[{}] = {} ({:#x}) out of bounds [0, {} ({:#x})]",
                i, limb, limb, max, max
            );
        }
    }

    /// Reduce to canonical form in [0, p)
    ///
    /// Strong reduction: two carry passes interleaved with two
    /// conditional subtractions of p. The second subtraction is needed
    /// because the 19*c fold in the carry can leave the value in
    /// [p, p + 2^25).
    pub fn reduce(&mut self) {
        carry(&mut self.v);
        sub_p_if_necessary(&mut self.v);
        carry(&mut self.v);
        sub_p_if_necessary(&mut self.v);
    }

    /// Create a field element from 32 little-endian bytes
    ///
    /// Bit 255 is not part of the encoding and is ignored; the result
    /// is reduced to canonical form.
    pub fn from_bytes(bytes: &[u8; 32]) -> Self {
        let v = [
            (u32_from_le_bytes(&bytes[0..]) as i32) & 0x3ffffff,
            (u32_from_le_bytes(&bytes[3..]) as i32 >> 2) & 0x1ffffff,
            (u32_from_le_bytes(&bytes[6..]) as i32 >> 3) & 0x3ffffff,
            (u32_from_le_bytes(&bytes[9..]) as i32 >> 5) & 0x1ffffff,
            (u32_from_le_bytes(&bytes[12..]) as i32 >> 6) & 0x3ffffff,
            (u32_from_le_bytes(&bytes[16..]) as i32) & 0x1ffffff,
            (u32_from_le_bytes(&bytes[19..]) as i32 >> 1) & 0x3ffffff,
            (u32_from_le_bytes(&bytes[22..]) as i32 >> 3) & 0x1ffffff,
            (u32_from_le_bytes(&bytes[25..]) as i32 >> 4) & 0x3ffffff,
            (u32_from_le_bytes(&bytes[28..]) as i32 >> 6) & 0x1ffffff,
        ];

        let mut fe = FieldElement { v };
        fe.reduce();

        #[cfg(debug_assertions)]
        fe.check_bounds();

        fe
    }

    /// Convert to 32 little-endian bytes in canonical form
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut fe = *self;
        fe.reduce();
        let h = fe.v;

        let mut s = [0u8; 32];

        s[0] = (h[0] & 0xff) as u8;
        s[1] = (h[0] >> 8 & 0xff) as u8;
        s[2] = (h[0] >> 16 & 0xff) as u8;
        s[3] = ((h[0] >> 24 | h[1] << 2) & 0xff) as u8;
        s[4] = (h[1] >> 6 & 0xff) as u8;
        s[5] = (h[1] >> 14 & 0xff) as u8;
        s[6] = ((h[1] >> 22 | h[2] << 3) & 0xff) as u8;
        s[7] = (h[2] >> 5 & 0xff) as u8;
        s[8] = (h[2] >> 13 & 0xff) as u8;
        s[9] = ((h[2] >> 21 | h[3] << 5) & 0xff) as u8;
        s[10] = (h[3] >> 3 & 0xff) as u8;
        s[11] = (h[3] >> 11 & 0xff) as u8;
        s[12] = ((h[3] >> 19 | h[4] << 6) & 0xff) as u8;
        s[13] = (h[4] >> 2 & 0xff) as u8;
        s[14] = (h[4] >> 10 & 0xff) as u8;
        s[15] = (h[4] >> 18 & 0xff) as u8;
        s[16] = (h[5] & 0xff) as u8;
        s[17] = (h[5] >> 8 & 0xff) as u8;
        s[18] = (h[5] >> 16 & 0xff) as u8;
        s[19] = ((h[5] >> 24 | h[6] << 1) & 0xff) as u8;
        s[20] = (h[6] >> 7 & 0xff) as u8;
        s[21] = (h[6] >> 15 & 0xff) as u8;
        s[22] = ((h[6] >> 23 | h[7] << 3) & 0xff) as u8;
        s[23] = (h[7] >> 5 & 0xff) as u8;
        s[24] = (h[7] >> 13 & 0xff) as u8;
        s[25] = ((h[7] >> 21 | h[8] << 4) & 0xff) as u8;
        s[26] = (h[8] >> 4 & 0xff) as u8;
        s[27] = (h[8] >> 12 & 0xff) as u8;
        s[28] = ((h[8] >> 20 | h[9] << 6) & 0xff) as u8;
        s[29] = (h[9] >> 2 & 0xff) as u8;
        s[30] = (h[9] >> 10 & 0xff) as u8;
        s[31] = (h[9] >> 18) as u8;

        s
    }

    /// Zero element
    pub fn zero() -> Self {
        FieldElement { v: [0; 10] }
    }

    /// One element
    pub fn one() -> Self {
        FieldElement { v: [1, 0, 0, 0, 0, 0, 0, 0, 0, 0] }
    }

    /// Add two field elements
    pub fn add(&self, other: &FieldElement) -> FieldElement {
        #[cfg(test)]
        op_count::bump();

        let mut v = [0i32; 10];
        for (i, item) in v.iter_mut().enumerate() {
            *item = self.v[i].wrapping_add(other.v[i]);
        }
        carry(&mut v);

        let result = FieldElement { v };
        #[cfg(debug_assertions)]
        result.check_bounds();
        result
    }

    /// Subtract two field elements
    pub fn sub(&self, other: &FieldElement) -> FieldElement {
        #[cfg(test)]
        op_count::bump();

        let mut v = [0i32; 10];
        for (i, item) in v.iter_mut().enumerate() {
            *item = self.v[i] - other.v[i];
        }

        // Negative limbs are absorbed by the carry: the 19*c fold at
        // limb 9 adds the right multiple of p back in.
        let mut fe = FieldElement { v };
        carry(&mut fe.v);

        #[cfg(debug_assertions)]
        fe.check_bounds();

        fe
    }

    /// Multiply two field elements
    pub fn mul(&self, other: &FieldElement) -> FieldElement {
        #[cfg(test)]
        op_count::bump();

        let f = self.v;
        let g = other.v;

        let (f0, f1, f2, f3, f4, f5, f6, f7, f8, f9) = (
            f[0] as i64, f[1] as i64, f[2] as i64, f[3] as i64, f[4] as i64,
            f[5] as i64, f[6] as i64, f[7] as i64, f[8] as i64, f[9] as i64,
        );
        let (g0, g1, g2, g3, g4, g5, g6, g7, g8, g9) = (
            g[0] as i64, g[1] as i64, g[2] as i64, g[3] as i64, g[4] as i64,
            g[5] as i64, g[6] as i64, g[7] as i64, g[8] as i64, g[9] as i64,
        );

        // Pre-scaled constants: 19 folds the 2^255 overflow back into
        // the low limbs, and the odd f limbs pick up a factor of two
        // from the 25-bit positions.
        let (g1_19, g2_19, g3_19, g4_19, g5_19, g6_19, g7_19, g8_19, g9_19) =
            (19 * g1, 19 * g2, 19 * g3, 19 * g4, 19 * g5, 19 * g6, 19 * g7, 19 * g8, 19 * g9);

        let f1_2 = 2 * f1;
        let f3_2 = 2 * f3;
        let f5_2 = 2 * f5;
        let f7_2 = 2 * f7;
        let f9_2 = 2 * f9;

        let mut h = [0i64; 10];

        h[0] = f0 * g0 + f1_2 * g9_19 + f2 * g8_19 + f3_2 * g7_19 + f4 * g6_19
            + f5_2 * g5_19 + f6 * g4_19 + f7_2 * g3_19 + f8 * g2_19 + f9_2 * g1_19;

        h[1] = f0 * g1 + f1 * g0 + f2 * g9_19 + f3 * g8_19 + f4 * g7_19
            + f5 * g6_19 + f6 * g5_19 + f7 * g4_19 + f8 * g3_19 + f9 * g2_19;

        h[2] = f0 * g2 + f1_2 * g1 + f2 * g0 + f3_2 * g9_19 + f4 * g8_19
            + f5_2 * g7_19 + f6 * g6_19 + f7_2 * g5_19 + f8 * g4_19 + f9_2 * g3_19;

        h[3] = f0 * g3 + f1 * g2 + f2 * g1 + f3 * g0 + f4 * g9_19
            + f5 * g8_19 + f6 * g7_19 + f7 * g6_19 + f8 * g5_19 + f9 * g4_19;

        h[4] = f0 * g4 + f1_2 * g3 + f2 * g2 + f3_2 * g1 + f4 * g0
            + f5_2 * g9_19 + f6 * g8_19 + f7_2 * g7_19 + f8 * g6_19 + f9_2 * g5_19;

        h[5] = f0 * g5 + f1 * g4 + f2 * g3 + f3 * g2 + f4 * g1 + f5 * g0
            + f6 * g9_19 + f7 * g8_19 + f8 * g7_19 + f9 * g6_19;

        h[6] = f0 * g6 + f1_2 * g5 + f2 * g4 + f3_2 * g3 + f4 * g2 + f5_2 * g1
            + f6 * g0 + f7_2 * g9_19 + f8 * g8_19 + f9_2 * g7_19;

        h[7] = f0 * g7 + f1 * g6 + f2 * g5 + f3 * g4 + f4 * g3 + f5 * g2
            + f6 * g1 + f7 * g0 + f8 * g9_19 + f9 * g8_19;

        h[8] = f0 * g8 + f1_2 * g7 + f2 * g6 + f3_2 * g5 + f4 * g4 + f5_2 * g3
            + f6 * g2 + f7_2 * g1 + f8 * g0 + f9_2 * g9_19;

        h[9] = f0 * g9 + f1 * g8 + f2 * g7 + f3 * g6 + f4 * g5 + f5 * g4
            + f6 * g3 + f7 * g2 + f8 * g1 + f9 * g0;

        reduce_wide(&mut h)
    }

    /// Square a field element
    pub fn square(&self) -> FieldElement {
        self.mul(self)
    }

    /// Multiply by a small scalar constant
    ///
    /// Used by the Montgomery ladder for the (A + 2) / 4 term. The
    /// scalar must fit in 32 bits so that limb products stay within
    /// the `i64` accumulator range.
    pub fn mul_small(&self, scalar: u32) -> FieldElement {
        #[cfg(test)]
        op_count::bump();

        let s = scalar as i64;
        let mut h = [0i64; 10];
        for (i, item) in h.iter_mut().enumerate() {
            *item = self.v[i] as i64 * s;
        }
        reduce_wide(&mut h)
    }

    /// Multiplicative inverse via Fermat's little theorem: a^(p-2)
    ///
    /// The inverse of zero is zero, which is exactly what the ladder's
    /// final projective-to-affine conversion needs when z = 0.
    pub fn invert(&self) -> FieldElement {
        self.pow(&P_MINUS_2)
    }

    /// Compute a^((p-5)/8) = a^(2^252 - 3)
    ///
    /// Building block for the Legendre symbol: two squarings and two
    /// multiplications by a turn this into a^((p-1)/2).
    pub fn pow_p58(&self) -> FieldElement {
        self.pow(&P_MINUS_5_OVER_8)
    }

    /// Raise to a fixed public exponent, scanning bits MSB to LSB
    ///
    /// The exponent is compile-time constant data, so the bit branch
    /// leaks nothing about the element being raised.
    fn pow(&self, exponent: &[u8; 32]) -> FieldElement {
        let mut result = FieldElement::one();
        let base = *self;

        for bit in (0..256).rev() {
            result = result.square();
            let byte = exponent[bit >> 3];
            if ((byte >> (bit & 7)) & 1) == 1 {
                result = result.mul(&base);
            }
        }
        result
    }

    /// Whether the element is zero, as a `Choice`
    pub fn is_zero(&self) -> Choice {
        ct_eq_choice(self.to_bytes(), [0u8; 32])
    }

    /// Whether the canonical encoding is odd, as a `Choice`
    ///
    /// Matches the sign convention for field elements: the "negative"
    /// representative of {a, p - a} is the one with the low bit set.
    pub fn is_negative(&self) -> Choice {
        Choice::from(self.to_bytes()[0] & 1)
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut v = [0i32; 10];
        for (i, item) in v.iter_mut().enumerate() {
            *item = i32::conditional_select(&a.v[i], &b.v[i], choice);
        }
        FieldElement { v }
    }
}

/// Carry-propagate an `i64` accumulator and reduce to canonical form
fn reduce_wide(h: &mut [i64; 10]) -> FieldElement {
    for _ in 0..5 {
        let mut c: i64;
        c = h[0] >> 26; h[0] &= 0x3ffffff; h[1] += c;
        c = h[1] >> 25; h[1] &= 0x1ffffff; h[2] += c;
        c = h[2] >> 26; h[2] &= 0x3ffffff; h[3] += c;
        c = h[3] >> 25; h[3] &= 0x1ffffff; h[4] += c;
        c = h[4] >> 26; h[4] &= 0x3ffffff; h[5] += c;
        c = h[5] >> 25; h[5] &= 0x1ffffff; h[6] += c;
        c = h[6] >> 26; h[6] &= 0x3ffffff; h[7] += c;
        c = h[7] >> 25; h[7] &= 0x1ffffff; h[8] += c;
        c = h[8] >> 26; h[8] &= 0x3ffffff; h[9] += c;
        c = h[9] >> 25; h[9] &= 0x1ffffff; h[0] += 19 * c;
    }

    let mut out = [0i32; 10];
    for (i, &limb) in h.iter().enumerate() {
        out[i] = limb as i32;
    }

    let mut fe = FieldElement { v: out };
    fe.reduce();
    fe
}

/// Propagate carries so that each limb fits in its designated width
/// (26 bits for even limbs, 25 bits for odd limbs).
///
/// Two passes: the 19*c fold at the top can push limb 0 out of range
/// again after the first pass.
pub(crate) fn carry(h: &mut [i32; 10]) {
    for _ in 0..2 {
        let mut c: i32;
        c = h[0] >> 26; h[0] &= 0x3ffffff; h[1] += c;
        c = h[1] >> 25; h[1] &= 0x1ffffff; h[2] += c;
        c = h[2] >> 26; h[2] &= 0x3ffffff; h[3] += c;
        c = h[3] >> 25; h[3] &= 0x1ffffff; h[4] += c;
        c = h[4] >> 26; h[4] &= 0x3ffffff; h[5] += c;
        c = h[5] >> 25; h[5] &= 0x1ffffff; h[6] += c;
        c = h[6] >> 26; h[6] &= 0x3ffffff; h[7] += c;
        c = h[7] >> 25; h[7] &= 0x1ffffff; h[8] += c;
        c = h[8] >> 26; h[8] &= 0x3ffffff; h[9] += c;
        c = h[9] >> 25; h[9] &= 0x1ffffff; h[0] += 19 * c;
    }
}

/// Subtract p once if the element is >= p, in constant time
fn sub_p_if_necessary(v: &mut [i32; 10]) {
    let mut diff = [0i32; 10];
    let mut borrow = 0i32;

    // Compute v - p limb by limb
    for i in 0..10 {
        let d = (v[i] as i64) - (PRIME_LIMBS[i] as i64) - (borrow as i64);
        let limb_bits = if i & 1 == 0 { 26 } else { 25 };
        let mask = (1i64 << limb_bits) - 1;
        diff[i] = (d & mask) as i32;
        borrow = (d < 0) as i32;
    }

    // borrow == 0 means v >= p: select the difference
    let mask = borrow.wrapping_sub(1);
    for i in 0..10 {
        v[i] = (v[i] & !mask) | (diff[i] & mask);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, RngCore, SeedableRng};

    const P_BYTES: [u8; 32] = [
        0xed, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x7f,
    ];

    fn fe(n: u8) -> FieldElement {
        let mut bytes = [0u8; 32];
        bytes[0] = n;
        FieldElement::from_bytes(&bytes)
    }

    impl FieldElement {
        fn canonical(&self) -> bool {
            for (i, &limb) in self.v.iter().enumerate() {
                let max = if i & 1 == 0 { 0x3ffffff } else { 0x1ffffff };
                if limb < 0 || limb > max {
                    return false;
                }
            }
            true
        }
    }

    #[test]
    fn p_reduces_to_zero() {
        let a = FieldElement::from_bytes(&P_BYTES);
        assert!(bool::from(a.is_zero()));
        assert_eq!(a.to_bytes(), [0u8; 32]);
    }

    #[test]
    fn p_plus_one_reduces_to_one() {
        let mut bytes = P_BYTES;
        bytes[0] = 0xee;
        let a = FieldElement::from_bytes(&bytes);
        assert_eq!(a.to_bytes(), FieldElement::one().to_bytes());
    }

    #[test]
    fn bit_255_is_ignored() {
        let mut bytes = [0u8; 32];
        bytes[0] = 9;
        let without = FieldElement::from_bytes(&bytes);
        bytes[31] |= 0x80;
        let with = FieldElement::from_bytes(&bytes);
        assert_eq!(without.to_bytes(), with.to_bytes());
    }

    #[test]
    fn roundtrip_is_canonical() {
        let bytes: [u8; 32] = [
            171, 6, 18, 1, 21, 5, 37, 61, 10, 52, 68, 80, 26, 31, 72, 42,
            10, 52, 68, 80, 17, 10, 61, 81, 21, 5, 37, 61, 10, 52, 6, 18,
        ];
        let a = FieldElement::from_bytes(&bytes);
        assert!(a.canonical());
        assert_eq!(FieldElement::from_bytes(&a.to_bytes()).to_bytes(), a.to_bytes());
    }

    #[test]
    fn zero_minus_one_is_p_minus_one() {
        let a = FieldElement::zero().sub(&FieldElement::one());
        let mut expected = P_BYTES;
        expected[0] = 0xec;
        assert_eq!(a.to_bytes(), expected);
    }

    #[test]
    fn add_sub_identities() {
        let a = fe(42);
        assert_eq!(a.add(&FieldElement::zero()).to_bytes(), a.to_bytes());
        assert_eq!(a.sub(&a).to_bytes(), [0u8; 32]);
        assert_eq!(a.mul(&FieldElement::one()).to_bytes(), a.to_bytes());
    }

    #[test]
    fn mul_matches_small_products() {
        assert_eq!(fe(7).mul(&fe(6)).to_bytes(), fe(42).to_bytes());
        assert_eq!(fe(9).square().to_bytes(), fe(81).to_bytes());
    }

    #[test]
    fn mul_wraps_around_p() {
        // (p - 1)^2 = 1 mod p
        let minus_one = FieldElement::zero().sub(&FieldElement::one());
        assert_eq!(minus_one.square().to_bytes(), FieldElement::one().to_bytes());
    }

    #[test]
    fn mul_small_matches_mul() {
        let mut bytes = [0u8; 32];
        bytes[0] = 0x42;
        bytes[1] = 0xdb;
        bytes[2] = 0x01;
        let scalar_fe = FieldElement::from_bytes(&bytes);
        let a = fe(123);
        assert_eq!(
            a.mul_small(0x01db42).to_bytes(),
            a.mul(&scalar_fe).to_bytes()
        );

        let b = FieldElement::from_bytes(&P_BYTES).sub(&FieldElement::one());
        assert_eq!(
            b.mul_small(121_666).to_bytes(),
            b.mul(&FieldElement::from_bytes(&{
                let mut s = [0u8; 32];
                s[0] = 0x42;
                s[1] = 0xdb;
                s[2] = 0x01;
                s
            }))
            .to_bytes()
        );
    }

    #[test]
    fn invert_roundtrip() {
        for n in [2u8, 3, 9, 77, 254] {
            let a = fe(n);
            let product = a.mul(&a.invert());
            assert_eq!(product.to_bytes(), FieldElement::one().to_bytes());
        }
    }

    #[test]
    fn invert_zero_is_zero() {
        assert!(bool::from(FieldElement::zero().invert().is_zero()));
    }

    #[test]
    fn sign_convention() {
        assert!(!bool::from(FieldElement::zero().is_negative()));
        assert!(bool::from(FieldElement::one().is_negative()));
        // p - 1 ends in 0xec, even
        let minus_one = FieldElement::zero().sub(&FieldElement::one());
        assert!(!bool::from(minus_one.is_negative()));
    }

    #[test]
    fn conditional_select_and_swap() {
        let a = fe(5);
        let b = fe(11);

        let kept = FieldElement::conditional_select(&a, &b, Choice::from(0));
        let taken = FieldElement::conditional_select(&a, &b, Choice::from(1));
        assert_eq!(kept.to_bytes(), a.to_bytes());
        assert_eq!(taken.to_bytes(), b.to_bytes());

        let mut x = a;
        let mut y = b;
        FieldElement::conditional_swap(&mut x, &mut y, Choice::from(1));
        assert_eq!(x.to_bytes(), b.to_bytes());
        assert_eq!(y.to_bytes(), a.to_bytes());
    }

    #[test]
    fn pow_p58_of_one_is_one() {
        let r = FieldElement::one().pow_p58();
        assert_eq!(r.to_bytes(), FieldElement::one().to_bytes());
    }

    // a^((p-1)/2) built from pow_p58 the way the residue test does
    fn legendre(a: &FieldElement) -> FieldElement {
        let mut t = a.pow_p58();
        t = t.square();
        t = t.square();
        t = t.mul(a);
        t.mul(a)
    }

    #[test]
    fn legendre_symbols_of_known_values() {
        // 4 is a square: chi(4) = 1, whose encoding is odd
        assert!(bool::from(legendre(&fe(4)).is_negative()));
        // 2 is a non-residue mod 2^255 - 19: chi(2) = p - 1, even
        let chi2 = legendre(&fe(2));
        assert!(!bool::from(chi2.is_negative()));
        let minus_one = FieldElement::zero().sub(&FieldElement::one());
        assert_eq!(chi2.to_bytes(), minus_one.to_bytes());
    }

    #[test]
    fn mul_is_associative_over_random_elements() {
        let mut rng = StdRng::seed_from_u64(0x6669656c64);
        for _ in 0..32 {
            let mut bytes = [0u8; 32];
            rng.fill_bytes(&mut bytes);
            let a = FieldElement::from_bytes(&bytes);
            rng.fill_bytes(&mut bytes);
            let b = FieldElement::from_bytes(&bytes);
            rng.fill_bytes(&mut bytes);
            let c = FieldElement::from_bytes(&bytes);

            let left = a.mul(&b).mul(&c);
            let right = a.mul(&b.mul(&c));
            assert_eq!(left.to_bytes(), right.to_bytes());
        }
    }

    #[test]
    fn invert_roundtrip_over_random_elements() {
        let mut rng = StdRng::seed_from_u64(0x696e76657274);
        for _ in 0..16 {
            let mut bytes = [0u8; 32];
            rng.fill_bytes(&mut bytes);
            let a = FieldElement::from_bytes(&bytes);
            if bool::from(a.is_zero()) {
                continue;
            }
            let product = a.mul(&a.invert());
            assert_eq!(product.to_bytes(), FieldElement::one().to_bytes());
        }
    }
}
