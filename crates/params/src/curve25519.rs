//! Parameters for Curve25519 in Montgomery form
//!
//! The curve is y^2 = x^3 + A*x^2 + x over GF(2^255 - 19), with
//! A = 486662. The prime-order subgroup has order
//! L = 2^252 + 27742317777372353535851937790883648493 and index 8
//! (the cofactor) in the full group of points.

/// Size of an encoded point (the u-coordinate) in bytes
pub const CURVE25519_POINT_SIZE: usize = 32;

/// The Montgomery curve coefficient A = 486662
pub const MONTGOMERY_A: u32 = 486_662;

/// Little-endian field encoding of the curve coefficient A
pub const MONTGOMERY_A_BYTES: [u8; 32] = {
    let mut bytes = [0u8; 32];
    bytes[0] = MONTGOMERY_A as u8;
    bytes[1] = (MONTGOMERY_A >> 8) as u8;
    bytes[2] = (MONTGOMERY_A >> 16) as u8;
    bytes[3] = (MONTGOMERY_A >> 24) as u8;
    bytes
};

/// The ladder constant (A + 2) / 4 = 121666
pub const APLUS2_OVER_FOUR: u32 = 121_666;

/// Order of the prime-order subgroup, little-endian
///
/// L = 2^252 + 27742317777372353535851937790883648493.
pub const GROUP_ORDER: [u8; 32] = [
    0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde,
    0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x10,
];

/// Bit length of [`GROUP_ORDER`]
pub const GROUP_ORDER_BITS: usize = 253;

/// The standard base point u = 9, little-endian
pub const BASEPOINT_U: [u8; 32] = [
    9, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0,
];

/// Encodings of every point of order 1, 2, 4 or 8, on the curve or its
/// quadratic twist
///
/// The list covers the canonical encoding of each small-order
/// u-coordinate together with its non-canonical aliases below 2^256
/// (u + p and, for u = 0 and u = 1, u + p with bit 255 set appears as
/// the 0x80-suffixed entries). Matching against the full list makes the
/// rejection independent of whether the encoding was canonical.
pub const SMALL_ORDER_POINTS: [[u8; 32]; 12] = [
    // 0 (order 4)
    [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 1 (order 1)
    [
        0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00,
    ],
    // 325606250916557431795983626356110631294008115727848805560023387167927233504 (order 8)
    [
        0xe0, 0xeb, 0x7a, 0x7c, 0x3b, 0x41, 0xb8, 0xae, 0x16, 0x56, 0xe3, 0xfa, 0xf1, 0x9f,
        0xc4, 0x6a, 0xda, 0x09, 0x8d, 0xeb, 0x9c, 0x32, 0xb1, 0xfd, 0x86, 0x62, 0x05, 0x16,
        0x5f, 0x49, 0xb8, 0x00,
    ],
    // 39382357235489614581723060781553021112529911719440698176882885853963445705823 (order 8)
    [
        0x5f, 0x9c, 0x95, 0xbc, 0xa3, 0x50, 0x8c, 0x24, 0xb1, 0xd0, 0xb1, 0x55, 0x9c, 0x83,
        0xef, 0x5b, 0x04, 0x44, 0x5c, 0xc4, 0x58, 0x1c, 0x8e, 0x86, 0xd8, 0x22, 0x4e, 0xdd,
        0xd0, 0x9f, 0x11, 0x57,
    ],
    // p - 1 (order 2)
    [
        0xec, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0x7f,
    ],
    // p (order 4, non-canonical alias of 0)
    [
        0xed, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0x7f,
    ],
    // p + 1 (order 1, non-canonical alias of 1)
    [
        0xee, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0x7f,
    ],
    // Alias of the third entry with bit 255 set
    [
        0xcd, 0xeb, 0x7a, 0x7c, 0x3b, 0x41, 0xb8, 0xae, 0x16, 0x56, 0xe3, 0xfa, 0xf1, 0x9f,
        0xc4, 0x6a, 0xda, 0x09, 0x8d, 0xeb, 0x9c, 0x32, 0xb1, 0xfd, 0x86, 0x62, 0x05, 0x16,
        0x5f, 0x49, 0xb8, 0x80,
    ],
    // Alias of the fourth entry with bit 255 set
    [
        0x4c, 0x9c, 0x95, 0xbc, 0xa3, 0x50, 0x8c, 0x24, 0xb1, 0xd0, 0xb1, 0x55, 0x9c, 0x83,
        0xef, 0x5b, 0x04, 0x44, 0x5c, 0xc4, 0x58, 0x1c, 0x8e, 0x86, 0xd8, 0x22, 0x4e, 0xdd,
        0xd0, 0x9f, 0x11, 0xd7,
    ],
    // 2^255 - 20 (alias of p - 1)
    [
        0xd9, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff,
    ],
    // 2^255 - 19 (alias of 0 with bit 255 set)
    [
        0xda, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff,
    ],
    // 2^255 - 18 (alias of 1 with bit 255 set)
    [
        0xdb, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff, 0xff, 0xff, 0xff,
    ],
];

const _: () = assert!(SMALL_ORDER_POINTS.len() == 12);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_order_entries_are_distinct() {
        for (i, a) in SMALL_ORDER_POINTS.iter().enumerate() {
            for b in SMALL_ORDER_POINTS.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn group_order_has_expected_shape() {
        // 2^252 + ...: top byte is 0x10 and the high half above the
        // 2^128 boundary is otherwise zero
        assert_eq!(GROUP_ORDER[31], 0x10);
        assert!(GROUP_ORDER[16..31].iter().all(|&b| b == 0));
        assert_eq!(GROUP_ORDER_BITS, 253);
    }

    #[test]
    fn montgomery_a_bytes_encode_the_coefficient() {
        // 486662 = 0x076D06
        assert_eq!(&MONTGOMERY_A_BYTES[..4], &[0x06, 0x6d, 0x07, 0x00]);
        assert!(MONTGOMERY_A_BYTES[4..].iter().all(|&b| b == 0));

        let mut value = 0u32;
        for (i, &b) in MONTGOMERY_A_BYTES.iter().enumerate().take(4) {
            value |= (b as u32) << (8 * i);
        }
        assert_eq!(value, MONTGOMERY_A);
    }
}
