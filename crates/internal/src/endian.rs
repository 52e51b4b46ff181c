//! Byte-order conversion helpers
//!
//! Wire formats in this library are little-endian throughout.

/// Load a `u32` from the first four bytes of a little-endian slice
///
/// # Panics
///
/// Panics if `bytes` is shorter than four bytes. Callers pass fixed-size
/// sub-slices, so the bound is checked at the call site.
pub fn u32_from_le_bytes(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_little_endian_words() {
        assert_eq!(u32_from_le_bytes(&[0x78, 0x56, 0x34, 0x12]), 0x1234_5678);
        assert_eq!(u32_from_le_bytes(&[0xff, 0x00, 0x00, 0x00]), 0xff);
        // Extra trailing bytes are ignored
        assert_eq!(u32_from_le_bytes(&[1, 0, 0, 0, 0xaa]), 1);
    }
}
