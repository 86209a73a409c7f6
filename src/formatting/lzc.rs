//! Leading-zero count for 64-bit patterns.

#[cfg(not(feature = "speed"))]
/// Counts the zero bits above the highest set bit of `value`.
///
/// Returns 64 for zero. Branch-based bit halving: narrow the window to the
/// non-zero half at 32, 16, 8, 4 and 2 bits, then correct with the top bit
/// of what is left.
pub fn leading_zeros_64(value: u64) -> u32 {
    if value == 0 {
        return 64;
    }

    let mut n = 1u32;
    let mut x = (value >> 32) as u32;

    if x == 0 {
        n += 32;
        x = value as u32;
    }
    if x >> 16 == 0 {
        n += 16;
        x <<= 16;
    }
    if x >> 24 == 0 {
        n += 8;
        x <<= 8;
    }
    if x >> 28 == 0 {
        n += 4;
        x <<= 4;
    }
    if x >> 30 == 0 {
        n += 2;
        x <<= 2;
    }

    n - (x >> 31)
}

#[cfg(feature = "speed")]
/// Counts the zero bits above the highest set bit of `value` (bit-scan fast path).
///
/// Returns 64 for zero.
#[inline(always)]
pub fn leading_zeros_64(value: u64) -> u32 {
    value.leading_zeros()
}
