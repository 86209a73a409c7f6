//! 64-bit path: size the buffer exactly from the leading-zero count.

use super::lzc::leading_zeros_64;
use crate::alphabet::DigitAlphabet;
use crate::radix::Radix;

/// Writes the digits of `value` into `buf`, tail first, until either the
/// value is exhausted or the buffer is full.
///
/// Returns the index of the last position written. When `buf` has exactly
/// the length reported by [`digit_count_64`] this is always `0`.
pub fn format_unsigned_64(
    mut value: u64,
    radix: Radix,
    buf: &mut [u8],
    table: &DigitAlphabet,
) -> usize {
    let shift = radix.shift();
    let mask = radix.mask() as u64;
    let mut pos = buf.len();

    while pos > 0 {
        pos -= 1;
        buf[pos] = table.digit((value & mask) as usize);
        value >>= shift;

        if value == 0 {
            break;
        }
    }

    pos
}

/// Exact number of digits needed for `value` in `radix`, never less than one.
#[inline]
pub fn digit_count_64(value: u64, radix: Radix) -> usize {
    let magnitude = 64 - leading_zeros_64(value);

    radix.max_digits(magnitude).max(1)
}

/// Formats the unsigned bit pattern of `value` in `radix`.
pub(crate) fn to_unsigned_string_64(value: i64, radix: Radix, table: &DigitAlphabet) -> String {
    let value = value as u64;
    let mut buf = vec![0u8; digit_count_64(value, radix)];

    format_unsigned_64(value, radix, &mut buf, table);

    buf.into_iter().map(char::from).collect()
}
