//! 32-bit path: fill a full-width buffer from the tail and keep the suffix.

use crate::alphabet::DigitAlphabet;
use crate::radix::Radix;

/// Longest possible output for a 32-bit value (binary).
const MAX_DIGITS_32: usize = 32;

/// Writes the digits of `value` into the tail of `buf`, least significant
/// digit last.
///
/// Returns the index of the most significant digit written. At least one
/// digit is written for any non-empty `buf`, so zero yields a single `'0'`.
/// A buffer shorter than `radix.max_digits(32)` keeps only the low digits.
pub fn format_unsigned_32(
    mut value: u32,
    radix: Radix,
    buf: &mut [u8],
    table: &DigitAlphabet,
) -> usize {
    let shift = radix.shift();
    let mask = radix.mask();
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

/// Formats the unsigned bit pattern of `value` in `radix`.
pub(crate) fn to_unsigned_string_32(value: i32, radix: Radix, table: &DigitAlphabet) -> String {
    let mut buf = [0u8; MAX_DIGITS_32];
    let start = format_unsigned_32(value as u32, radix, &mut buf, table);

    buf[start..].iter().map(|&b| char::from(b)).collect()
}
