//! Unsigned power-of-two radix formatting
//!
//! Every function here reinterprets a signed fixed-width integer as its
//! unsigned bit pattern (a negative `value` reads as `value + 2^W`) and
//! renders it in base 2, 8 or 16 with no leading zeros. Zero renders as a
//! single `"0"`. No sign is ever emitted.
//!
//! The two widths take different routes to the same result:
//! - 32-bit values are written into a fixed 32-byte buffer from the tail
//!   and the written suffix is kept.
//! - 64-bit values have their exact digit count computed up front from the
//!   leading-zero count, so the buffer needs no trimming.
//!
//! Octal and binary digits never contain letters. Their functions still take
//! a [`Case`] so all six entry points share one shape; the argument is
//! ignored.

mod lzc;
mod u32;
mod u64;

pub use self::lzc::leading_zeros_64;
pub use self::u32::format_unsigned_32;
pub use self::u64::{digit_count_64, format_unsigned_64};

use crate::alphabet::Case;
use crate::radix::Radix;

use self::u32::to_unsigned_string_32;
use self::u64::to_unsigned_string_64;

/// Formats `value` as unsigned hexadecimal.
///
/// ```
/// use integer_formatting::{Case, to_hex_string_32};
///
/// assert_eq!(to_hex_string_32(-1, Case::Lowercase), "ffffffff");
/// assert_eq!(to_hex_string_32(255, Case::Uppercase), "FF");
/// ```
pub fn to_hex_string_32(value: i32, case: Case) -> String {
    to_unsigned_string_32(value, Radix::Hexadecimal, case.table())
}

/// Formats `value` as unsigned octal. `case` is ignored.
pub fn to_octal_string_32(value: i32, _case: Case) -> String {
    to_unsigned_string_32(value, Radix::Octal, Case::Lowercase.table())
}

/// Formats `value` as unsigned binary. `case` is ignored.
pub fn to_binary_string_32(value: i32, _case: Case) -> String {
    to_unsigned_string_32(value, Radix::Binary, Case::Lowercase.table())
}

/// Formats `value` as unsigned hexadecimal.
///
/// ```
/// use integer_formatting::{Case, to_hex_string_64};
///
/// assert_eq!(to_hex_string_64(i64::MIN, Case::Lowercase), "8000000000000000");
/// ```
pub fn to_hex_string_64(value: i64, case: Case) -> String {
    to_unsigned_string_64(value, Radix::Hexadecimal, case.table())
}

/// Formats `value` as unsigned octal. `case` is ignored.
pub fn to_octal_string_64(value: i64, _case: Case) -> String {
    to_unsigned_string_64(value, Radix::Octal, Case::Lowercase.table())
}

/// Formats `value` as unsigned binary. `case` is ignored.
pub fn to_binary_string_64(value: i64, _case: Case) -> String {
    to_unsigned_string_64(value, Radix::Binary, Case::Lowercase.table())
}
