//! Unsigned radix formatting for fixed-width integers
//!
//! This crate turns `i32` and `i64` values into their unsigned textual
//! form in binary, octal and hexadecimal, with a choice of letter case for
//! hexadecimal digits.
//!
//! Negative values are not printed with a sign. Their two's-complement bit
//! pattern is read as an unsigned number, so `-1i32` becomes `ffffffff`.
//! Digits are extracted with masks and logical shifts only; no division and
//! no big-number arithmetic is involved.
//!
//! # Module overview
//!
//! - `alphabet`  
//!   The two static digit tables and the [`Case`] selector that picks one.
//!
//! - `radix`  
//!   The [`Radix`] selector, limited to the power-of-two bases 2, 8 and 16.
//!
//! - `formatting`  
//!   The six formatting entry points plus the buffer-level primitives and
//!   the leading-zero helper they are built on.
//!
//! # Design goals
//!
//! - No dependencies
//! - Total functions: every input of the stated width is valid
//! - No shared mutable state; safe to call from any thread
//!
//! # Features
//!
//! - `speed`: count leading zeros with the hardware bit-scan instead of the
//!   portable branch-based routine.

pub mod alphabet;
pub mod formatting;
pub mod radix;

pub use alphabet::{Case, DigitAlphabet};
pub use formatting::{
    digit_count_64, format_unsigned_32, format_unsigned_64, to_binary_string_32,
    to_binary_string_64, to_hex_string_32, to_hex_string_64, to_octal_string_32,
    to_octal_string_64,
};
pub use radix::Radix;
