//! Digit alphabets
//!
//! A digit alphabet maps a digit value to the ASCII byte that represents it.
//! Two fixed alphabets exist, one per letter case. Both cover values `0..36`
//! even though the formatters never go past hexadecimal.

/// Ordered table of 36 ASCII digits, indexed by digit value.
///
/// Index `v` holds the character for digit value `v`, so any radix up to 36
/// can be served from the same table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DigitAlphabet([u8; 36]);

impl DigitAlphabet {
    /// `0-9a-z`
    #[rustfmt::skip]
    pub const LOWERCASE: Self = Self([
        b'0', b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9',
        b'a', b'b', b'c', b'd', b'e', b'f', b'g', b'h', b'i', b'j',
        b'k', b'l', b'm', b'n', b'o', b'p', b'q', b'r', b's', b't',
        b'u', b'v', b'w', b'x', b'y', b'z',
    ]);

    /// `0-9A-Z`
    #[rustfmt::skip]
    pub const UPPERCASE: Self = Self([
        b'0', b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9',
        b'A', b'B', b'C', b'D', b'E', b'F', b'G', b'H', b'I', b'J',
        b'K', b'L', b'M', b'N', b'O', b'P', b'Q', b'R', b'S', b'T',
        b'U', b'V', b'W', b'X', b'Y', b'Z',
    ]);

    /// Number of digits the alphabet can represent.
    pub const LEN: usize = 36;

    /// Returns the ASCII byte for digit value `value`.
    ///
    /// Callers pass masked values (`value & radix.mask()`), which are always
    /// below 16 and therefore in range.
    #[inline(always)]
    pub const fn digit(&self, value: usize) -> u8 {
        self.0[value]
    }

    /// Returns the raw table.
    pub const fn as_bytes(&self) -> &[u8; 36] {
        &self.0
    }
}

static LOWER: DigitAlphabet = DigitAlphabet::LOWERCASE;
static UPPER: DigitAlphabet = DigitAlphabet::UPPERCASE;

/// Letter case used for digits above 9.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Case {
    /// Produce lower-case letters (`[0-9a-f]` in hexadecimal).
    ///
    /// This is the default.
    #[default]
    Lowercase,

    /// Produce upper-case letters (`[0-9A-F]` in hexadecimal).
    Uppercase,
}

impl Case {
    /// Returns the alphabet for this case.
    #[inline]
    pub fn table(self) -> &'static DigitAlphabet {
        match self {
            Case::Lowercase => &LOWER,
            Case::Uppercase => &UPPER,
        }
    }
}
