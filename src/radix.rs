//! Power-of-two radix selector.

/// A radix of the form `2^shift`.
///
/// Restricting the radix to powers of two is what lets the formatters
/// extract digits with a mask and a logical shift instead of a division.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Radix {
    /// Base 2, one bit per digit.
    Binary,
    /// Base 8, three bits per digit.
    Octal,
    /// Base 16, four bits per digit.
    Hexadecimal,
}

impl Radix {
    /// Number of bits consumed per output digit.
    #[inline(always)]
    pub const fn shift(self) -> u32 {
        match self {
            Radix::Binary => 1,
            Radix::Octal => 3,
            Radix::Hexadecimal => 4,
        }
    }

    /// The radix itself (`1 << shift`).
    #[inline(always)]
    pub const fn base(self) -> u32 {
        1 << self.shift()
    }

    /// Mask selecting the low `shift` bits.
    #[inline(always)]
    pub const fn mask(self) -> u32 {
        self.base() - 1
    }

    /// Upper bound on the digit count for a `width`-bit value:
    /// `ceil(width / shift)`.
    pub const fn max_digits(self, width: u32) -> usize {
        let shift = self.shift();

        width.div_ceil(shift) as usize
    }
}
