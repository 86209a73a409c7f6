use integer_formatting::formatting::leading_zeros_64;

use proptest::prelude::*;

#[test]
fn lzc_zero_is_full_width() {
    assert_eq!(leading_zeros_64(0), 64);
}

#[test]
fn lzc_single_bits() {
    for bit in 0..64 {
        assert_eq!(leading_zeros_64(1u64 << bit), 63 - bit);
    }
}

#[test]
fn lzc_window_edges() {
    assert_eq!(leading_zeros_64(u64::MAX), 0);
    assert_eq!(leading_zeros_64(0xFFFF_FFFF), 32);
    assert_eq!(leading_zeros_64(0x1_0000_0000), 31);
    assert_eq!(leading_zeros_64(0x0000_FFFF_0000_0000), 16);
    assert_eq!(leading_zeros_64(0xFF), 56);
    assert_eq!(leading_zeros_64(0x3), 62);
}

proptest! {
    #[test]
    fn lzc_agrees_with_bit_scan(x in any::<u64>()) {
        prop_assert_eq!(leading_zeros_64(x), x.leading_zeros());
    }

    #[test]
    fn lzc_agrees_with_bit_scan_low_half(x in any::<u32>()) {
        let x = x as u64;
        prop_assert_eq!(leading_zeros_64(x), x.leading_zeros());
    }
}
