//! Tests for the integer codec.
//!
//! Cross-word reads are checked against `bitvec`'s little-endian field loads
//! over the same words.

use bitstring::bitops::low_mask;
use bitstring::codec::{check_width, gray_decode, gray_encode};
use bitstring::{BitString, BitStringError};
use bitvec::prelude::*;
use proptest::prelude::*;
use rand::SeedableRng;

/// Random bitstring plus a valid `(offset, width)` with `1 <= width <= 64`.
fn bitstring_offset_width() -> impl Strategy<Value = (BitString, usize, usize)> {
    (64..400usize, any::<u64>(), 1..=64usize)
        .prop_flat_map(|(n, seed, width)| (Just(n), Just(seed), Just(width), 0..=(n - width)))
        .prop_map(|(n, seed, width, offset)| {
            let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
            (BitString::random(n, &mut rng), offset, width)
        })
}

// =============================================================================
// Fixed Widths
// =============================================================================

#[test]
fn test_uint8_from_text() {
    let bs: BitString = "1000000100000011".parse().unwrap();
    assert_eq!(bs.get_u8(0), 0b0000_0011);
    assert_eq!(bs.get_u8(8), 0b1000_0001);
    assert_eq!(bs.get_u8(4), 0b0001_0000);
    assert_eq!(bs.get_u16(0), 0b1000_0001_0000_0011);
}

#[test]
fn test_fixed_widths_every_offset() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(3);
    let base = BitString::random(200, &mut rng);
    for offset in 0..=(200 - 64) {
        let mut bs = base.clone();
        bs.set_u8(offset, 0xA5);
        assert_eq!(bs.get_u8(offset), 0xA5);
        bs.set_u16(offset, 0xBEEF);
        assert_eq!(bs.get_u16(offset), 0xBEEF);
        bs.set_u32(offset, 0xDEAD_BEEF);
        assert_eq!(bs.get_u32(offset), 0xDEAD_BEEF);
        bs.set_u64(offset, 0x0123_4567_89AB_CDEF);
        assert_eq!(bs.get_u64(offset), 0x0123_4567_89AB_CDEF);

        // Bits outside [offset, offset + 64) are untouched.
        if offset > 0 {
            assert_eq!(bs.copy_range(0, offset), base.copy_range(0, offset));
        }
        let end = offset + 64;
        assert_eq!(bs.copy_range(end, 200 - end), base.copy_range(end, 200 - end));
    }
}

#[test]
fn test_signed_fixed_widths() {
    let mut bs = BitString::new(130);
    for offset in [0, 1, 33, 60, 63, 64, 66] {
        bs.set_i8(offset, i8::MIN);
        assert_eq!(bs.get_i8(offset), i8::MIN);
        bs.set_i16(offset, -2);
        assert_eq!(bs.get_i16(offset), -2);
        bs.set_i32(offset, i32::MIN + 1);
        assert_eq!(bs.get_i32(offset), i32::MIN + 1);
        bs.set_i64(offset, -1);
        assert_eq!(bs.get_i64(offset), -1);
        assert_eq!(bs.get_u64(offset), u64::MAX);
    }
}

#[test]
fn test_gray_from_text() {
    let cases: [(&str, u8); 3] = [("00000000", 0), ("00000111", 5), ("10000000", u8::MAX)];
    for (text, want) in cases {
        let bs: BitString = text.parse().unwrap();
        assert_eq!(bs.get_gray8(0), want);
        assert_eq!(bs.get_gray(0, 8), want as u64);
    }

    let bs: BitString = format!("1{}", "0".repeat(63)).parse().unwrap();
    assert_eq!(bs.get_gray64(0), u64::MAX);
    let bs: BitString = format!("{}111", "0".repeat(29)).parse().unwrap();
    assert_eq!(bs.get_gray32(0), 5);
    let bs: BitString = format!("1{}", "0".repeat(15)).parse().unwrap();
    assert_eq!(bs.get_gray16(0), u16::MAX);
}

// =============================================================================
// Width Validation
// =============================================================================

#[test]
fn test_check_width() {
    for width in 1..=64 {
        assert!(check_width(width).is_ok());
    }
    assert_eq!(
        check_width(0),
        Err(BitStringError::InvalidWidth { width: 0, max: 64 })
    );
    assert_eq!(
        check_width(65),
        Err(BitStringError::InvalidWidth { width: 65, max: 64 })
    );
}

#[test]
#[should_panic(expected = "integer width 0")]
fn test_get_int_zero_width() {
    let bs = BitString::new(64);
    bs.get_int(0, 0);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_set_uint_past_end() {
    let mut bs = BitString::new(64);
    bs.set_uint(60, 5, 0);
}

#[test]
fn test_failed_write_leaves_bits() {
    let mut bs = BitString::new(64);
    bs.set_all();
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        bs.set_u16(50, 0);
    }));
    assert!(result.is_err());
    assert_eq!(bs.count_ones(), 64);
}

// =============================================================================
// Property-Based Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_uint_roundtrip((bs, offset, width) in bitstring_offset_width(), v in any::<u64>()) {
        let mut bs = bs;
        bs.set_uint(offset, width, v);
        prop_assert_eq!(bs.get_uint(offset, width), v & low_mask(width));
    }

    #[test]
    fn prop_uint_matches_bitvec((bs, offset, width) in bitstring_offset_width()) {
        let bv = BitVec::<u64, Lsb0>::from_slice(bs.words());
        let expected: u64 = bv[offset..offset + width].load_le();
        prop_assert_eq!(bs.get_uint(offset, width), expected);
    }

    #[test]
    fn prop_set_uint_leaves_rest((bs, offset, width) in bitstring_offset_width(), v in any::<u64>()) {
        let mut written = bs.clone();
        written.set_uint(offset, width, v);

        let end = offset + width;
        prop_assert_eq!(written.copy_range(0, offset), bs.copy_range(0, offset));
        prop_assert_eq!(written.copy_range(end, bs.len() - end), bs.copy_range(end, bs.len() - end));
        prop_assert_eq!(written.len(), bs.len());
    }

    #[test]
    fn prop_int_roundtrip((bs, offset, width) in bitstring_offset_width(), v in any::<i64>()) {
        let mut bs = bs;
        let shift = 64 - width as u32;
        let truncated = (v << shift) >> shift;
        bs.set_int(offset, width, v);
        prop_assert_eq!(bs.get_int(offset, width), truncated);
    }

    #[test]
    fn prop_gray_roundtrip((bs, offset, width) in bitstring_offset_width(), v in any::<u64>()) {
        let mut bs = bs;
        bs.set_gray(offset, width, v);
        prop_assert_eq!(bs.get_gray(offset, width), v & low_mask(width));
        prop_assert_eq!(bs.get_uint(offset, width), gray_encode(v & low_mask(width)));
    }

    #[test]
    fn prop_gray_decode_inverts_encode(v in any::<u64>()) {
        prop_assert_eq!(gray_decode(gray_encode(v)), v);
    }
}
