//! Word and mask arithmetic shared by every bitstring operation.
//!
//! Bit `i` of a bitstring lives in word `i / 64` at offset `i % 64`, offset 0
//! being the least significant bit of the word. All helpers here are `const`
//! and branch-light; the mask builders special-case the full-word width so
//! that no shift ever reaches the word width.
//!
//! # Examples
//!
//! ```
//! use bitstring::bitops::{high_mask, low_mask, range_mask};
//!
//! assert_eq!(low_mask(4), 0b1111);
//! assert_eq!(high_mask(60), 0xF000_0000_0000_0000);
//! assert_eq!(range_mask(2, 5), 0b11100);
//! ```

/// Word type for bit storage (64-bit unsigned integer)
pub type Word = u64;

/// Number of bits per word
pub const BITS_PER_WORD: usize = 64;

/// Maximum word value
pub const WORD_MAX: Word = Word::MAX;

const _: () = assert!(is_power_of_two(BITS_PER_WORD));

/// Get word index from bit position
#[inline(always)]
pub const fn word_idx(bit_pos: usize) -> usize {
    bit_pos >> 6 // bit_pos / 64
}

/// Get bit index within word from bit position
#[inline(always)]
pub const fn bit_idx(bit_pos: usize) -> usize {
    bit_pos & (BITS_PER_WORD - 1) // bit_pos % 64
}

/// Number of words needed to hold `num_bits` bits.
#[inline(always)]
pub const fn word_count(num_bits: usize) -> usize {
    num_bits.div_ceil(BITS_PER_WORD)
}

/// Word with only bit `off` set.
#[inline(always)]
pub const fn bit_mask(off: usize) -> Word {
    1 << off
}

/// Create bitmask with the `n` least significant bits set.
///
/// Defined for `0 <= n <= 64`: `low_mask(0) == 0`, `low_mask(64) == WORD_MAX`.
#[inline(always)]
pub const fn low_mask(n: usize) -> Word {
    if n == 0 {
        0
    } else {
        WORD_MAX >> (BITS_PER_WORD - n)
    }
}

/// Create bitmask keeping bits `n..64`, i.e. the complement of `low_mask(n)`.
///
/// Defined for `0 <= n <= 64`: `high_mask(0) == WORD_MAX`, `high_mask(64) == 0`.
#[inline(always)]
pub const fn high_mask(n: usize) -> Word {
    if n >= BITS_PER_WORD {
        0
    } else {
        WORD_MAX << n
    }
}

/// Bitmask of the half-open intra-word range `[lo, hi)`.
#[inline(always)]
pub const fn range_mask(lo: usize, hi: usize) -> Word {
    low_mask(hi) & high_mask(lo)
}

/// Merge into `dst` the bits of `src` selected by `mask`.
#[inline(always)]
pub const fn transfer_bits(dst: Word, src: Word, mask: Word) -> Word {
    (dst & !mask) | (src & mask)
}

/// Offset of the lowest set bit of `w`. Callers must ensure `w != 0`.
#[inline(always)]
pub const fn first_set_bit(w: Word) -> usize {
    debug_assert!(w != 0, "first_set_bit of an empty word");
    w.trailing_zeros() as usize
}

/// Offset of the highest set bit of `w`. Callers must ensure `w != 0`.
#[inline(always)]
pub const fn last_set_bit(w: Word) -> usize {
    debug_assert!(w != 0, "last_set_bit of an empty word");
    BITS_PER_WORD - 1 - w.leading_zeros() as usize
}

/// Returns true if `n` is a non-zero power of two.
#[inline]
pub const fn is_power_of_two(n: usize) -> bool {
    n != 0 && n & (n - 1) == 0
}

/// Maps a byte to the same byte with its bit order reversed.
pub(crate) static REVERSE_LUT: [u8; 256] = build_reverse_lut();

const fn build_reverse_lut() -> [u8; 256] {
    let mut lut = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let mut rev = 0u8;
        let mut b = 0;
        while b < 8 {
            if i & (1 << b) != 0 {
                rev |= 1 << (7 - b);
            }
            b += 1;
        }
        lut[i] = rev;
        i += 1;
    }
    lut
}

/// Reverse the bit order of a whole word, one byte at a time through the
/// lookup table.
#[inline]
pub(crate) fn reverse_word(w: Word) -> Word {
    // Byte k of the little-endian layout ends up at byte 7 - k.
    Word::from_be_bytes(w.to_le_bytes().map(|b| REVERSE_LUT[b as usize]))
}
