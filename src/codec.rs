//! Integer codec: fixed- and arbitrary-width integers at any bit offset.
//!
//! An integer of width `w` stored at `offset` occupies bits
//! `[offset, offset + w)`, bit `offset` holding its least significant bit.
//! Every accessor takes `(offset, width)` in that order, followed by the
//! value for setters.
//!
//! All widths share one read and one write routine. A value either fits in a
//! single word (one shift and mask) or straddles two words, in which case the
//! low word supplies the value's low `64 - offset % 64` bits and the high word
//! the rest. A word-aligned 64-bit access is a plain word load or store.
//!
//! # Examples
//!
//! ```
//! use bitstring::BitString;
//!
//! let mut bs = BitString::new(100);
//! bs.set_u16(60, 0xBEEF);
//! assert_eq!(bs.get_u16(60), 0xBEEF);
//! assert_eq!(bs.get_uint(60, 4), 0xF);
//!
//! bs.set_int(10, 5, -3);
//! assert_eq!(bs.get_int(10, 5), -3);
//! assert_eq!(bs.get_uint(10, 5), 0b11101);
//! ```

use crate::bitops::{
    bit_idx, high_mask, low_mask, range_mask, transfer_bits, word_idx, Word, BITS_PER_WORD,
};
use crate::bitstring::BitString;
use crate::error::{BitStringError, Result};

/// Check that `width` is a supported arbitrary integer width (1 to 64).
#[inline]
pub fn check_width(width: usize) -> Result<()> {
    if (1..=BITS_PER_WORD).contains(&width) {
        Ok(())
    } else {
        Err(BitStringError::InvalidWidth {
            width,
            max: BITS_PER_WORD,
        })
    }
}

#[inline]
#[track_caller]
fn must_be_valid_width(width: usize) {
    if let Err(err) = check_width(width) {
        panic!("{}", err);
    }
}

/// Decode a Gray-coded value: each bit becomes the XOR of itself and every
/// more significant bit.
#[inline]
pub fn gray_decode(mut v: u64) -> u64 {
    v ^= v >> 32;
    v ^= v >> 16;
    v ^= v >> 8;
    v ^= v >> 4;
    v ^= v >> 2;
    v ^= v >> 1;
    v
}

/// Gray-encode a value.
#[inline]
pub fn gray_encode(v: u64) -> u64 {
    v ^ (v >> 1)
}

/// Sign-extend the low `width` bits of `v`.
#[inline]
fn sign_extend(v: u64, width: usize) -> i64 {
    let shift = BITS_PER_WORD - width;
    ((v << shift) as i64) >> shift
}

impl BitString {
    // =========================================================================
    // Shared read/write
    // =========================================================================

    /// Read `width` bits at `offset` as an unsigned value. Unchecked: the
    /// range must exist and `1 <= width <= 64`.
    #[inline(always)]
    pub(crate) fn read_bits(&self, offset: usize, width: usize) -> Word {
        let lo_word = word_idx(offset);
        let lo_bit = bit_idx(offset);

        // fast path: word aligned full word
        if lo_bit == 0 && width == BITS_PER_WORD {
            return self.words[lo_word];
        }

        let hi_word = word_idx(offset + width - 1);
        if lo_word == hi_word {
            return (self.words[lo_word] >> lo_bit) & low_mask(width);
        }

        // lo_bit > 0 here, the value straddles two words
        let lo_len = BITS_PER_WORD - lo_bit;
        let lo = self.words[lo_word] >> lo_bit;
        let hi = self.words[hi_word] & low_mask(width - lo_len);
        lo | (hi << lo_len)
    }

    /// Write the low `width` bits of `value` at `offset`. Unchecked: the
    /// range must exist and `1 <= width <= 64`.
    #[inline(always)]
    pub(crate) fn write_bits(&mut self, offset: usize, width: usize, value: Word) {
        let lo_word = word_idx(offset);
        let lo_bit = bit_idx(offset);

        // fast path: word aligned full word
        if lo_bit == 0 && width == BITS_PER_WORD {
            self.words[lo_word] = value;
            return;
        }

        let value = value & low_mask(width);
        let hi_word = word_idx(offset + width - 1);
        if lo_word == hi_word {
            self.words[lo_word] = transfer_bits(
                self.words[lo_word],
                value << lo_bit,
                range_mask(lo_bit, lo_bit + width),
            );
            return;
        }

        let lo_len = BITS_PER_WORD - lo_bit;
        self.words[lo_word] = transfer_bits(self.words[lo_word], value << lo_bit, high_mask(lo_bit));
        self.words[hi_word] =
            transfer_bits(self.words[hi_word], value >> lo_len, low_mask(width - lo_len));
    }

    #[inline(always)]
    #[track_caller]
    fn get_fixed(&self, offset: usize, width: usize) -> Word {
        self.must_contain(offset, width);
        self.read_bits(offset, width)
    }

    #[inline(always)]
    #[track_caller]
    fn set_fixed(&mut self, offset: usize, width: usize, value: Word) {
        self.must_contain(offset, width);
        self.write_bits(offset, width, value);
    }

    // =========================================================================
    // Unsigned
    // =========================================================================

    /// Get the `u8` stored in the 8 bits starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if there are not enough bits.
    #[inline]
    #[track_caller]
    pub fn get_u8(&self, offset: usize) -> u8 {
        self.get_fixed(offset, 8) as u8
    }

    /// Get the `u16` stored in the 16 bits starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if there are not enough bits.
    #[inline]
    #[track_caller]
    pub fn get_u16(&self, offset: usize) -> u16 {
        self.get_fixed(offset, 16) as u16
    }

    /// Get the `u32` stored in the 32 bits starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if there are not enough bits.
    #[inline]
    #[track_caller]
    pub fn get_u32(&self, offset: usize) -> u32 {
        self.get_fixed(offset, 32) as u32
    }

    /// Get the `u64` stored in the 64 bits starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if there are not enough bits.
    #[inline]
    #[track_caller]
    pub fn get_u64(&self, offset: usize) -> u64 {
        self.get_fixed(offset, 64)
    }

    /// Get the `width`-bit unsigned integer starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `width` is not in `1..=64` or if there are not enough bits.
    #[inline]
    #[track_caller]
    pub fn get_uint(&self, offset: usize, width: usize) -> u64 {
        must_be_valid_width(width);
        self.get_fixed(offset, width)
    }

    /// Store `v` in the 8 bits starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if there are not enough bits.
    #[inline]
    #[track_caller]
    pub fn set_u8(&mut self, offset: usize, v: u8) {
        self.set_fixed(offset, 8, v as Word);
    }

    /// Store `v` in the 16 bits starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if there are not enough bits.
    #[inline]
    #[track_caller]
    pub fn set_u16(&mut self, offset: usize, v: u16) {
        self.set_fixed(offset, 16, v as Word);
    }

    /// Store `v` in the 32 bits starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if there are not enough bits.
    #[inline]
    #[track_caller]
    pub fn set_u32(&mut self, offset: usize, v: u32) {
        self.set_fixed(offset, 32, v as Word);
    }

    /// Store `v` in the 64 bits starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if there are not enough bits.
    #[inline]
    #[track_caller]
    pub fn set_u64(&mut self, offset: usize, v: u64) {
        self.set_fixed(offset, 64, v);
    }

    /// Store the low `width` bits of `v` starting at `offset`. Higher bits
    /// of `v` are ignored.
    ///
    /// # Panics
    ///
    /// Panics if `width` is not in `1..=64` or if there are not enough bits.
    #[inline]
    #[track_caller]
    pub fn set_uint(&mut self, offset: usize, width: usize, v: u64) {
        must_be_valid_width(width);
        self.set_fixed(offset, width, v);
    }

    // =========================================================================
    // Signed (two's complement)
    // =========================================================================

    /// Get the `i8` stored in the 8 bits starting at `offset`.
    #[inline]
    #[track_caller]
    pub fn get_i8(&self, offset: usize) -> i8 {
        self.get_u8(offset) as i8
    }

    /// Get the `i16` stored in the 16 bits starting at `offset`.
    #[inline]
    #[track_caller]
    pub fn get_i16(&self, offset: usize) -> i16 {
        self.get_u16(offset) as i16
    }

    /// Get the `i32` stored in the 32 bits starting at `offset`.
    #[inline]
    #[track_caller]
    pub fn get_i32(&self, offset: usize) -> i32 {
        self.get_u32(offset) as i32
    }

    /// Get the `i64` stored in the 64 bits starting at `offset`.
    #[inline]
    #[track_caller]
    pub fn get_i64(&self, offset: usize) -> i64 {
        self.get_u64(offset) as i64
    }

    /// Get the `width`-bit two's complement integer starting at `offset`,
    /// sign-extended to `i64`.
    ///
    /// # Panics
    ///
    /// Panics if `width` is not in `1..=64` or if there are not enough bits.
    #[inline]
    #[track_caller]
    pub fn get_int(&self, offset: usize, width: usize) -> i64 {
        sign_extend(self.get_uint(offset, width), width)
    }

    /// Store `v` in the 8 bits starting at `offset`.
    #[inline]
    #[track_caller]
    pub fn set_i8(&mut self, offset: usize, v: i8) {
        self.set_u8(offset, v as u8);
    }

    /// Store `v` in the 16 bits starting at `offset`.
    #[inline]
    #[track_caller]
    pub fn set_i16(&mut self, offset: usize, v: i16) {
        self.set_u16(offset, v as u16);
    }

    /// Store `v` in the 32 bits starting at `offset`.
    #[inline]
    #[track_caller]
    pub fn set_i32(&mut self, offset: usize, v: i32) {
        self.set_u32(offset, v as u32);
    }

    /// Store `v` in the 64 bits starting at `offset`.
    #[inline]
    #[track_caller]
    pub fn set_i64(&mut self, offset: usize, v: i64) {
        self.set_u64(offset, v as u64);
    }

    /// Store `v` truncated to `width` bits of two's complement starting at
    /// `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `width` is not in `1..=64` or if there are not enough bits.
    #[inline]
    #[track_caller]
    pub fn set_int(&mut self, offset: usize, width: usize, v: i64) {
        self.set_uint(offset, width, v as u64);
    }

    // =========================================================================
    // Gray code
    // =========================================================================

    /// Decode the Gray-coded `u8` stored in the 8 bits starting at `offset`.
    ///
    /// ```
    /// use bitstring::BitString;
    ///
    /// let bs: BitString = "00000111".parse().unwrap();
    /// assert_eq!(bs.get_gray8(0), 5);
    /// ```
    #[inline]
    #[track_caller]
    pub fn get_gray8(&self, offset: usize) -> u8 {
        gray_decode(self.get_u8(offset) as u64) as u8
    }

    /// Decode the Gray-coded `u16` stored in the 16 bits starting at `offset`.
    #[inline]
    #[track_caller]
    pub fn get_gray16(&self, offset: usize) -> u16 {
        gray_decode(self.get_u16(offset) as u64) as u16
    }

    /// Decode the Gray-coded `u32` stored in the 32 bits starting at `offset`.
    #[inline]
    #[track_caller]
    pub fn get_gray32(&self, offset: usize) -> u32 {
        gray_decode(self.get_u32(offset) as u64) as u32
    }

    /// Decode the Gray-coded `u64` stored in the 64 bits starting at `offset`.
    #[inline]
    #[track_caller]
    pub fn get_gray64(&self, offset: usize) -> u64 {
        gray_decode(self.get_u64(offset))
    }

    /// Decode the `width`-bit Gray-coded value starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `width` is not in `1..=64` or if there are not enough bits.
    #[inline]
    #[track_caller]
    pub fn get_gray(&self, offset: usize, width: usize) -> u64 {
        gray_decode(self.get_uint(offset, width))
    }

    /// Gray-encode `v` into the 8 bits starting at `offset`.
    #[inline]
    #[track_caller]
    pub fn set_gray8(&mut self, offset: usize, v: u8) {
        self.set_u8(offset, gray_encode(v as u64) as u8);
    }

    /// Gray-encode `v` into the 16 bits starting at `offset`.
    #[inline]
    #[track_caller]
    pub fn set_gray16(&mut self, offset: usize, v: u16) {
        self.set_u16(offset, gray_encode(v as u64) as u16);
    }

    /// Gray-encode `v` into the 32 bits starting at `offset`.
    #[inline]
    #[track_caller]
    pub fn set_gray32(&mut self, offset: usize, v: u32) {
        self.set_u32(offset, gray_encode(v as u64) as u32);
    }

    /// Gray-encode `v` into the 64 bits starting at `offset`.
    #[inline]
    #[track_caller]
    pub fn set_gray64(&mut self, offset: usize, v: u64) {
        self.set_u64(offset, gray_encode(v));
    }

    /// Gray-encode the low `width` bits of `v` starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `width` is not in `1..=64` or if there are not enough bits.
    #[inline]
    #[track_caller]
    pub fn set_gray(&mut self, offset: usize, width: usize, v: u64) {
        must_be_valid_width(width);
        self.set_fixed(offset, width, gray_encode(v & low_mask(width)));
    }
}
