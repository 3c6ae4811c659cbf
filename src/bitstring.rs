//! BitString - fixed-length bit string packed into 64-bit words.
//!
//! # Design
//!
//! - Uses `Vec<u64>` for storage, `ceil(len / 64)` words
//! - Bit indexing: word_idx = bit_idx / 64, bit_offset = bit_idx % 64
//! - Bit 0 is the rightmost character of the big-endian text form
//! - Bits past `len` in the last word are always 0 (padding invariant), so
//!   whole-word counting, comparison and reversal need no extra masking
//!
//! Range operations live in [`crate::range`], integer access in
//! [`crate::codec`] and text/big-integer conversion in [`crate::convert`];
//! they are all `impl BitString` blocks over the same storage.
//!
//! # Examples
//!
//! ```
//! use bitstring::BitString;
//!
//! let mut bs = BitString::new(8);
//! bs.set_bit(2);
//! assert_eq!(bs.to_string(), "00000100");
//! assert_eq!(bs.count_ones(), 1);
//! ```

use crate::bitops::{
    bit_idx, bit_mask, first_set_bit, last_set_bit, low_mask, reverse_word, word_count, word_idx,
    Word, BITS_PER_WORD,
};
use crate::error::{BitStringError, Result};
use rand::Rng;
use std::hash::{Hash, Hasher};

/// Fixed-length bit string using 64-bit word storage.
///
/// Provides bit-level operations with word-level performance.
/// All bit indices are 0-based.
#[derive(Clone, Debug, Default)]
pub struct BitString {
    /// Storage words (64-bit), LSB-first within each word
    pub(crate) words: Vec<Word>,
    /// Total number of bits
    pub(crate) length: usize,
}

impl BitString {
    /// Create a new BitString with `n` bits, all initialized to 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitstring::BitString;
    ///
    /// let bs = BitString::new(100);
    /// assert_eq!(bs.len(), 100);
    /// assert_eq!(bs.num_words(), 2);
    /// assert_eq!(bs.count_ones(), 0);
    /// ```
    pub fn new(n: usize) -> Self {
        Self {
            words: vec![0; word_count(n)],
            length: n,
        }
    }

    /// Create a BitString of `n` bits, each bit drawn uniformly from `rng`.
    ///
    /// Fills whole words at once, then zeroes the padding bits of the last
    /// word.
    ///
    /// ```
    /// use bitstring::BitString;
    /// use rand::SeedableRng;
    ///
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let bs = BitString::random(100, &mut rng);
    /// assert_eq!(bs.len(), 100);
    /// assert!(bs.count_ones() <= 100);
    /// ```
    pub fn random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let mut bs = Self::new(n);
        rng.fill(bs.words.as_mut_slice());
        bs.clear_padding();
        bs
    }

    /// Get total number of bits.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns true if the bitstring holds no bits.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Get number of storage words.
    #[inline(always)]
    pub fn num_words(&self) -> usize {
        self.words.len()
    }

    /// Get direct read-only access to word storage.
    ///
    /// Word `k` holds bits `64k..64k+64`, bit `64k` in its least significant
    /// position. The view borrows `self`, so it cannot outlive a
    /// reallocation by [`copy_into`].
    #[inline(always)]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Check that `b` is a valid bit index.
    #[inline]
    pub fn check_index(&self, b: usize) -> Result<()> {
        if b < self.length {
            Ok(())
        } else {
            Err(BitStringError::IndexOutOfRange {
                index: b,
                length: self.length,
            })
        }
    }

    /// Check that the range `[offset, offset + count)` lies within the bitstring.
    ///
    /// An empty range is valid for any `offset <= len`.
    #[inline]
    pub fn check_range(&self, offset: usize, count: usize) -> Result<()> {
        match offset.checked_add(count) {
            Some(end) if end <= self.length => Ok(()),
            _ => Err(BitStringError::RangeOutOfBounds {
                offset,
                count,
                length: self.length,
            }),
        }
    }

    #[inline]
    #[track_caller]
    pub(crate) fn must_exist(&self, b: usize) {
        if let Err(err) = self.check_index(b) {
            panic!("{}", err);
        }
    }

    #[inline]
    #[track_caller]
    pub(crate) fn must_contain(&self, offset: usize, count: usize) {
        if let Err(err) = self.check_range(offset, count) {
            panic!("{}", err);
        }
    }

    /// Number of meaningful bits in word `w`.
    #[inline(always)]
    fn bits_in_word(&self, w: usize) -> usize {
        let tail = bit_idx(self.length);
        if tail != 0 && w + 1 == self.words.len() {
            tail
        } else {
            BITS_PER_WORD
        }
    }

    /// Zero the bits past `len` in the last word.
    #[inline]
    pub(crate) fn clear_padding(&mut self) {
        let tail = bit_idx(self.length);
        if tail != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= low_mask(tail);
            }
        }
    }

    // =========================================================================
    // Single Bit Operations
    // =========================================================================

    /// Get bit at position `b`.
    ///
    /// # Panics
    ///
    /// Panics if `b >= len`.
    #[inline]
    #[track_caller]
    pub fn get_bit(&self, b: usize) -> bool {
        self.must_exist(b);
        self.words[word_idx(b)] & bit_mask(bit_idx(b)) != 0
    }

    /// Set bit at position `b` to 1.
    ///
    /// # Panics
    ///
    /// Panics if `b >= len`.
    #[inline]
    #[track_caller]
    pub fn set_bit(&mut self, b: usize) {
        self.must_exist(b);
        self.words[word_idx(b)] |= bit_mask(bit_idx(b));
    }

    /// Clear bit at position `b` (set to 0).
    ///
    /// # Panics
    ///
    /// Panics if `b >= len`.
    #[inline]
    #[track_caller]
    pub fn clear_bit(&mut self, b: usize) {
        self.must_exist(b);
        self.words[word_idx(b)] &= !bit_mask(bit_idx(b));
    }

    /// Flip bit at position `b` (0 -> 1, 1 -> 0).
    ///
    /// # Panics
    ///
    /// Panics if `b >= len`.
    #[inline]
    #[track_caller]
    pub fn flip_bit(&mut self, b: usize) {
        self.must_exist(b);
        self.words[word_idx(b)] ^= bit_mask(bit_idx(b));
    }

    /// Assign bit at position `b` to given value.
    #[inline]
    #[track_caller]
    pub fn assign_bit(&mut self, b: usize, val: bool) {
        if val {
            self.set_bit(b);
        } else {
            self.clear_bit(b);
        }
    }

    // =========================================================================
    // Bulk Operations
    // =========================================================================

    /// Set all bits to 1.
    pub fn set_all(&mut self) {
        self.words.fill(Word::MAX);
        self.clear_padding();
    }

    /// Clear all bits to 0.
    pub fn clear_all(&mut self) {
        self.words.fill(0);
    }

    /// Flip all bits (replaces ones with zeroes and zeroes with ones).
    pub fn flip_all(&mut self) {
        self.flip_range(0, self.length);
    }

    // =========================================================================
    // Counting Operations
    // =========================================================================

    /// Count number of set bits (population count).
    #[inline]
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Count number of cleared bits.
    #[inline]
    pub fn count_zeros(&self) -> usize {
        self.length - self.count_ones()
    }

    /// Number of consecutive 0 bits starting from the most significant bit.
    ///
    /// ```
    /// use bitstring::BitString;
    ///
    /// let bs: BitString = "0010100".parse().unwrap();
    /// assert_eq!(bs.leading_zeros(), 2);
    /// assert_eq!(bs.trailing_zeros(), 2);
    /// ```
    pub fn leading_zeros(&self) -> usize {
        self.leading_run(false)
    }

    /// Number of consecutive 1 bits starting from the most significant bit.
    pub fn leading_ones(&self) -> usize {
        self.leading_run(true)
    }

    /// Number of consecutive 0 bits starting from the least significant bit.
    pub fn trailing_zeros(&self) -> usize {
        self.trailing_run(false)
    }

    /// Number of consecutive 1 bits starting from the least significant bit.
    pub fn trailing_ones(&self) -> usize {
        self.trailing_run(true)
    }

    /// Length of the run of `ones`-valued bits at the high end.
    ///
    /// Looking for ones is looking for zeroes in the complement restricted to
    /// the meaningful bits of the word.
    fn leading_run(&self, ones: bool) -> usize {
        let mut n = 0;
        for (i, &word) in self.words.iter().enumerate().rev() {
            let valid = self.bits_in_word(i);
            let w = if ones { !word & low_mask(valid) } else { word };
            if w != 0 {
                return n + valid - 1 - last_set_bit(w);
            }
            n += valid;
        }
        n
    }

    /// Length of the run of `ones`-valued bits at the low end.
    fn trailing_run(&self, ones: bool) -> usize {
        let mut n = 0;
        for (i, &word) in self.words.iter().enumerate() {
            let valid = self.bits_in_word(i);
            let w = if ones { !word & low_mask(valid) } else { word };
            if w != 0 {
                return n + first_set_bit(w);
            }
            n += valid;
        }
        n
    }

    // =========================================================================
    // Whole-String Transforms
    // =========================================================================

    /// Reverse the bit order end to end, in place.
    ///
    /// ```
    /// use bitstring::BitString;
    ///
    /// let mut bs: BitString = "1101000".parse().unwrap();
    /// bs.reverse();
    /// assert_eq!(bs.to_string(), "0001011");
    /// ```
    pub fn reverse(&mut self) {
        // Reversing the word order and the bits of every word reverses the
        // whole buffer, padding included.
        self.words.reverse();
        for w in self.words.iter_mut() {
            *w = reverse_word(*w);
        }

        // The padding now sits at the low end; shift it back out.
        let pad = bit_idx(BITS_PER_WORD - bit_idx(self.length));
        if pad != 0 {
            shift_words_right(&mut self.words, pad);
        }
    }

    /// Rotate left by `k mod len` bits: bit `i` moves to `(i + k) mod len`.
    ///
    /// In the big-endian text form this is a left rotation of the characters.
    ///
    /// ```
    /// use bitstring::BitString;
    ///
    /// let mut bs: BitString = "1100101".parse().unwrap();
    /// bs.rotate_left(2);
    /// assert_eq!(bs.to_string(), "0010111");
    /// ```
    pub fn rotate_left(&mut self, k: usize) {
        if self.length == 0 {
            return;
        }
        let k = k % self.length;
        if k == 0 {
            return;
        }

        // The k most significant bits wrap around to the bottom.
        let carried = self.copy_range(self.length - k, k);

        shift_words_left(&mut self.words, k);
        self.clear_padding();

        for (j, &w) in carried.words.iter().enumerate() {
            let offset = j * BITS_PER_WORD;
            self.write_bits(offset, (k - offset).min(BITS_PER_WORD), w);
        }
    }

    /// Rotate right by `k mod len` bits: bit `i` moves to `(i - k) mod len`.
    pub fn rotate_right(&mut self, k: usize) {
        if self.length == 0 {
            return;
        }
        self.rotate_left(self.length - k % self.length);
    }
}

/// Shift the multi-word value in `words` towards bit 0 by `k < 64` bits.
fn shift_words_right(words: &mut [Word], k: usize) {
    debug_assert!(k > 0 && k < BITS_PER_WORD);
    let n = words.len();
    for i in 0..n {
        let carry = if i + 1 < n {
            words[i + 1] << (BITS_PER_WORD - k)
        } else {
            0
        };
        words[i] = (words[i] >> k) | carry;
    }
}

/// Shift the multi-word value in `words` away from bit 0 by `k` bits,
/// discarding what falls off the top word. Requires `k < 64 * words.len()`.
fn shift_words_left(words: &mut [Word], k: usize) {
    let n = words.len();
    let word_shift = word_idx(k);
    let bit_shift = bit_idx(k);
    debug_assert!(word_shift < n);

    if word_shift > 0 {
        words.copy_within(0..n - word_shift, word_shift);
        words[..word_shift].fill(0);
    }

    if bit_shift > 0 {
        for i in (word_shift..n).rev() {
            let carry = if i > word_shift {
                words[i - 1] >> (BITS_PER_WORD - bit_shift)
            } else {
                0
            };
            words[i] = (words[i] << bit_shift) | carry;
        }
    }
}

// =============================================================================
// Comparison
// =============================================================================

impl PartialEq for BitString {
    /// Same instance, or same length and identical words.
    ///
    /// Padding bits are always 0, so whole-word comparison is exact.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || (self.length == other.length && self.words == other.words)
    }
}

impl Eq for BitString {}

impl Hash for BitString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        self.words.hash(state);
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Copy `src` into `dst`, growing or shrinking `dst` to `src`'s length.
///
/// Storage is reused when the word count allows it and reallocated
/// otherwise; afterwards `dst == src`.
///
/// ```
/// use bitstring::{copy_into, BitString};
///
/// let src: BitString = "10110".parse().unwrap();
/// let mut dst = BitString::new(300);
/// copy_into(&mut dst, &src);
/// assert_eq!(dst, src);
/// ```
pub fn copy_into(dst: &mut BitString, src: &BitString) {
    dst.words.resize(src.words.len(), 0);
    dst.words.copy_from_slice(&src.words);
    dst.length = src.length;
}
