//! Operations over a contiguous bit range `[offset, offset + count)`.
//!
//! Every range walk has the same shape: a masked first word, a run of whole
//! interior words handled without masking, and a masked last word.
//! [`WordSpans`] produces that sequence once and each operation applies its
//! own word operation to it.
//!
//! # Examples
//!
//! ```
//! use bitstring::BitString;
//!
//! let mut bs: BitString = "10101010".parse().unwrap();
//! bs.clear_range(2, 3);
//! assert_eq!(bs.to_string(), "10100010");
//! ```

use crate::bitops::{bit_idx, high_mask, low_mask, range_mask, word_idx, Word, BITS_PER_WORD, WORD_MAX};
use crate::bitstring::BitString;

/// `(word index, mask)` pairs covering a bit range, in ascending word order.
///
/// Interior words come with `WORD_MAX`; only the first and last words carry
/// a partial mask.
#[derive(Clone, Debug)]
pub(crate) struct WordSpans {
    next: usize,
    end: usize,
    first: usize,
    last: usize,
    first_mask: Word,
    last_mask: Word,
}

impl WordSpans {
    /// Spans of `[offset, offset + count)`. The range must be validated by
    /// the caller.
    #[inline]
    pub(crate) fn new(offset: usize, count: usize) -> Self {
        if count == 0 {
            return Self {
                next: 0,
                end: 0,
                first: 0,
                last: 0,
                first_mask: 0,
                last_mask: 0,
            };
        }

        let stop = offset + count;
        let first = word_idx(offset);
        let last = word_idx(stop - 1);
        let (first_mask, last_mask) = if first == last {
            let m = range_mask(bit_idx(offset), bit_idx(stop - 1) + 1);
            (m, m)
        } else {
            (high_mask(bit_idx(offset)), low_mask(bit_idx(stop - 1) + 1))
        };

        Self {
            next: first,
            end: last + 1,
            first,
            last,
            first_mask,
            last_mask,
        }
    }
}

impl Iterator for WordSpans {
    type Item = (usize, Word);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let w = self.next;
        self.next += 1;

        let mask = if w == self.first {
            self.first_mask
        } else if w == self.last {
            self.last_mask
        } else {
            WORD_MAX
        };
        Some((w, mask))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end.saturating_sub(self.next);
        (n, Some(n))
    }
}

impl ExactSizeIterator for WordSpans {}

impl BitString {
    /// Set range of bits [offset, offset+count) to 1.
    ///
    /// # Panics
    ///
    /// Panics if offset + count > len.
    #[track_caller]
    pub fn set_range(&mut self, offset: usize, count: usize) {
        self.must_contain(offset, count);
        for (w, mask) in WordSpans::new(offset, count) {
            self.words[w] |= mask;
        }
    }

    /// Clear range of bits [offset, offset+count) to 0.
    ///
    /// # Panics
    ///
    /// Panics if offset + count > len.
    #[track_caller]
    pub fn clear_range(&mut self, offset: usize, count: usize) {
        self.must_contain(offset, count);
        for (w, mask) in WordSpans::new(offset, count) {
            self.words[w] &= !mask;
        }
    }

    /// Flip range of bits [offset, offset+count).
    ///
    /// # Panics
    ///
    /// Panics if offset + count > len.
    #[track_caller]
    pub fn flip_range(&mut self, offset: usize, count: usize) {
        self.must_contain(offset, count);
        for (w, mask) in WordSpans::new(offset, count) {
            self.words[w] ^= mask;
        }
    }

    /// Copy the bits [offset, offset+count) into a new bitstring of length
    /// `count`, bit `offset` becoming bit 0.
    ///
    /// ```
    /// use bitstring::BitString;
    ///
    /// let bs: BitString = "1100101".parse().unwrap();
    /// assert_eq!(bs.copy_range(2, 4).to_string(), "1001");
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if offset + count > len.
    #[track_caller]
    pub fn copy_range(&self, offset: usize, count: usize) -> BitString {
        self.must_contain(offset, count);
        let mut out = BitString::new(count);
        for (j, word) in out.words.iter_mut().enumerate() {
            let start = j * BITS_PER_WORD;
            *word = self.read_bits(offset + start, (count - start).min(BITS_PER_WORD));
        }
        out
    }
}

/// Swap the bits [offset, offset+count) between `a` and `b`.
///
/// The two bitstrings may have different lengths, but both must contain the
/// whole range. Swapping twice with the same arguments restores both.
///
/// ```
/// use bitstring::{swap_range, BitString};
///
/// let mut a: BitString = "11111001".parse().unwrap();
/// let mut b: BitString = "00000110".parse().unwrap();
/// swap_range(&mut a, &mut b, 1, 2);
/// assert_eq!(a.to_string(), "11111111");
/// assert_eq!(b.to_string(), "00000000");
/// ```
///
/// # Panics
///
/// Panics if the range is out of bounds for either bitstring. Neither
/// operand is modified in that case.
#[track_caller]
pub fn swap_range(a: &mut BitString, b: &mut BitString, offset: usize, count: usize) {
    a.must_contain(offset, count);
    b.must_contain(offset, count);

    for (w, mask) in WordSpans::new(offset, count) {
        if mask == WORD_MAX {
            std::mem::swap(&mut a.words[w], &mut b.words[w]);
        } else {
            let diff = (a.words[w] ^ b.words[w]) & mask;
            a.words[w] ^= diff;
            b.words[w] ^= diff;
        }
    }
}

/// Compare the bits [offset, offset+count) of `a` and `b`.
///
/// Returns false if the range does not exist on both bitstrings.
///
/// ```
/// use bitstring::{equal_range, BitString};
///
/// let a: BitString = "1011".parse().unwrap();
/// let b: BitString = "0011".parse().unwrap();
/// assert!(equal_range(&a, &b, 0, 3));
/// assert!(!equal_range(&a, &b, 0, 4));
/// assert!(!equal_range(&a, &b, 2, 3));
/// ```
pub fn equal_range(a: &BitString, b: &BitString, offset: usize, count: usize) -> bool {
    if a.check_range(offset, count).is_err() || b.check_range(offset, count).is_err() {
        return false;
    }
    WordSpans::new(offset, count).all(|(w, mask)| (a.words[w] ^ b.words[w]) & mask == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(offset: usize, count: usize) -> Vec<(usize, Word)> {
        WordSpans::new(offset, count).collect()
    }

    #[test]
    fn test_spans_empty() {
        assert!(spans(0, 0).is_empty());
        assert!(spans(64, 0).is_empty());
    }

    #[test]
    fn test_spans_single_word() {
        assert_eq!(spans(2, 3), vec![(0, 0b11100)]);
        assert_eq!(spans(0, 64), vec![(0, WORD_MAX)]);
        assert_eq!(spans(64, 1), vec![(1, 1)]);
        assert_eq!(spans(63, 1), vec![(0, 1 << 63)]);
    }

    #[test]
    fn test_spans_multi_word() {
        assert_eq!(spans(60, 8), vec![(0, high_mask(60)), (1, low_mask(4))]);
        assert_eq!(
            spans(60, 136),
            vec![(0, high_mask(60)), (1, WORD_MAX), (2, WORD_MAX), (3, low_mask(4))]
        );
        assert_eq!(spans(0, 128), vec![(0, WORD_MAX), (1, WORD_MAX)]);
        assert_eq!(WordSpans::new(10, 300).len(), 5);
    }

    #[test]
    fn test_range_operations() {
        let mut bs = BitString::new(32);
        bs.set_range(2, 8);
        assert_eq!(bs.count_ones(), 8);
        assert_eq!(bs.to_string(), "00000000000000000000001111111100");

        bs.clear_range(4, 4);
        assert_eq!(bs.count_ones(), 4);
        assert_eq!(bs.to_string(), "00000000000000000000001100001100");

        bs.flip_range(2, 8);
        assert_eq!(bs.to_string(), "00000000000000000000000011110000");
    }

    #[test]
    fn test_range_spanning_words() {
        let mut bs = BitString::new(200);
        bs.set_range(30, 150);
        assert_eq!(bs.count_ones(), 150);
        assert_eq!(bs.trailing_zeros(), 30);
        assert_eq!(bs.leading_zeros(), 20);

        bs.clear_range(63, 66);
        assert_eq!(bs.count_ones(), 84);
        assert!(bs.get_bit(62));
        assert!(!bs.get_bit(63));
        assert!(!bs.get_bit(128));
        assert!(bs.get_bit(129));
    }

    #[test]
    fn test_empty_range_is_noop() {
        let mut bs = BitString::new(64);
        bs.set_range(64, 0);
        bs.flip_range(0, 0);
        assert_eq!(bs.count_ones(), 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_range_out_of_bounds() {
        let mut bs = BitString::new(10);
        bs.set_range(5, 6);
    }

    #[test]
    fn test_copy_range_across_words() {
        let mut bs = BitString::new(300);
        bs.set_range(100, 150);
        let slice = bs.copy_range(90, 170);
        assert_eq!(slice.len(), 170);
        assert_eq!(slice.count_ones(), 150);
        assert_eq!(slice.trailing_zeros(), 10);
        assert_eq!(slice.leading_zeros(), 10);
    }

    #[test]
    fn test_swap_range_example() {
        let mut a: BitString = "111".parse().unwrap();
        let mut b: BitString = "000".parse().unwrap();
        swap_range(&mut a, &mut b, 2, 1);
        assert_eq!(a.to_string(), "011");
        assert_eq!(b.to_string(), "100");
    }

    #[test]
    fn test_swap_range_rejects_before_mutating() {
        let mut a = BitString::new(100);
        let mut b = BitString::new(50);
        a.set_all();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            swap_range(&mut a, &mut b, 40, 20);
        }));
        assert!(result.is_err());
        assert_eq!(a.count_ones(), 100);
        assert_eq!(b.count_ones(), 0);
    }

    #[test]
    fn test_equal_range_outside() {
        let a = BitString::new(10);
        let b = BitString::new(20);
        assert!(equal_range(&a, &b, 0, 10));
        assert!(!equal_range(&a, &b, 5, 10));
        assert!(equal_range(&a, &b, 10, 0));
    }
}
