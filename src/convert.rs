//! Conversions between bitstrings, text and arbitrary-precision integers.
//!
//! The text form is big-endian: the first character is the most significant
//! bit (highest index) and the last character is bit 0. It is exactly
//! `len()` characters long, leading zeros included.
//!
//! Integer conversions use `num-bigint`. A bitstring built from an integer is
//! exactly as long as the integer's significant bits; converting back yields
//! the same value. Leading zero bits of a bitstring have no numeric weight, so
//! they do not survive a round trip through an integer.
//!
//! # Examples
//!
//! ```
//! use bitstring::BitString;
//! use num_bigint::BigUint;
//!
//! let bs: BitString = "100".parse().unwrap();
//! assert_eq!(bs.to_big_uint(), BigUint::from(4u32));
//!
//! let bs = BitString::from_big_uint(&BigUint::from(0b1011u32));
//! assert_eq!(bs.to_string(), "1011");
//! ```

use crate::bitops::{bit_idx, bit_mask, word_count, word_idx};
use crate::bitstring::BitString;
use crate::error::{BitStringError, Result};
use num_bigint::{BigInt, BigUint};
use std::fmt;
use std::str::FromStr;

impl BitString {
    /// Create a BitString holding the binary representation of `n`.
    ///
    /// The length is the number of significant bits of `n` (0 for zero).
    pub fn from_big_uint(n: &BigUint) -> Self {
        let length = n.bits() as usize;
        let words = n.to_u64_digits();
        debug_assert_eq!(words.len(), word_count(length));
        Self { words, length }
    }

    /// Create a BitString holding the binary representation of `|n|`.
    pub fn from_big_int(n: &BigInt) -> Self {
        Self::from_big_uint(n.magnitude())
    }

    /// Numeric value of the bitstring read in big-endian order.
    pub fn to_big_uint(&self) -> BigUint {
        let bytes: Vec<u8> = self.words.iter().flat_map(|w| w.to_le_bytes()).collect();
        BigUint::from_bytes_le(&bytes)
    }

    /// Numeric value of the bitstring as a non-negative `BigInt`.
    pub fn to_big_int(&self) -> BigInt {
        BigInt::from(self.to_big_uint())
    }

    fn write_bits_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = (0..self.length)
            .rev()
            .map(|b| {
                if self.words[word_idx(b)] & bit_mask(bit_idx(b)) != 0 {
                    '1'
                } else {
                    '0'
                }
            })
            .collect();
        f.pad(&text)
    }
}

impl From<&BigUint> for BitString {
    fn from(n: &BigUint) -> Self {
        Self::from_big_uint(n)
    }
}

impl From<&BitString> for BigUint {
    fn from(bs: &BitString) -> Self {
        bs.to_big_uint()
    }
}

impl FromStr for BitString {
    type Err = BitStringError;

    /// Parse a string of '0' and '1' characters in big-endian order.
    ///
    /// Any other character is rejected with its 0-based position.
    fn from_str(s: &str) -> Result<Self> {
        let n = s.chars().count();
        let mut bs = BitString::new(n);

        for (position, character) in s.chars().enumerate() {
            match character {
                '0' => {}
                '1' => {
                    let b = n - 1 - position;
                    bs.words[word_idx(b)] |= bit_mask(bit_idx(b));
                }
                _ => {
                    return Err(BitStringError::InvalidCharacter {
                        position,
                        character,
                    })
                }
            }
        }

        Ok(bs)
    }
}

impl fmt::Display for BitString {
    /// Big-endian text, most significant bit first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_bits_text(f)
    }
}

impl fmt::Binary for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_bits_text(f)
    }
}
