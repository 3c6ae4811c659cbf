//! Bitstring - Fixed-Length Bit Strings
//!
//! A bitstring is a fixed number of bits packed into 64-bit words, with
//! bit-level access, arbitrary-width integer access at any bit offset, and
//! whole-string operations that work a word at a time.
//!
//! # Key Characteristics
//!
//! - Length fixed at construction, storage is `ceil(len / 64)` words
//! - Big-endian text form: the leftmost character is the highest bit
//! - Integers of 1 to 64 bits read and written across word boundaries
//! - Word-level range, counting, reversal and rotation
//!
//! # Architecture
//!
//! - **bitops**: word offsets, bit offsets and mask arithmetic
//! - **bitstring**: storage, single-bit ops, counts, reverse and rotate
//! - **range**: set/clear/flip/copy/swap/compare of bit ranges
//! - **codec**: unsigned, signed and Gray-coded integers
//! - **convert**: text and `num-bigint` interop
//!
//! # Examples
//!
//! ## Basic BitString Usage
//!
//! ```
//! use bitstring::BitString;
//!
//! let mut bs: BitString = "101001".parse().unwrap();
//! assert_eq!(bs.len(), 6);
//!
//! bs.set_bit(1);
//! assert_eq!(bs.to_string(), "101011");
//! assert_eq!(bs.count_ones(), 4);
//! assert_eq!(bs.trailing_ones(), 2);
//!
//! bs.rotate_right(2);
//! assert_eq!(bs.to_string(), "111010");
//! ```
//!
//! ## Integers at Arbitrary Offsets
//!
//! ```
//! use bitstring::BitString;
//!
//! let mut bs = BitString::new(128);
//! bs.set_u32(50, 0xDEAD_BEEF); // straddles words 0 and 1
//! assert_eq!(bs.get_u32(50), 0xDEAD_BEEF);
//! assert_eq!(bs.get_uint(50, 12), 0xEEF);
//! ```
//!
//! ## Random Bitstrings
//!
//! ```
//! use bitstring::BitString;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let bs = BitString::random(1000, &mut rng);
//! assert!(bs.count_ones() > 400 && bs.count_ones() < 600);
//! ```
//!
//! # Safety
//!
//! The crate contains no `unsafe` code. Out-of-range indices and ranges and
//! unsupported integer widths panic before any bit is modified; the
//! `check_*` methods report the same conditions as [`BitStringError`]
//! values. Parsing never panics.

pub mod bitops;
pub mod bitstring;
pub mod codec;
pub mod convert;
pub mod error;
pub mod range;

// Re-exports for convenient access
pub use bitops::{Word, BITS_PER_WORD};
pub use bitstring::{copy_into, BitString};
pub use error::{BitStringError, Result};
pub use range::{equal_range, swap_range};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = "Bitstring";

/// Get version string
pub fn version() -> String {
    format!("{} v{}", NAME, VERSION)
}
