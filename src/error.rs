//! Error types for bitstring operations.
//!
//! This module provides a unified error type for all operations in the crate,
//! using the `thiserror` crate for ergonomic error handling.
//!
//! Two families of errors exist. Contract violations (an index, range or
//! integer width that does not fit the bitstring) are programming errors: the
//! panicking accessors raise them with the variant's message, and the
//! `check_*` methods return them for callers that want to test first. Format
//! errors come from parsing text and are always returned, never raised.

use thiserror::Error;

/// The main error type for bitstring operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BitStringError {
    /// Bit index outside `[0, length)`
    #[error("bit index {index} out of range (length: {length})")]
    IndexOutOfRange {
        /// The index that was accessed
        index: usize,
        /// The valid length
        length: usize,
    },

    /// Bit range `[offset, offset + count)` not contained in `[0, length)`
    #[error("bit range [{offset}, {offset}+{count}) out of range (length: {length})")]
    RangeOutOfBounds {
        /// First bit of the range
        offset: usize,
        /// Number of bits in the range
        count: usize,
        /// The valid length
        length: usize,
    },

    /// Integer width outside `1..=max`
    #[error("integer width {width} not supported, expected 1 to {max} bits")]
    InvalidWidth {
        /// The requested width
        width: usize,
        /// Largest supported width
        max: usize,
    },

    /// Character other than '0' or '1' in a textual bitstring
    #[error("illegal character at position {position}: {character:?}")]
    InvalidCharacter {
        /// 0-based character position in the text
        position: usize,
        /// The offending character
        character: char,
    },
}

/// A specialized `Result` type for bitstring operations.
///
/// This is a type alias for `Result<T, BitStringError>`.
pub type Result<T> = std::result::Result<T, BitStringError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BitStringError::IndexOutOfRange {
            index: 70,
            length: 69,
        };
        assert_eq!(err.to_string(), "bit index 70 out of range (length: 69)");

        let err = BitStringError::RangeOutOfBounds {
            offset: 4,
            count: 8,
            length: 10,
        };
        assert_eq!(err.to_string(), "bit range [4, 4+8) out of range (length: 10)");

        let err = BitStringError::InvalidWidth { width: 65, max: 64 };
        assert_eq!(
            err.to_string(),
            "integer width 65 not supported, expected 1 to 64 bits"
        );

        let err = BitStringError::InvalidCharacter {
            position: 2,
            character: '2',
        };
        assert_eq!(err.to_string(), "illegal character at position 2: '2'");
    }

    #[test]
    fn test_result_type() {
        fn returns_result() -> Result<usize> {
            Ok(42)
        }

        assert_eq!(returns_result().unwrap(), 42);
    }
}
