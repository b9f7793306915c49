// SPDX-License-Identifier: Apache-2.0

use crate::slice_input_buffer::OutOfBounds;

/// Errors that can occur while reading JSON text.
///
/// Positions are byte offsets into the input.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Input ended where more was required.
    UnexpectedEnd {
        /// What the parser was looking for.
        expected: &'static str,
    },
    /// A byte that cannot start or continue the current production.
    UnexpectedByte {
        /// What the parser was looking for.
        expected: &'static str,
        /// The offending byte.
        found: u8,
        /// Offset of the offending byte.
        pos: usize,
    },
    /// A number lexeme does not follow the JSON number grammar.
    InvalidNumber {
        /// Offset where the lexeme starts.
        pos: usize,
    },
    /// A number lexeme is well formed but its value is not finite.
    NumericOverflow {
        /// Offset where the lexeme starts.
        pos: usize,
    },
    /// A string slice was not valid UTF-8.
    InvalidUtf8(core::str::Utf8Error),
    /// Something other than whitespace follows the top-level value.
    TrailingCharacters {
        /// Offset of the first trailing byte.
        pos: usize,
    },
    /// Containers are nested deeper than the configured limit.
    DepthLimitExceeded {
        /// The configured limit.
        limit: usize,
    },
    /// The input cursor was asked for a range outside the input.
    InvalidSliceBounds,
}

impl From<OutOfBounds> for ParseError {
    fn from(_: OutOfBounds) -> Self {
        ParseError::InvalidSliceBounds
    }
}

impl From<core::str::Utf8Error> for ParseError {
    fn from(err: core::str::Utf8Error) -> Self {
        ParseError::InvalidUtf8(err)
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::UnexpectedEnd { expected } => {
                write!(f, "unexpected end of input, expected {expected}")
            }
            ParseError::UnexpectedByte {
                expected,
                found,
                pos,
            } => {
                if found.is_ascii_graphic() {
                    write!(
                        f,
                        "expected {expected} at byte {pos}, found '{}'",
                        *found as char
                    )
                } else {
                    write!(f, "expected {expected} at byte {pos}, found 0x{found:02x}")
                }
            }
            ParseError::InvalidNumber { pos } => write!(f, "invalid number at byte {pos}"),
            ParseError::NumericOverflow { pos } => {
                write!(f, "number at byte {pos} is out of range")
            }
            ParseError::InvalidUtf8(e) => write!(f, "invalid UTF-8: {e}"),
            ParseError::TrailingCharacters { pos } => {
                write!(f, "trailing characters at byte {pos}")
            }
            ParseError::DepthLimitExceeded { limit } => {
                write!(f, "nesting deeper than {limit} levels")
            }
            ParseError::InvalidSliceBounds => f.write_str("invalid slice bounds in input buffer"),
        }
    }
}
