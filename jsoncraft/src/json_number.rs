// SPDX-License-Identifier: Apache-2.0

use core::str::FromStr;

use crate::int_parser::{integer_from_lexeme, IntLexemeError, Integer};
use crate::ParseError;

/// A scanned JSON number: the exact lexeme plus its `f64` value.
///
/// The grammar does not distinguish integers from floats; the lexeme is kept
/// so integer destinations can be filled exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsonNumber<'a> {
    raw: &'a str,
    value: f64,
}

/// Why a number could not be stored into an integer destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerOutOfRange;

impl<'a> JsonNumber<'a> {
    /// Builds a JsonNumber from a lexeme already validated by the scanner.
    ///
    /// `pos` is the lexeme's offset, used for error reporting.
    pub fn from_slice(bytes: &'a [u8], pos: usize) -> Result<Self, ParseError> {
        let raw = core::str::from_utf8(bytes)?;
        let value = f64::from_str(raw).map_err(|_| ParseError::InvalidNumber { pos })?;
        if !value.is_finite() {
            return Err(ParseError::NumericOverflow { pos });
        }
        Ok(JsonNumber { raw, value })
    }

    /// The exact lexeme from the input.
    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    pub fn as_f64(&self) -> f64 {
        self.value
    }

    /// True when the lexeme has neither a fraction nor an exponent.
    pub fn is_integer(&self) -> bool {
        !self.raw.bytes().any(|b| matches!(b, b'.' | b'e' | b'E'))
    }

    /// Converts to the configured integer type.
    ///
    /// Integral lexemes convert exactly; anything else is truncated toward
    /// zero. Values outside the integer range are rejected.
    pub fn to_integer(&self) -> Result<Integer, IntegerOutOfRange> {
        if self.is_integer() {
            return match integer_from_lexeme(self.raw.as_bytes()) {
                Ok(value) => Ok(value),
                Err(IntLexemeError::Overflow) => Err(IntegerOutOfRange),
                // The scanner only hands over well-formed lexemes
                Err(_) => truncate(self.value),
            };
        }
        truncate(self.value)
    }
}

/// Truncates toward zero, rejecting values the integer type cannot hold.
fn truncate(value: f64) -> Result<Integer, IntegerOutOfRange> {
    let lower = Integer::MIN as f64;
    // -MIN is exactly 2^(bits-1), the first value past MAX
    let upper = -(Integer::MIN as f64);
    if value >= lower && value < upper {
        Ok(value as Integer)
    } else {
        Err(IntegerOutOfRange)
    }
}

impl AsRef<str> for JsonNumber<'_> {
    fn as_ref(&self) -> &str {
        self.raw
    }
}

impl core::fmt::Display for JsonNumber<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.raw)
    }
}
