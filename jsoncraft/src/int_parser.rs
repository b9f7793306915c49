// SPDX-License-Identifier: Apache-2.0

//! Exact base-10 conversion of integral JSON number lexemes.
//!
//! Integer destinations in the mapper are filled from the lexeme directly so
//! that values above 2^53 survive without a round trip through `f64`.

/// The integer type written into integer destinations.
#[cfg(feature = "int32")]
pub type Integer = i32;
/// The integer type written into integer destinations.
#[cfg(feature = "int64")]
pub type Integer = i64;

/// Why an integral lexeme could not be converted.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum IntLexemeError {
    /// No digits at all.
    Empty,
    /// Only a minus sign.
    SignOnly,
    /// A byte outside `0-9` was found.
    InvalidDigit,
    /// The value does not fit into the destination type.
    Overflow,
}

macro_rules! define_lexeme_parser {
    ($fn_name:ident, $int_ty:ty) => {
        /// Converts an integral JSON lexeme (`-?[0-9]+`) into a(n) `
        #[doc = stringify!($int_ty)]
        /// `. Never panics.
        pub const fn $fn_name(src: &[u8]) -> Result<$int_ty, IntLexemeError> {
            let (is_negative, mut digits) = match src {
                [] => return Err(IntLexemeError::Empty),
                [b'-', rest @ ..] => (true, rest),
                _ => (false, src),
            };

            if digits.is_empty() {
                return Err(IntLexemeError::SignOnly);
            }

            let mut result: $int_ty = 0;

            while let Some((&byte, rest)) = digits.split_first() {
                let digit = match byte {
                    b'0'..=b'9' => (byte - b'0') as $int_ty,
                    _ => return Err(IntLexemeError::InvalidDigit),
                };

                result = match result.checked_mul(10) {
                    Some(val) => val,
                    None => return Err(IntLexemeError::Overflow),
                };

                // Accumulating negatively reaches MIN without overflowing.
                result = if is_negative {
                    match result.checked_sub(digit) {
                        Some(val) => val,
                        None => return Err(IntLexemeError::Overflow),
                    }
                } else {
                    match result.checked_add(digit) {
                        Some(val) => val,
                        None => return Err(IntLexemeError::Overflow),
                    }
                };

                digits = rest;
            }

            Ok(result)
        }
    };
}

#[cfg(feature = "int32")]
define_lexeme_parser!(integer_from_lexeme, i32);
#[cfg(feature = "int64")]
define_lexeme_parser!(integer_from_lexeme, i64);
