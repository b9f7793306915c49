// SPDX-License-Identifier: Apache-2.0

use crate::parse_error::ParseError;
use crate::slice_input_buffer::SliceInputBuffer;
use crate::JsonNumber;

/// Consumes a run of ASCII digits, returning how many were consumed.
fn consume_digits(buffer: &mut SliceInputBuffer<'_>) -> usize {
    let count = buffer
        .remaining()
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    buffer.advance(count);
    count
}

/// Scans one number lexeme at the cursor.
///
/// The lexeme follows the JSON grammar
/// `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?` and the cursor is left
/// exactly past it. Whatever follows (a delimiter, or garbage) is for the
/// caller to judge.
pub fn scan_number<'a>(buffer: &mut SliceInputBuffer<'a>) -> Result<JsonNumber<'a>, ParseError> {
    let start = buffer.current_pos();

    if buffer.peek() == Some(b'-') {
        buffer.advance(1);
    }

    match buffer.peek() {
        Some(b'0') => buffer.advance(1),
        Some(b'1'..=b'9') => {
            consume_digits(buffer);
        }
        _ => return Err(ParseError::InvalidNumber { pos: start }),
    }

    if buffer.peek() == Some(b'.') {
        buffer.advance(1);
        if consume_digits(buffer) == 0 {
            return Err(ParseError::InvalidNumber { pos: start });
        }
    }

    if let Some(b'e' | b'E') = buffer.peek() {
        buffer.advance(1);
        if let Some(b'+' | b'-') = buffer.peek() {
            buffer.advance(1);
        }
        if consume_digits(buffer) == 0 {
            return Err(ParseError::InvalidNumber { pos: start });
        }
    }

    let lexeme = buffer.slice(start, buffer.current_pos())?;
    JsonNumber::from_slice(lexeme, start)
}
