// SPDX-License-Identifier: Apache-2.0

use alloc::string::String;
use alloc::vec::Vec;

use crate::escape_processor::{EscapeProcessor, Unescaped};
use crate::parse_error::ParseError;
use crate::slice_input_buffer::SliceInputBuffer;

/// String content borrowed from the input, escapes still in place.
///
/// Unescaping is deferred so the mapper can copy straight into a bounded
/// destination and keys can be compared without allocating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawString<'a> {
    raw: &'a [u8],
}

impl<'a> RawString<'a> {
    /// The content between the quotes, exactly as written. The scanner has
    /// already checked it is UTF-8.
    pub fn as_raw_str(&self) -> &'a str {
        core::str::from_utf8(self.raw).unwrap_or_default()
    }

    pub fn unescaped(&self) -> Unescaped<'a> {
        EscapeProcessor::unescape(self.raw)
    }

    /// Compares the unescaped content with `key`.
    pub fn matches(&self, key: &str) -> bool {
        self.unescaped().eq(key.bytes())
    }

    /// Unescapes into an owned string.
    pub fn to_unescaped_string(&self) -> Result<String, ParseError> {
        let bytes: Vec<u8> = self.unescaped().collect();
        String::from_utf8(bytes).map_err(|e| ParseError::InvalidUtf8(e.utf8_error()))
    }
}

/// Scans a string literal starting at the opening quote.
///
/// The cursor is left just past the closing quote. The content must be valid
/// UTF-8.
pub fn scan_string<'a>(buffer: &mut SliceInputBuffer<'a>) -> Result<RawString<'a>, ParseError> {
    let quote_pos = buffer.current_pos();
    match buffer.peek() {
        Some(b'"') => buffer.advance(1),
        Some(found) => {
            return Err(ParseError::UnexpectedByte {
                expected: "'\"'",
                found,
                pos: quote_pos,
            })
        }
        None => return Err(ParseError::UnexpectedEnd { expected: "'\"'" }),
    }

    let start = buffer.current_pos();
    let mut escaped = false;
    let mut len = None;
    for (idx, &byte) in buffer.remaining().iter().enumerate() {
        if escaped {
            escaped = false;
        } else if byte == b'\\' {
            escaped = true;
        } else if byte == b'"' {
            len = Some(idx);
            break;
        }
    }

    let len = len.ok_or(ParseError::UnexpectedEnd {
        expected: "closing quote",
    })?;
    let raw = buffer.slice(start, start + len)?;
    core::str::from_utf8(raw)?;
    // Content plus the closing quote
    buffer.advance(len + 1);
    Ok(RawString { raw })
}
