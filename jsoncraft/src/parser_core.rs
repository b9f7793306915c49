// SPDX-License-Identifier: Apache-2.0

//! Grammar core shared by the tree parser and the descriptor mapper.
//!
//! `ParserCore` owns the cursor and the nesting depth, and knows how every
//! production starts and how containers are delimited. The two front ends
//! only decide what to do with each value: build a node, or write it into a
//! destination.

use log::trace;

use crate::json_string::{scan_string, RawString};
use crate::number_parser::scan_number;
use crate::parse_error::ParseError;
use crate::slice_input_buffer::SliceInputBuffer;
use crate::value::ValueKind;
use crate::JsonNumber;

/// Default limit on container nesting.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Runtime options shared by both front ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Deepest allowed container nesting; the top-level container is depth 1.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// The two container productions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    Object,
    Array,
}

impl Container {
    fn open(self) -> u8 {
        match self {
            Container::Object => b'{',
            Container::Array => b'[',
        }
    }

    fn close(self) -> u8 {
        match self {
            Container::Object => b'}',
            Container::Array => b']',
        }
    }

    fn separator_expectation(self) -> &'static str {
        match self {
            Container::Object => "',' or '}'",
            Container::Array => "',' or ']'",
        }
    }
}

pub struct ParserCore<'a> {
    buffer: SliceInputBuffer<'a>,
    depth: usize,
    options: ParseOptions,
}

impl<'a> ParserCore<'a> {
    pub fn new(input: &'a [u8], options: ParseOptions) -> Self {
        Self {
            buffer: SliceInputBuffer::new(input),
            depth: 0,
            options,
        }
    }

    pub fn position(&self) -> usize {
        self.buffer.current_pos()
    }

    fn unexpected(&self, expected: &'static str) -> ParseError {
        match self.buffer.peek() {
            Some(found) => ParseError::UnexpectedByte {
                expected,
                found,
                pos: self.buffer.current_pos(),
            },
            None => ParseError::UnexpectedEnd { expected },
        }
    }

    /// Skips whitespace and reports which production the next value uses,
    /// without consuming it.
    pub fn peek_kind(&mut self) -> Result<ValueKind, ParseError> {
        self.buffer.skip_whitespace();
        match self.buffer.peek() {
            Some(b'{') => Ok(ValueKind::Object),
            Some(b'[') => Ok(ValueKind::Array),
            Some(b'"') => Ok(ValueKind::String),
            Some(b'-' | b'0'..=b'9') => Ok(ValueKind::Number),
            Some(b't' | b'f') => Ok(ValueKind::Boolean),
            Some(b'n') => Ok(ValueKind::Null),
            _ => Err(self.unexpected("a value")),
        }
    }

    pub fn string(&mut self) -> Result<RawString<'a>, ParseError> {
        self.buffer.skip_whitespace();
        scan_string(&mut self.buffer)
    }

    pub fn number(&mut self) -> Result<JsonNumber<'a>, ParseError> {
        self.buffer.skip_whitespace();
        scan_number(&mut self.buffer)
    }

    pub fn boolean(&mut self) -> Result<bool, ParseError> {
        self.buffer.skip_whitespace();
        match self.buffer.peek() {
            Some(b't') => self.literal(b"true", "'true'").map(|_| true),
            _ => self.literal(b"false", "'false'").map(|_| false),
        }
    }

    pub fn null(&mut self) -> Result<(), ParseError> {
        self.buffer.skip_whitespace();
        self.literal(b"null", "'null'")
    }

    /// Matches `word` byte by byte, pointing errors at the first mismatch.
    fn literal(&mut self, word: &[u8], expected: &'static str) -> Result<(), ParseError> {
        for &want in word {
            match self.buffer.peek() {
                Some(found) if found == want => self.buffer.advance(1),
                _ => return Err(self.unexpected(expected)),
            }
        }
        Ok(())
    }

    /// Consumes the opening delimiter and reports whether the container has
    /// any members (an immediately following close is consumed too).
    pub fn begin(&mut self, container: Container) -> Result<bool, ParseError> {
        self.buffer.skip_whitespace();
        if self.buffer.peek() != Some(container.open()) {
            return Err(self.unexpected(match container {
                Container::Object => "'{'",
                Container::Array => "'['",
            }));
        }
        self.buffer.advance(1);

        self.depth += 1;
        if self.depth > self.options.max_depth {
            return Err(ParseError::DepthLimitExceeded {
                limit: self.options.max_depth,
            });
        }
        trace!(
            "enter {:?} at byte {}, depth {}",
            container,
            self.buffer.current_pos() - 1,
            self.depth
        );

        self.buffer.skip_whitespace();
        if self.buffer.peek() == Some(container.close()) {
            self.buffer.advance(1);
            self.depth -= 1;
            return Ok(false);
        }
        Ok(true)
    }

    /// After a member: consumes `,` (another member follows, returns true) or
    /// the closing delimiter (returns false).
    pub fn next_member(&mut self, container: Container) -> Result<bool, ParseError> {
        self.buffer.skip_whitespace();
        match self.buffer.peek() {
            Some(b',') => {
                self.buffer.advance(1);
                Ok(true)
            }
            Some(byte) if byte == container.close() => {
                self.buffer.advance(1);
                self.depth -= 1;
                Ok(false)
            }
            _ => Err(self.unexpected(container.separator_expectation())),
        }
    }

    /// Reads `"key" :` and leaves the cursor at the member's value.
    pub fn object_key(&mut self) -> Result<RawString<'a>, ParseError> {
        self.buffer.skip_whitespace();
        if self.buffer.peek() != Some(b'"') {
            return Err(self.unexpected("a string key"));
        }
        let key = scan_string(&mut self.buffer)?;
        self.buffer.skip_whitespace();
        if self.buffer.peek() != Some(b':') {
            return Err(self.unexpected("':'"));
        }
        self.buffer.advance(1);
        Ok(key)
    }

    /// Validates and discards one complete value.
    pub fn skip_value(&mut self) -> Result<(), ParseError> {
        match self.peek_kind()? {
            ValueKind::Null => self.null(),
            ValueKind::Boolean => self.boolean().map(|_| ()),
            ValueKind::Number => self.number().map(|_| ()),
            ValueKind::String => self.string().map(|_| ()),
            ValueKind::Array => {
                let mut more = self.begin(Container::Array)?;
                while more {
                    self.skip_value()?;
                    more = self.next_member(Container::Array)?;
                }
                Ok(())
            }
            ValueKind::Object => {
                let mut more = self.begin(Container::Object)?;
                while more {
                    self.object_key()?;
                    self.skip_value()?;
                    more = self.next_member(Container::Object)?;
                }
                Ok(())
            }
        }
    }

    /// Requires that only whitespace remains.
    pub fn finish(&mut self) -> Result<(), ParseError> {
        self.buffer.skip_whitespace();
        if self.buffer.is_at_end() {
            Ok(())
        } else {
            Err(ParseError::TrailingCharacters {
                pos: self.buffer.current_pos(),
            })
        }
    }
}
