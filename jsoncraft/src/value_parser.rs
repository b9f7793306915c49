// SPDX-License-Identifier: Apache-2.0

use alloc::vec::Vec;

use crate::parse_error::ParseError;
use crate::parser_core::{Container, ParseOptions, ParserCore};
use crate::value::{Value, ValueKind};

/// A recursive-descent parser that builds [`Value`] trees.
///
/// [`parse`](crate::parse) covers the usual case of one document per input.
/// Use `ValueParser` directly to parse a value embedded at the start of a
/// larger input and find out where it ended.
pub struct ValueParser<'a> {
    core: ParserCore<'a>,
}

impl<'a> ValueParser<'a> {
    /// Creates a parser with default options.
    ///
    /// # Example
    /// ```
    /// use jsoncraft::ValueParser;
    /// let mut parser = ValueParser::new(r#"[1, 2] trailing"#);
    /// let value = parser.parse_value().unwrap();
    /// assert_eq!(value.as_array().map(|a| a.len()), Some(2));
    /// assert_eq!(parser.position(), 6);
    /// ```
    pub fn new(input: &'a str) -> Self {
        Self::new_from_slice(input.as_bytes())
    }

    /// Creates a parser over raw bytes; string content must still be UTF-8.
    pub fn new_from_slice(input: &'a [u8]) -> Self {
        Self::with_options(input, ParseOptions::default())
    }

    /// Creates a parser with explicit options.
    pub fn with_options(input: &'a [u8], options: ParseOptions) -> Self {
        Self {
            core: ParserCore::new(input, options),
        }
    }

    /// Byte offset just past everything consumed so far.
    pub fn position(&self) -> usize {
        self.core.position()
    }

    /// Parses one value at the cursor and leaves the cursor right after it.
    pub fn parse_value(&mut self) -> Result<Value, ParseError> {
        match self.core.peek_kind()? {
            ValueKind::Null => self.core.null().map(|_| Value::Null),
            ValueKind::Boolean => self.core.boolean().map(Value::Boolean),
            ValueKind::Number => self.core.number().map(|n| Value::Number(n.as_f64())),
            ValueKind::String => {
                let s = self.core.string()?;
                Ok(Value::String(s.to_unescaped_string()?))
            }
            ValueKind::Array => self.parse_array(),
            ValueKind::Object => self.parse_object(),
        }
    }

    fn parse_array(&mut self) -> Result<Value, ParseError> {
        let mut items = Vec::new();
        let mut more = self.core.begin(Container::Array)?;
        while more {
            items.push(self.parse_value()?);
            more = self.core.next_member(Container::Array)?;
        }
        Ok(Value::Array(items))
    }

    fn parse_object(&mut self) -> Result<Value, ParseError> {
        let mut members = Vec::new();
        let mut more = self.core.begin(Container::Object)?;
        while more {
            let key = self.core.object_key()?.to_unescaped_string()?;
            let value = self.parse_value()?;
            members.push((key, value));
            more = self.core.next_member(Container::Object)?;
        }
        Ok(Value::Object(members))
    }

    /// Parses a whole document: exactly one value, then only whitespace.
    pub fn parse_document(mut self) -> Result<Value, ParseError> {
        let value = self.parse_value()?;
        self.core.finish()?;
        Ok(value)
    }
}
