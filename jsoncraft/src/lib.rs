// SPDX-License-Identifier: Apache-2.0

//! A compact JSON toolkit with two front ends over one grammar:
//!
//! * [`parse`] builds a [`Value`] tree, which [`stringify`] turns back into
//!   text and [`get`] / [`get_path`] look into.
//! * [`parse_with_descriptors`] skips the tree and writes values straight
//!   into caller-owned destinations described by [`Descriptor`]s.
//!
//! Both front ends are strict: any grammar violation fails the call with a
//! positioned [`ParseError`]. String escapes are shallow, a backslash simply
//! makes the following byte literal.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Compile-time configuration validation
mod config_check;

mod slice_input_buffer;

mod parse_error;
pub use parse_error::ParseError;

mod int_parser;
pub use int_parser::Integer;

mod json_number;
pub use json_number::{IntegerOutOfRange, JsonNumber};

mod number_parser;

mod escape_processor;

mod json_string;

mod parser_core;
pub use parser_core::{ParseOptions, DEFAULT_MAX_DEPTH};

mod value;
pub use value::{Value, ValueKind};

mod value_parser;
pub use value_parser::ValueParser;

mod stringify;
pub use stringify::stringify;

mod path;
pub use path::{get, get_into, get_path, Lookup, LookupError};

mod descriptor;
pub use descriptor::{
    terminated_bytes, terminated_str, ArrayTarget, Descriptor, Kind, Slots, Target,
};

mod map_error;
pub use map_error::MapError;

mod mapper;
pub use mapper::{parse_with_descriptors, Mapper};

/// Parses a complete JSON document into a value tree.
///
/// # Example
/// ```
/// use jsoncraft::{parse, Value};
/// let value = parse(r#"{"ok": true}"#).unwrap();
/// assert_eq!(value.get("ok"), Some(&Value::Boolean(true)));
/// assert!(parse(r#"{"ok": true"#).is_err());
/// ```
pub fn parse(input: &str) -> Result<Value, ParseError> {
    parse_slice(input.as_bytes())
}

/// Parses a complete JSON document from bytes; string content must be UTF-8.
pub fn parse_slice(input: &[u8]) -> Result<Value, ParseError> {
    ValueParser::new_from_slice(input).parse_document()
}
