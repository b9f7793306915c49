// SPDX-License-Identifier: Apache-2.0

//! Single-segment lookup into a value tree.
//!
//! One accessor serves objects and arrays: array indices are passed as
//! decimal text, so a heterogeneous path like `weather` / `0` /
//! `description` is just a sequence of segments.

use alloc::string::String;

use crate::stringify::write_number;
use crate::value::{Value, ValueKind};

/// The result of a successful lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<'v> {
    /// The match is an object or array; look further into it.
    Node(&'v Value),
    /// The match is a scalar, rendered as text.
    Scalar(String),
}

impl<'v> Lookup<'v> {
    pub fn node(&self) -> Option<&'v Value> {
        match self {
            Lookup::Node(v) => Some(v),
            Lookup::Scalar(_) => None,
        }
    }

    pub fn scalar(&self) -> Option<&str> {
        match self {
            Lookup::Node(_) => None,
            Lookup::Scalar(s) => Some(s),
        }
    }
}

/// Errors returned by lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No object member has the requested key.
    KeyNotFound(String),
    /// The segment is not a valid index for the array.
    IndexOutOfBounds(String),
    /// The node being indexed is a scalar.
    NotAContainer(ValueKind),
}

impl core::fmt::Display for LookupError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LookupError::KeyNotFound(key) => write!(f, "key not found: {key:?}"),
            LookupError::IndexOutOfBounds(segment) => {
                write!(f, "index out of bounds: {segment:?}")
            }
            LookupError::NotAContainer(kind) => {
                write!(f, "root is neither object nor array (found {kind})")
            }
        }
    }
}

/// Renders a scalar the way lookups report it: strings without quotes,
/// numbers in the fixed six-decimal format.
fn render_scalar(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Boolean(true) => out.push_str("true"),
        Value::Boolean(false) => out.push_str("false"),
        Value::Number(n) => {
            // Writing into a String cannot fail
            let _ = write_number(out, *n);
        }
        Value::String(s) => out.push_str(s),
        Value::Array(_) | Value::Object(_) => {}
    }
}

/// Parses an array index segment: ASCII digits only.
fn parse_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

fn find<'v>(node: &'v Value, segment: &str) -> Result<&'v Value, LookupError> {
    match node {
        Value::Object(members) => members
            .iter()
            .find(|(key, _)| key == segment)
            .map(|(_, value)| value)
            .ok_or_else(|| LookupError::KeyNotFound(segment.into())),
        Value::Array(items) => parse_index(segment)
            .and_then(|idx| items.get(idx))
            .ok_or_else(|| LookupError::IndexOutOfBounds(segment.into())),
        other => Err(LookupError::NotAContainer(other.kind())),
    }
}

fn into_lookup(found: &Value) -> Lookup<'_> {
    if found.is_container() {
        Lookup::Node(found)
    } else {
        let mut text = String::new();
        render_scalar(&mut text, found);
        Lookup::Scalar(text)
    }
}

/// Resolves one segment against `node`.
///
/// Objects match the first member whose key equals `segment` byte for byte;
/// arrays take `segment` as a decimal index. Containers come back as
/// [`Lookup::Node`] for further lookups, scalars as rendered text.
///
/// # Example
/// ```
/// use jsoncraft::{get, parse, Lookup};
/// let root = parse(r#"{"a": [1, 2, 3]}"#).unwrap();
/// let a = get(&root, "a").unwrap().node().unwrap();
/// assert_eq!(get(a, "1"), Ok(Lookup::Scalar("2.000000".into())));
/// ```
pub fn get<'v>(node: &'v Value, segment: &str) -> Result<Lookup<'v>, LookupError> {
    find(node, segment).map(into_lookup)
}

/// Like [`get`], but renders a scalar into a caller-supplied buffer.
///
/// `out` is cleared first. Returns the child when the match is a container,
/// `None` when it was a scalar (and `out` now holds its text).
pub fn get_into<'v>(
    node: &'v Value,
    segment: &str,
    out: &mut String,
) -> Result<Option<&'v Value>, LookupError> {
    out.clear();
    let found = find(node, segment)?;
    if found.is_container() {
        Ok(Some(found))
    } else {
        render_scalar(out, found);
        Ok(None)
    }
}

/// Applies [`get`] for each segment in turn.
///
/// An empty path yields the root itself. A scalar reached before the last
/// segment makes the next step fail with [`LookupError::NotAContainer`].
pub fn get_path<'v, 's, I>(root: &'v Value, segments: I) -> Result<Lookup<'v>, LookupError>
where
    I: IntoIterator<Item = &'s str>,
{
    let mut current = root;
    for segment in segments {
        current = find(current, segment)?;
    }
    Ok(into_lookup(current))
}
