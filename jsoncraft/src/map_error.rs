// SPDX-License-Identifier: Apache-2.0

use alloc::string::String;

use crate::descriptor::Kind;
use crate::parse_error::ParseError;
use crate::value::ValueKind;

/// Why a mapping call failed.
///
/// `field` is a dotted path with indices (`address.street`, `tags[1]`); it
/// is empty when the problem is in the top-level object itself. Fields
/// written before the failure keep their new contents.
#[derive(Debug, Clone, PartialEq)]
pub enum MapError {
    /// The text is not well-formed JSON.
    Syntax { field: String, error: ParseError },
    /// A required key is absent.
    MissingField { field: String },
    /// The JSON value cannot fill the destination.
    TypeMismatch {
        field: String,
        expected: Kind,
        found: ValueKind,
    },
    /// A number does not fit the integer destination.
    OutOfRange { field: String },
}

impl MapError {
    /// The field the error is about; empty for the top-level object.
    pub fn field(&self) -> &str {
        match self {
            MapError::Syntax { field, .. }
            | MapError::MissingField { field }
            | MapError::TypeMismatch { field, .. }
            | MapError::OutOfRange { field } => field,
        }
    }
}

impl core::fmt::Display for MapError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MapError::Syntax { field, error } if field.is_empty() => {
                write!(f, "syntax error: {error}")
            }
            MapError::Syntax { field, error } => {
                write!(f, "syntax error in field '{field}': {error}")
            }
            MapError::MissingField { field } => write!(f, "missing required field '{field}'"),
            MapError::TypeMismatch {
                field,
                expected,
                found,
            } => write!(f, "field '{field}' expects {expected}, found {found}"),
            MapError::OutOfRange { field } => {
                write!(f, "field '{field}' is out of range for an integer")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_field() {
        let error = MapError::MissingField {
            field: "name".into(),
        };
        assert_eq!(error.to_string(), "missing required field 'name'");
        assert_eq!(error.field(), "name");

        let error = MapError::TypeMismatch {
            field: "age".into(),
            expected: Kind::Integer,
            found: ValueKind::String,
        };
        assert_eq!(error.to_string(), "field 'age' expects integer, found string");

        let error = MapError::OutOfRange {
            field: "scores[1]".into(),
        };
        assert_eq!(
            error.to_string(),
            "field 'scores[1]' is out of range for an integer"
        );
    }

    #[test]
    fn test_syntax_message_with_and_without_field() {
        let error = MapError::Syntax {
            field: String::new(),
            error: ParseError::TrailingCharacters { pos: 4 },
        };
        assert_eq!(error.to_string(), "syntax error: trailing characters at byte 4");

        let error = MapError::Syntax {
            field: "address".into(),
            error: ParseError::UnexpectedEnd {
                expected: "',' or '}'",
            },
        };
        assert_eq!(
            error.to_string(),
            "syntax error in field 'address': unexpected end of input, expected ',' or '}'"
        );
    }
}
