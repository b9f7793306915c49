// SPDX-License-Identifier: Apache-2.0

// Descriptor-driven mapping into caller-owned destinations

use jsoncraft::{
    parse_with_descriptors, terminated_str, ArrayTarget, Descriptor, Integer, Kind, MapError,
    Mapper, ParseError, ParseOptions, ValueKind,
};
use test_log::test;

const PERSON: &str = r#"{
    "name": "John",
    "age": 25,
    "is_student": true,
    "gpa": 3.80,
    "address": {
        "street": "Main St",
        "number": 123,
        "city": "New York"
    },
    "scores": [85, 92, 88, 95, 90],
    "tags": ["smart", "friendly", "active"]
}"#;

#[test]
fn test_flat_record() {
    let mut age: Integer = 0;
    let mut name = [0u8; 50];
    let mut is_student = false;
    let mut gpa = 0.0;
    {
        let mut fields = [
            Descriptor::integer("age", &mut age).required(),
            Descriptor::string("name", &mut name).required(),
            Descriptor::boolean("is_student", &mut is_student),
            Descriptor::double("gpa", &mut gpa),
        ];
        let json = r#"{"age":25,"name":"John","is_student":true,"gpa":3.8}"#;
        assert_eq!(parse_with_descriptors(json, &mut fields), Ok(()));
    }
    assert_eq!(age, 25);
    assert_eq!(terminated_str(&name), Some("John"));
    assert!(is_student);
    assert_eq!(gpa, 3.8);
}

#[test]
fn test_missing_required_field() {
    let mut name = [0u8; 50];
    let mut fields = [Descriptor::string("name", &mut name).required()];
    let error = parse_with_descriptors("{}", &mut fields).unwrap_err();
    assert_eq!(
        error,
        MapError::MissingField {
            field: "name".into()
        }
    );
    assert!(error.to_string().contains("name"));
}

#[test]
fn test_type_mismatch() {
    let mut age: Integer = 0;
    let mut fields = [Descriptor::integer("age", &mut age).required()];
    let error = parse_with_descriptors(r#"{"age":"not a number"}"#, &mut fields).unwrap_err();
    assert_eq!(
        error,
        MapError::TypeMismatch {
            field: "age".into(),
            expected: Kind::Integer,
            found: ValueKind::String,
        }
    );
    assert_eq!(error.field(), "age");
}

#[test]
fn test_full_person_record() {
    let mut name = [0u8; 50];
    let mut age: Integer = 0;
    let mut is_student = false;
    let mut gpa = 0.0;
    let mut street = [0u8; 100];
    let mut number: Integer = 0;
    let mut city = [0u8; 50];
    let mut scores: [Integer; 5] = [0; 5];
    let mut tags = [[0u8; 20]; 3];
    {
        let address = vec![
            Descriptor::string("street", &mut street).required(),
            Descriptor::integer("number", &mut number).required(),
            Descriptor::string("city", &mut city),
        ];
        let mut fields = [
            Descriptor::integer("age", &mut age).required(),
            Descriptor::string("name", &mut name).required(),
            Descriptor::boolean("is_student", &mut is_student),
            Descriptor::double("gpa", &mut gpa),
            Descriptor::object("address", address).required(),
            Descriptor::array("scores", ArrayTarget::integers(&mut scores)).required(),
            Descriptor::array("tags", ArrayTarget::strings(&mut tags)),
        ];
        assert_eq!(parse_with_descriptors(PERSON, &mut fields), Ok(()));
    }
    assert_eq!(terminated_str(&name), Some("John"));
    assert_eq!(age, 25);
    assert!(is_student);
    assert_eq!(gpa, 3.8);
    assert_eq!(terminated_str(&street), Some("Main St"));
    assert_eq!(number, 123);
    assert_eq!(terminated_str(&city), Some("New York"));
    assert_eq!(scores, [85, 92, 88, 95, 90]);
    let tags: Vec<_> = tags.iter().map(|t| terminated_str(t).unwrap()).collect();
    assert_eq!(tags, ["smart", "friendly", "active"]);
}

#[test]
fn test_trailing_comma_fails() {
    let mut name = [0u8; 50];
    let mut fields = [Descriptor::string("name", &mut name).required()];
    let error = parse_with_descriptors(r#"{"name": "John", }"#, &mut fields).unwrap_err();
    assert!(matches!(
        error,
        MapError::Syntax {
            error: ParseError::UnexpectedByte { found: b'}', .. },
            ..
        }
    ));
}

#[test]
fn test_unclosed_object_fails() {
    let mut name = [0u8; 50];
    let mut fields = [Descriptor::string("name", &mut name).required()];
    let error = parse_with_descriptors(r#"{"name": "John""#, &mut fields).unwrap_err();
    assert_eq!(
        error,
        MapError::Syntax {
            field: String::new(),
            error: ParseError::UnexpectedEnd {
                expected: "',' or '}'"
            },
        }
    );
}

#[test]
fn test_top_level_must_be_an_object() {
    let mut age: Integer = 0;
    let mut fields = [Descriptor::integer("age", &mut age)];
    assert!(matches!(
        parse_with_descriptors("[1]", &mut fields),
        Err(MapError::Syntax { .. })
    ));
    assert_eq!(
        parse_with_descriptors(r#"{"age": 1} x"#, &mut fields),
        Err(MapError::Syntax {
            field: String::new(),
            error: ParseError::TrailingCharacters { pos: 11 },
        })
    );
}

#[test]
fn test_unknown_keys_are_skipped() {
    let mut age: Integer = 0;
    {
        let mut fields = [Descriptor::integer("age", &mut age).required()];
        let json = r#"{"extra": {"deep": [1, {"x": null}]}, "age": 7, "more": "s"}"#;
        assert_eq!(parse_with_descriptors(json, &mut fields), Ok(()));
    }
    assert_eq!(age, 7);
}

#[test]
fn test_unknown_keys_are_still_syntax_checked() {
    let mut age: Integer = 0;
    let mut fields = [Descriptor::integer("age", &mut age)];
    let error = parse_with_descriptors(r#"{"extra": [1,], "age": 7}"#, &mut fields).unwrap_err();
    assert_eq!(error.field(), "extra");
    assert!(matches!(error, MapError::Syntax { .. }));
}

#[test]
fn test_first_occurrence_wins() {
    let mut age: Integer = 0;
    {
        let mut fields = [Descriptor::integer("age", &mut age)];
        let json = r#"{"age": 1, "age": "ignored"}"#;
        assert_eq!(parse_with_descriptors(json, &mut fields), Ok(()));
    }
    assert_eq!(age, 1);
}

#[test]
fn test_string_is_clamped() {
    let mut name = [0xffu8; 5];
    {
        let mut fields = [Descriptor::string("name", &mut name)];
        let json = r#"{"name": "Bartholomew"}"#;
        assert_eq!(parse_with_descriptors(json, &mut fields), Ok(()));
    }
    assert_eq!(&name, b"Bart\0");
}

#[test]
fn test_zero_length_string_buffer() {
    let mut name: [u8; 0] = [];
    let mut fields = [Descriptor::string("name", &mut name).required()];
    assert_eq!(
        parse_with_descriptors(r#"{"name": "John"}"#, &mut fields),
        Ok(())
    );
}

#[test]
fn test_string_escapes_are_unescaped() {
    let mut text = [0u8; 16];
    {
        let mut fields = [Descriptor::string("text", &mut text)];
        let json = r#"{"text": "a\"b\\c\n"}"#;
        assert_eq!(parse_with_descriptors(json, &mut fields), Ok(()));
    }
    // Shallow escapes: "\n" is a literal 'n'
    assert_eq!(terminated_str(&text), Some("a\"b\\cn"));
}

#[test]
fn test_array_capacity_bounds_writes() {
    let mut scores: [Integer; 3] = [0; 3];
    let mut after: Integer = 0;
    {
        let mut fields = [
            Descriptor::array("scores", ArrayTarget::integers(&mut scores)),
            Descriptor::integer("after", &mut after),
        ];
        let json = r#"{"scores": [1, 2, 3, 4, {"x": [5]}], "after": 9}"#;
        assert_eq!(parse_with_descriptors(json, &mut fields), Ok(()));
    }
    assert_eq!(scores, [1, 2, 3]);
    assert_eq!(after, 9);
}

#[test]
fn test_short_array_leaves_remaining_slots() {
    let mut flags = [false, false, true];
    {
        let mut fields = [Descriptor::array("flags", ArrayTarget::booleans(&mut flags))];
        assert_eq!(
            parse_with_descriptors(r#"{"flags": [true]}"#, &mut fields),
            Ok(())
        );
    }
    assert_eq!(flags, [true, false, true]);
}

#[test]
fn test_array_element_type_mismatch_names_index() {
    let mut scores: [Integer; 5] = [0; 5];
    let mut fields = [Descriptor::array("scores", ArrayTarget::integers(&mut scores))];
    let error = parse_with_descriptors(r#"{"scores": [1, 2, "x"]}"#, &mut fields).unwrap_err();
    assert_eq!(
        error,
        MapError::TypeMismatch {
            field: "scores[2]".into(),
            expected: Kind::Integer,
            found: ValueKind::String,
        }
    );
}

#[test]
fn test_array_of_doubles_and_strided_strings() {
    let mut readings = [0.0; 4];
    let mut names = [0u8; 12];
    {
        let mut fields = [
            Descriptor::array("readings", ArrayTarget::doubles(&mut readings)),
            Descriptor::array("names", ArrayTarget::strings_strided(&mut names, 4)),
        ];
        let json = r#"{"readings": [1.5, -2, 3e2], "names": ["ab", "cdef", "g"]}"#;
        assert_eq!(parse_with_descriptors(json, &mut fields), Ok(()));
    }
    assert_eq!(readings, [1.5, -2.0, 300.0, 0.0]);
    assert_eq!(&names, b"ab\0\0cde\0g\0\0\0");
}

#[test]
fn test_null_handling() {
    let mut age: Integer = 41;
    let mut nick = *b"keep\0";
    let mut scores: [Integer; 3] = [7, 7, 7];
    {
        let mut fields = [
            Descriptor::integer("age", &mut age),
            Descriptor::string("nick", &mut nick),
            Descriptor::array("scores", ArrayTarget::integers(&mut scores)),
        ];
        let json = r#"{"age": null, "nick": null, "scores": [1, null, 3]}"#;
        assert_eq!(parse_with_descriptors(json, &mut fields), Ok(()));
    }
    assert_eq!(age, 41);
    assert_eq!(terminated_str(&nick), Some("keep"));
    assert_eq!(scores, [1, 7, 3]);
}

#[test]
fn test_null_into_required_is_a_mismatch() {
    let mut age: Integer = 0;
    let mut fields = [Descriptor::integer("age", &mut age).required()];
    assert_eq!(
        parse_with_descriptors(r#"{"age": null}"#, &mut fields),
        Err(MapError::TypeMismatch {
            field: "age".into(),
            expected: Kind::Integer,
            found: ValueKind::Null,
        })
    );

    let mut scores: [Integer; 2] = [0; 2];
    let array = ArrayTarget::integers(&mut scores).elements_required();
    let mut fields = [Descriptor::array("scores", array)];
    assert_eq!(
        parse_with_descriptors(r#"{"scores": [1, null]}"#, &mut fields)
            .unwrap_err()
            .field(),
        "scores[1]"
    );
}

#[test]
fn test_array_of_records() {
    let mut names = [[0u8; 8]; 2];
    let mut ages: [Integer; 2] = [0; 2];
    {
        let records = names
            .iter_mut()
            .zip(ages.iter_mut())
            .map(|(name, age)| {
                vec![
                    Descriptor::string("name", name).required(),
                    Descriptor::integer("age", age),
                ]
            })
            .collect();
        let mut fields = [Descriptor::array("people", ArrayTarget::records(records))];
        let json = r#"{"people": [{"name": "Ann", "age": 30}, {"name": "Bo"}]}"#;
        assert_eq!(parse_with_descriptors(json, &mut fields), Ok(()));
    }
    assert_eq!(terminated_str(&names[0]), Some("Ann"));
    assert_eq!(terminated_str(&names[1]), Some("Bo"));
    assert_eq!(ages, [30, 0]);
}

#[test]
fn test_record_error_path() {
    let mut names = [[0u8; 8]; 2];
    let records = names
        .iter_mut()
        .map(|name| vec![Descriptor::string("name", name).required()])
        .collect();
    let mut fields = [Descriptor::array("people", ArrayTarget::records(records))];
    let json = r#"{"people": [{"name": "Ann"}, {"age": 3}]}"#;
    assert_eq!(
        parse_with_descriptors(json, &mut fields),
        Err(MapError::MissingField {
            field: "people[1].name".into()
        })
    );
}

#[test]
fn test_integer_conversion() {
    let mut exact: Integer = 0;
    let mut truncated: Integer = 0;
    let mut negative: Integer = 0;
    {
        let mut fields = [
            Descriptor::integer("exact", &mut exact),
            Descriptor::integer("truncated", &mut truncated),
            Descriptor::integer("negative", &mut negative),
        ];
        let json = r#"{"exact": 2147483647, "truncated": 3.99, "negative": -2.5e0}"#;
        assert_eq!(parse_with_descriptors(json, &mut fields), Ok(()));
    }
    assert_eq!(exact, 2147483647);
    assert_eq!(truncated, 3);
    assert_eq!(negative, -2);
}

#[test]
fn test_integer_out_of_range() {
    let mut big: Integer = 0;
    let mut fields = [Descriptor::integer("big", &mut big)];
    assert_eq!(
        parse_with_descriptors(r#"{"big": 1e30}"#, &mut fields),
        Err(MapError::OutOfRange {
            field: "big".into()
        })
    );
    assert_eq!(
        parse_with_descriptors(r#"{"big": 99999999999999999999}"#, &mut fields),
        Err(MapError::OutOfRange {
            field: "big".into()
        })
    );
}

#[test]
fn test_depth_limit_applies_to_mapping() {
    let mut age: Integer = 0;
    let mut fields = [Descriptor::integer("age", &mut age)];
    let json = r#"{"skip": [[[1]]], "age": 1}"#;
    let result = Mapper::with_options(json.as_bytes(), ParseOptions { max_depth: 3 })
        .map(&mut fields);
    assert_eq!(
        result,
        Err(MapError::Syntax {
            field: "skip".into(),
            error: ParseError::DepthLimitExceeded { limit: 3 },
        })
    );
}

#[test]
fn test_written_fields_are_not_rolled_back() {
    let mut first: Integer = 0;
    let mut second: Integer = 0;
    {
        let mut fields = [
            Descriptor::integer("first", &mut first),
            Descriptor::integer("second", &mut second),
        ];
        let json = r#"{"first": 5, "second": true}"#;
        assert!(parse_with_descriptors(json, &mut fields).is_err());
    }
    assert_eq!(first, 5);
    assert_eq!(second, 0);
}
