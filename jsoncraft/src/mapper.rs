// SPDX-License-Identifier: Apache-2.0

//! Descriptor-driven mapping of JSON text straight into caller-owned
//! destinations, without building a value tree.

use alloc::string::ToString;
use alloc::vec;

use log::{debug, trace};

use crate::descriptor::{ArrayTarget, Descriptor, Kind, Slots, Target};
use crate::int_parser::Integer;
use crate::json_string::RawString;
use crate::map_error::MapError;
use crate::parse_error::ParseError;
use crate::parser_core::{Container, ParseOptions, ParserCore};
use crate::value::ValueKind;

/// Location of the value being mapped, rendered only when reporting.
#[derive(Debug, Clone, Copy)]
enum FieldPath<'p> {
    Root,
    Key(&'p FieldPath<'p>, &'p str),
    Index(&'p FieldPath<'p>, usize),
}

impl core::fmt::Display for FieldPath<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FieldPath::Root => Ok(()),
            FieldPath::Key(parent, key) => {
                write!(f, "{parent}")?;
                if !matches!(parent, FieldPath::Root) {
                    f.write_str(".")?;
                }
                f.write_str(key)
            }
            FieldPath::Index(parent, idx) => write!(f, "{parent}[{idx}]"),
        }
    }
}

fn syntax(field: &FieldPath<'_>, error: ParseError) -> MapError {
    MapError::Syntax {
        field: field.to_string(),
        error,
    }
}

/// Copies at most `dst.len() - 1` unescaped bytes and NUL-terminates.
///
/// Returns the number of content bytes written. Bytes after the terminator
/// are left as they were.
fn copy_clamped(dst: &mut [u8], src: RawString<'_>) -> usize {
    let Some(limit) = dst.len().checked_sub(1) else {
        return 0;
    };
    let mut written = 0;
    for (slot, byte) in dst[..limit].iter_mut().zip(src.unescaped()) {
        *slot = byte;
        written += 1;
    }
    dst[written] = 0;
    written
}

/// Maps one JSON document onto a descriptor list.
///
/// The document must be an object. Unknown keys are skipped after being
/// checked for syntax, and the first failure stops the walk.
pub struct Mapper<'a> {
    core: ParserCore<'a>,
}

impl<'a> Mapper<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::new_from_slice(input.as_bytes())
    }

    pub fn new_from_slice(input: &'a [u8]) -> Self {
        Self::with_options(input, ParseOptions::default())
    }

    pub fn with_options(input: &'a [u8], options: ParseOptions) -> Self {
        Self {
            core: ParserCore::new(input, options),
        }
    }

    /// Writes the document into the destinations of `descriptors`.
    ///
    /// On failure, destinations already written keep their new values.
    pub fn map(mut self, descriptors: &mut [Descriptor<'_>]) -> Result<(), MapError> {
        let root = FieldPath::Root;
        let result = self
            .map_object(descriptors, &root)
            .and_then(|_| self.core.finish().map_err(|e| syntax(&root, e)));
        if let Err(e) = &result {
            debug!("mapping failed: {e}");
        }
        result
    }

    fn map_object(
        &mut self,
        descriptors: &mut [Descriptor<'_>],
        path: &FieldPath<'_>,
    ) -> Result<(), MapError> {
        let mut seen = vec![false; descriptors.len()];
        let mut more = self
            .core
            .begin(Container::Object)
            .map_err(|e| syntax(path, e))?;

        while more {
            let key = self.core.object_key().map_err(|e| syntax(path, e))?;
            match descriptors.iter().position(|d| key.matches(d.key())) {
                Some(idx) if !seen[idx] => {
                    seen[idx] = true;
                    let descriptor = &mut descriptors[idx];
                    let required = descriptor.is_required();
                    let field = FieldPath::Key(path, descriptor.key());
                    trace!("mapping '{}' as {}", field, descriptor.kind());
                    self.apply(descriptor.target_mut(), required, &field)?;
                }
                Some(_) => {
                    let field = FieldPath::Key(path, key.as_raw_str());
                    trace!("skipping repeated key '{}'", field);
                    self.skip(&field)?;
                }
                None => {
                    let field = FieldPath::Key(path, key.as_raw_str());
                    trace!("ignoring unknown key '{}'", field);
                    self.skip(&field)?;
                }
            }
            more = self
                .core
                .next_member(Container::Object)
                .map_err(|e| syntax(path, e))?;
        }

        for (descriptor, seen) in descriptors.iter().zip(seen) {
            if descriptor.is_required() && !seen {
                return Err(MapError::MissingField {
                    field: FieldPath::Key(path, descriptor.key()).to_string(),
                });
            }
        }
        Ok(())
    }

    fn map_array(
        &mut self,
        array: &mut ArrayTarget<'_>,
        field: &FieldPath<'_>,
    ) -> Result<(), MapError> {
        let capacity = array.capacity();
        let required = array.is_element_required();
        let mut idx = 0;
        let mut more = self
            .core
            .begin(Container::Array)
            .map_err(|e| syntax(field, e))?;

        while more {
            let element = FieldPath::Index(field, idx);
            if idx < capacity {
                self.apply_element(array.slots_mut(), idx, required, &element)?;
            } else {
                self.skip(&element)?;
            }
            idx += 1;
            more = self
                .core
                .next_member(Container::Array)
                .map_err(|e| syntax(field, e))?;
        }

        if idx > capacity {
            trace!(
                "'{}': ignored {} elements past capacity {}",
                field,
                idx - capacity,
                capacity
            );
        }
        Ok(())
    }

    fn apply(
        &mut self,
        target: &mut Target<'_>,
        required: bool,
        field: &FieldPath<'_>,
    ) -> Result<(), MapError> {
        if !self.present(target.kind(), required, field)? {
            return Ok(());
        }
        match target {
            Target::Integer(dst) => **dst = self.integer(field)?,
            Target::Double(dst) => **dst = self.double(field)?,
            Target::Boolean(dst) => **dst = self.boolean(field)?,
            Target::String(buf) => self.string_into(buf, field)?,
            Target::Object(children) => self.map_object(children, field)?,
            Target::Array(array) => self.map_array(array, field)?,
        }
        Ok(())
    }

    fn apply_element(
        &mut self,
        slots: &mut Slots<'_>,
        idx: usize,
        required: bool,
        field: &FieldPath<'_>,
    ) -> Result<(), MapError> {
        if !self.present(slots.kind(), required, field)? {
            return Ok(());
        }
        match slots {
            Slots::Integer(s) => s[idx] = self.integer(field)?,
            Slots::Double(s) => s[idx] = self.double(field)?,
            Slots::Boolean(s) => s[idx] = self.boolean(field)?,
            Slots::String(s) => self.string_into(&mut *s[idx], field)?,
            Slots::Object(s) => self.map_object(&mut s[idx], field)?,
        }
        Ok(())
    }

    /// Checks the next value against the destination kind.
    ///
    /// An optional destination facing `null` consumes it and returns false,
    /// leaving the destination untouched. A required one reports a mismatch.
    fn present(
        &mut self,
        expected: Kind,
        required: bool,
        field: &FieldPath<'_>,
    ) -> Result<bool, MapError> {
        let found = self.core.peek_kind().map_err(|e| syntax(field, e))?;
        if found == ValueKind::Null && !required {
            self.core.null().map_err(|e| syntax(field, e))?;
            trace!("'{}' is null, destination left untouched", field);
            return Ok(false);
        }
        if !expected.accepts(found) {
            return Err(MapError::TypeMismatch {
                field: field.to_string(),
                expected,
                found,
            });
        }
        Ok(true)
    }

    fn integer(&mut self, field: &FieldPath<'_>) -> Result<Integer, MapError> {
        let number = self.core.number().map_err(|e| syntax(field, e))?;
        number.to_integer().map_err(|_| MapError::OutOfRange {
            field: field.to_string(),
        })
    }

    fn double(&mut self, field: &FieldPath<'_>) -> Result<f64, MapError> {
        let number = self.core.number().map_err(|e| syntax(field, e))?;
        Ok(number.as_f64())
    }

    fn boolean(&mut self, field: &FieldPath<'_>) -> Result<bool, MapError> {
        self.core.boolean().map_err(|e| syntax(field, e))
    }

    fn string_into(&mut self, dst: &mut [u8], field: &FieldPath<'_>) -> Result<(), MapError> {
        let src = self.core.string().map_err(|e| syntax(field, e))?;
        let written = copy_clamped(dst, src);
        if written < src.unescaped().count() {
            trace!("'{}' clamped to {} bytes", field, written);
        }
        Ok(())
    }

    fn skip(&mut self, field: &FieldPath<'_>) -> Result<(), MapError> {
        self.core.skip_value().map_err(|e| syntax(field, e))
    }
}

/// Deserializes `input` into the destinations described by `descriptors`.
///
/// See [`Mapper`] for the rules; this uses default [`ParseOptions`].
pub fn parse_with_descriptors(
    input: &str,
    descriptors: &mut [Descriptor<'_>],
) -> Result<(), MapError> {
    Mapper::new(input).map(descriptors)
}
