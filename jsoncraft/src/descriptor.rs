// SPDX-License-Identifier: Apache-2.0

//! Field descriptors for the mapper.
//!
//! A descriptor ties one JSON key to one typed destination the caller owns.
//! Capacities come from the destinations themselves (buffer length, slot
//! count), so they cannot disagree with the storage being written.

use alloc::vec::Vec;

use crate::int_parser::Integer;
use crate::value::ValueKind;

/// The kind of destination a descriptor writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Integer,
    String,
    Boolean,
    Double,
    Object,
    Array,
}

impl Kind {
    pub fn name(self) -> &'static str {
        match self {
            Kind::Integer => "integer",
            Kind::String => "string",
            Kind::Boolean => "boolean",
            Kind::Double => "double",
            Kind::Object => "object",
            Kind::Array => "array",
        }
    }

    /// Whether a JSON value of kind `found` can fill this destination.
    pub fn accepts(self, found: ValueKind) -> bool {
        matches!(
            (self, found),
            (Kind::Integer | Kind::Double, ValueKind::Number)
                | (Kind::String, ValueKind::String)
                | (Kind::Boolean, ValueKind::Boolean)
                | (Kind::Object, ValueKind::Object)
                | (Kind::Array, ValueKind::Array)
        )
    }
}

impl core::fmt::Display for Kind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a mapped value is written.
#[derive(Debug)]
pub enum Target<'a> {
    Integer(&'a mut Integer),
    Double(&'a mut f64),
    Boolean(&'a mut bool),
    /// A NUL-terminated byte buffer; holds at most `len - 1` content bytes.
    String(&'a mut [u8]),
    /// A nested record, described by its own descriptors.
    Object(Vec<Descriptor<'a>>),
    Array(ArrayTarget<'a>),
}

impl Target<'_> {
    pub fn kind(&self) -> Kind {
        match self {
            Target::Integer(_) => Kind::Integer,
            Target::Double(_) => Kind::Double,
            Target::Boolean(_) => Kind::Boolean,
            Target::String(_) => Kind::String,
            Target::Object(_) => Kind::Object,
            Target::Array(_) => Kind::Array,
        }
    }

    /// Buffer size for strings, descriptor count for objects, slot count
    /// for arrays, zero for scalars.
    pub fn capacity(&self) -> usize {
        match self {
            Target::Integer(_) | Target::Double(_) | Target::Boolean(_) => 0,
            Target::String(buf) => buf.len(),
            Target::Object(children) => children.len(),
            Target::Array(array) => array.capacity(),
        }
    }
}

/// Element slots of an array destination. Every element uses the same kind.
#[derive(Debug)]
pub enum Slots<'a> {
    Integer(&'a mut [Integer]),
    Double(&'a mut [f64]),
    Boolean(&'a mut [bool]),
    /// One NUL-terminated buffer per element.
    String(Vec<&'a mut [u8]>),
    /// One descriptor list per element record.
    Object(Vec<Vec<Descriptor<'a>>>),
}

impl Slots<'_> {
    pub fn kind(&self) -> Kind {
        match self {
            Slots::Integer(_) => Kind::Integer,
            Slots::Double(_) => Kind::Double,
            Slots::Boolean(_) => Kind::Boolean,
            Slots::String(_) => Kind::String,
            Slots::Object(_) => Kind::Object,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Slots::Integer(s) => s.len(),
            Slots::Double(s) => s.len(),
            Slots::Boolean(s) => s.len(),
            Slots::String(s) => s.len(),
            Slots::Object(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A bounded array destination plus the element template's `required` flag.
///
/// Input elements past the slot count are ignored.
#[derive(Debug)]
pub struct ArrayTarget<'a> {
    slots: Slots<'a>,
    element_required: bool,
}

impl<'a> ArrayTarget<'a> {
    pub fn new(slots: Slots<'a>) -> Self {
        Self {
            slots,
            element_required: false,
        }
    }

    pub fn integers(slots: &'a mut [Integer]) -> Self {
        Self::new(Slots::Integer(slots))
    }

    pub fn doubles(slots: &'a mut [f64]) -> Self {
        Self::new(Slots::Double(slots))
    }

    pub fn booleans(slots: &'a mut [bool]) -> Self {
        Self::new(Slots::Boolean(slots))
    }

    /// String slots backed by fixed-size buffers, e.g. `[[u8; 20]; 3]`.
    pub fn strings<const N: usize>(slots: &'a mut [[u8; N]]) -> Self {
        Self::new(Slots::String(
            slots.iter_mut().map(|slot| &mut slot[..]).collect(),
        ))
    }

    /// String slots carved out of one flat buffer, `stride` bytes each.
    ///
    /// A trailing remainder shorter than `stride` is not used.
    pub fn strings_strided(buf: &'a mut [u8], stride: usize) -> Self {
        let slots = if stride == 0 {
            Vec::new()
        } else {
            buf.chunks_exact_mut(stride).collect()
        };
        Self::new(Slots::String(slots))
    }

    /// Record slots, one descriptor list per element.
    pub fn records(records: Vec<Vec<Descriptor<'a>>>) -> Self {
        Self::new(Slots::Object(records))
    }

    /// Rejects `null` elements instead of leaving their slots untouched.
    pub fn elements_required(mut self) -> Self {
        self.element_required = true;
        self
    }

    pub fn element_kind(&self) -> Kind {
        self.slots.kind()
    }

    pub fn is_element_required(&self) -> bool {
        self.element_required
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn slots_mut(&mut self) -> &mut Slots<'a> {
        &mut self.slots
    }
}

/// Maps one JSON key onto one destination.
///
/// Descriptors are optional unless [`required`](Self::required) is called.
///
/// # Example
/// ```
/// use jsoncraft::{parse_with_descriptors, Descriptor, Integer};
///
/// let mut age: Integer = 0;
/// let mut name = [0u8; 8];
/// let mut fields = [
///     Descriptor::integer("age", &mut age).required(),
///     Descriptor::string("name", &mut name),
/// ];
/// parse_with_descriptors(r#"{"age": 25, "name": "John"}"#, &mut fields).unwrap();
/// drop(fields);
/// assert_eq!(age, 25);
/// assert_eq!(jsoncraft::terminated_str(&name), Some("John"));
/// ```
#[derive(Debug)]
pub struct Descriptor<'a> {
    key: &'a str,
    target: Target<'a>,
    required: bool,
}

impl<'a> Descriptor<'a> {
    pub fn new(key: &'a str, target: Target<'a>) -> Self {
        Self {
            key,
            target,
            required: false,
        }
    }

    pub fn integer(key: &'a str, dst: &'a mut Integer) -> Self {
        Self::new(key, Target::Integer(dst))
    }

    pub fn double(key: &'a str, dst: &'a mut f64) -> Self {
        Self::new(key, Target::Double(dst))
    }

    pub fn boolean(key: &'a str, dst: &'a mut bool) -> Self {
        Self::new(key, Target::Boolean(dst))
    }

    pub fn string(key: &'a str, dst: &'a mut [u8]) -> Self {
        Self::new(key, Target::String(dst))
    }

    pub fn object(key: &'a str, children: Vec<Descriptor<'a>>) -> Self {
        Self::new(key, Target::Object(children))
    }

    pub fn array(key: &'a str, array: ArrayTarget<'a>) -> Self {
        Self::new(key, Target::Array(array))
    }

    /// Marks the key as mandatory in the input.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn key(&self) -> &'a str {
        self.key
    }

    pub fn kind(&self) -> Kind {
        self.target.kind()
    }

    pub fn capacity(&self) -> usize {
        self.target.capacity()
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub(crate) fn target_mut(&mut self) -> &mut Target<'a> {
        &mut self.target
    }
}

/// The bytes of a NUL-terminated buffer, up to (not including) the first NUL.
///
/// A buffer without a NUL is returned whole.
pub fn terminated_bytes(buf: &[u8]) -> &[u8] {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    &buf[..end]
}

/// [`terminated_bytes`] as text, if it is valid UTF-8.
///
/// Clamping can cut a multi-byte character; such a buffer yields `None`.
pub fn terminated_str(buf: &[u8]) -> Option<&str> {
    core::str::from_utf8(terminated_bytes(buf)).ok()
}
