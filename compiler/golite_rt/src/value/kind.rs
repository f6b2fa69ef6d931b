//! Source-type descriptors and their zero values.
//!
//! Generated code passes a zero value as the `example` of `make_array`; this
//! module builds those values from a description of the element type.

use super::{Composite, Value};
use crate::slice::Slice;

/// Shape of a GoLite type, as far as zero values are concerned.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Int,
    Float,
    Rune,
    String,
    Bool,
    /// Fixed-length array `[n]T`.
    Array(Box<Kind>, usize),
    /// Slice `[]T`.
    Slice(Box<Kind>),
    /// Struct with fields in declaration order.
    Struct(Vec<(String, Kind)>),
}

/// Build the zero value of `kind`.
///
/// Numbers are `0`, text is empty, booleans are `false`, arrays hold
/// independent zero elements, slices are empty with no backing storage, and
/// structs hold the zero value of every field.
pub fn zero_value(kind: &Kind) -> Value {
    match kind {
        Kind::Int | Kind::Float | Kind::Rune => Value::Number(0.0),
        Kind::String => Value::text(""),
        Kind::Bool => Value::Bool(false),
        Kind::Array(elem, len) => Value::sequence((0..*len).map(|_| zero_value(elem)).collect()),
        Kind::Slice(_) => Value::Slice(Slice::empty()),
        Kind::Struct(fields) => Value::Composite(Composite::from_fields(
            fields
                .iter()
                .map(|(name, kind)| (name.as_str(), zero_value(kind))),
        )),
    }
}
