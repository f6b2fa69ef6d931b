//! Runtime values seen by generated GoLite code.
//!
//! # Value Categories
//!
//! Every classifiable value falls into exactly one [`ValueClass`]:
//!
//! - **Primitive**: `Number`, `Text`, `Bool`. Immutable.
//! - **Sequence**: fixed-length array. Elements are owned by the sequence.
//! - **Composite**: struct. Field values are owned by the composite.
//! - **Slice**: `{length, capacity, contents}` header whose contents are
//!   shared with every other header of the same lineage.
//!
//! `Void` (the result of a call with no results) and `Undefined` (an
//! unpopulated backing slot) exist so generated code and the slice model can
//! represent them, but they classify as nothing and are rejected by copy and
//! comparison.
//!
//! # Sharing
//!
//! `Value::clone` is always O(1). Sequences and composites sit in
//! copy-on-write [`Heap`] cells, so sharing them is unobservable; slice
//! contents are shared on purpose and writes through one header are visible
//! through its aliases.

mod composite;
mod heap;
mod kind;

use std::fmt;

pub use composite::{Composite, CompositeLayout};
pub use heap::Heap;
pub use kind::{zero_value, Kind};

use crate::errors::{unsupported_value_shape, RtResult};
use crate::render::format_number;
use crate::slice::Slice;

/// The four categories copy and equality are defined over.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueClass {
    Primitive,
    Sequence,
    Composite,
    Slice,
}

/// Runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    // Primitives
    /// IEEE-754 double; carries both integer and floating source types.
    Number(f64),
    /// Immutable UTF-8 text.
    Text(Heap<String>),
    Bool(bool),

    // Containers
    /// Fixed-length array.
    Sequence(Heap<Vec<Value>>),
    /// Struct instance.
    Composite(Composite),
    /// Slice header over shared backing storage.
    Slice(Slice),

    // Unclassifiable
    /// Result of a call with no results.
    Void,
    /// Filler for backing slots that were never written.
    Undefined,
}

// Factory Methods

impl Value {
    /// Create a number from a 32-bit integer.
    #[inline]
    pub fn int(n: i32) -> Self {
        Value::Number(f64::from(n))
    }

    #[inline]
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(Heap::new(s.into()))
    }

    #[inline]
    pub fn sequence(items: Vec<Value>) -> Self {
        Value::Sequence(Heap::new(items))
    }

    /// Create a composite with a fresh layout from `(name, value)` pairs.
    pub fn composite<S: Into<String>>(fields: impl IntoIterator<Item = (S, Value)>) -> Self {
        Value::Composite(Composite::from_fields(fields))
    }
}

// Classification and accessors

impl Value {
    /// Tagged classification.
    ///
    /// Fails with `UnsupportedValueShape` for `Void` and `Undefined`.
    pub fn classify(&self) -> RtResult<ValueClass> {
        match self {
            Value::Number(_) | Value::Text(_) | Value::Bool(_) => Ok(ValueClass::Primitive),
            Value::Sequence(_) => Ok(ValueClass::Sequence),
            Value::Composite(_) => Ok(ValueClass::Composite),
            Value::Slice(_) => Ok(ValueClass::Slice),
            Value::Void | Value::Undefined => Err(unsupported_value_shape(self.type_name())),
        }
    }

    /// Type label used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Text(_) => "string",
            Value::Bool(_) => "bool",
            Value::Sequence(_) => "array",
            Value::Composite(_) => "struct",
            Value::Slice(_) => "slice",
            Value::Void => "void",
            Value::Undefined => "undefined",
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_slice(&self) -> Option<&Slice> {
        match self {
            Value::Slice(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_composite(&self) -> Option<&Composite> {
        match self {
            Value::Composite(c) => Some(c),
            _ => None,
        }
    }
}

/// Structural equality for Rust-side comparisons.
///
/// Same rules as [`crate::deep_eq`]; pairs it would reject compare unequal
/// here, except that `Void` and `Undefined` equal themselves.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Void, Value::Void) | (Value::Undefined, Value::Undefined) => true,
            _ => crate::semantics::deep_eq(self, other).unwrap_or(false),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::text(s)
    }
}

impl From<Slice> for Value {
    fn from(s: Slice) -> Self {
        Value::Slice(s)
    }
}

/// Host-natural text form, used by `print_not_float`.
///
/// Numbers print in their shortest form (`3`, `-7`, `0.5`), text prints
/// without quotes, containers print their elements space-separated.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::Text(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Sequence(items) => write_elements(f, items),
            Value::Slice(slice) => write_elements(f, &slice.to_vec()),
            Value::Composite(c) => {
                f.write_str("{")?;
                for (i, (_, value)) in c.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str("}")
            }
            Value::Void => f.write_str("()"),
            Value::Undefined => f.write_str("<undefined>"),
        }
    }
}

fn write_elements(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str("]")
}
