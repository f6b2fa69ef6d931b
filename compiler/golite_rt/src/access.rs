//! Indexing, field access, and the `len`/`cap` builtins.
//!
//! Reads return clones; writes store a [`deep_copy`] of the assigned value so
//! arrays and structs keep value semantics once stored. Writes into a
//! sequence or composite detach it from any copy that shares its storage.
//! Writes through a slice land in the shared backing buffer.

use crate::errors::{type_mismatch, undefined_field, RtResult};
use crate::semantics::deep_copy;
use crate::slice::check_bounds;
use crate::value::{Heap, Value};

const INDEXABLE: &str = "array, slice or string";

/// `container[index]`.
///
/// Indexing a string yields the byte at `index`.
pub fn index_get(container: &Value, index: i64) -> RtResult<Value> {
    match container {
        Value::Sequence(items) => {
            let i = check_bounds(index, items.len())?;
            Ok(items[i].clone())
        }
        Value::Slice(slice) => slice.get(index),
        Value::Text(s) => {
            let i = check_bounds(index, s.len())?;
            Ok(Value::int(i32::from(s.as_bytes()[i])))
        }
        _ => Err(type_mismatch(INDEXABLE, container.type_name())),
    }
}

/// `container[index] = value`.
pub fn index_set(container: &mut Value, index: i64, value: &Value) -> RtResult<()> {
    match container {
        Value::Sequence(items) => {
            let i = check_bounds(index, items.len())?;
            Heap::make_mut(items)[i] = deep_copy(value)?;
            Ok(())
        }
        Value::Slice(slice) => {
            check_bounds(index, slice.len())?;
            slice.set(index, deep_copy(value)?)
        }
        _ => Err(type_mismatch("array or slice", container.type_name())),
    }
}

/// `value.field`.
pub fn field_get(value: &Value, field: &str) -> RtResult<Value> {
    match value {
        Value::Composite(c) => c.get(field).cloned().ok_or_else(|| undefined_field(field)),
        _ => Err(type_mismatch("struct", value.type_name())),
    }
}

/// `target.field = value`.
pub fn field_set(target: &mut Value, field: &str, value: &Value) -> RtResult<()> {
    match target {
        Value::Composite(c) => c.set(field, deep_copy(value)?),
        _ => Err(type_mismatch("struct", target.type_name())),
    }
}

/// `len(value)`. Strings report their length in bytes.
pub fn len(value: &Value) -> RtResult<usize> {
    match value {
        Value::Sequence(items) => Ok(items.len()),
        Value::Slice(slice) => Ok(slice.len()),
        Value::Text(s) => Ok(s.len()),
        _ => Err(type_mismatch(INDEXABLE, value.type_name())),
    }
}

/// `cap(value)`. An array's capacity is its length.
pub fn cap(value: &Value) -> RtResult<usize> {
    match value {
        Value::Sequence(items) => Ok(items.len()),
        Value::Slice(slice) => Ok(slice.cap()),
        _ => Err(type_mismatch("array or slice", value.type_name())),
    }
}
