//! Value-semantics engine: structural copy and structural equality.
//!
//! Arrays and structs behave as values: assigning or passing one duplicates
//! it. Slices behave as views: duplicating one duplicates the header only.
//! Both operations dispatch on [`Value::classify`], never on shape.

use std::cmp::Ordering;

use crate::errors::{unsupported_comparison, RtResult};
use crate::value::{Value, ValueClass};

/// Copy a value with GoLite assignment semantics.
///
/// Primitives are returned as-is, sequences and composites are rebuilt with
/// recursively copied elements, and slices get a new header over the same
/// backing buffer.
pub fn deep_copy(value: &Value) -> RtResult<Value> {
    value.classify()?;
    Ok(match value {
        Value::Sequence(items) => Value::sequence(copy_all(items)?),
        Value::Composite(c) => Value::Composite(c.with_values(copy_all(c.values())?)),
        _ => value.clone(),
    })
}

fn copy_all(items: &[Value]) -> RtResult<Vec<Value>> {
    items.iter().map(deep_copy).collect()
}

/// Structural equality.
///
/// Values of different categories are unequal. Fails with
/// `UnsupportedComparison` when either side cannot be classified or when a
/// field of `a` is missing from `b`.
pub fn deep_eq(a: &Value, b: &Value) -> RtResult<bool> {
    let mismatch = || unsupported_comparison(a.type_name(), b.type_name());
    let class_a = a.classify().map_err(|_| mismatch())?;
    let class_b = b.classify().map_err(|_| mismatch())?;
    if class_a != class_b {
        return Ok(false);
    }

    match (a, b) {
        (Value::Number(x), Value::Number(y)) => Ok(x.partial_cmp(y) == Some(Ordering::Equal)),
        (Value::Text(x), Value::Text(y)) => Ok(**x == **y),
        (Value::Bool(x), Value::Bool(y)) => Ok(x == y),
        (Value::Sequence(x), Value::Sequence(y)) => elements_eq(x, y),
        (Value::Slice(x), Value::Slice(y)) => elements_eq(&x.to_vec(), &y.to_vec()),
        (Value::Composite(x), Value::Composite(y)) => {
            for (name, field) in x.iter() {
                let other = y.get(name).ok_or_else(mismatch)?;
                if !deep_eq(field, other)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        // Distinct primitive kinds.
        _ => {
            debug_assert_eq!(class_a, ValueClass::Primitive);
            Ok(false)
        }
    }
}

fn elements_eq(a: &[Value], b: &[Value]) -> RtResult<bool> {
    if a.len() != b.len() {
        return Ok(false);
    }
    for (x, y) in a.iter().zip(b) {
        if !deep_eq(x, y)? {
            return Ok(false);
        }
    }
    Ok(true)
}
