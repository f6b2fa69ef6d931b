//! Composite (struct) values.
//!
//! A composite pairs a shared field layout, built once per source struct
//! type, with its own field values. Copy and equality walk the layout's fixed
//! field list instead of discovering fields at runtime.

use rustc_hash::FxHashMap;

use super::{Heap, Value};
use crate::errors::{undefined_field, unsupported_value_shape, RtResult};

// CompositeLayout

/// Field schema of one source struct type.
#[derive(Clone, Debug, PartialEq)]
pub struct CompositeLayout {
    /// Field names in declaration order.
    names: Vec<String>,
    /// Map from field name to index.
    field_indices: FxHashMap<String, usize>,
}

impl CompositeLayout {
    /// Create a layout from field names in declaration order.
    pub fn new<I, S>(field_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = field_names.into_iter().map(Into::into).collect();
        let field_indices = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        CompositeLayout {
            names,
            field_indices,
        }
    }

    /// Get the index of a field by name.
    pub fn get_index(&self, field: &str) -> Option<usize> {
        self.field_indices.get(field).copied()
    }

    /// Field names in declaration order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

// Composite

/// Struct instance.
///
/// Field values live in a copy-on-write cell: cloning a `Composite` is cheap
/// and writing a field through [`Composite::set`] never affects other clones.
#[derive(Clone, Debug)]
pub struct Composite {
    layout: Heap<CompositeLayout>,
    fields: Heap<Vec<Value>>,
}

impl Composite {
    /// Create a composite from a layout and field values in layout order.
    pub fn new(layout: Heap<CompositeLayout>, fields: Vec<Value>) -> RtResult<Self> {
        if fields.len() != layout.len() {
            return Err(unsupported_value_shape("struct with mismatched field count"));
        }
        Ok(Composite {
            layout,
            fields: Heap::new(fields),
        })
    }

    /// Create a composite with a fresh layout from `(name, value)` pairs.
    pub fn from_fields<S: Into<String>>(fields: impl IntoIterator<Item = (S, Value)>) -> Self {
        let (names, values): (Vec<String>, Vec<Value>) = fields
            .into_iter()
            .map(|(name, value)| (name.into(), value))
            .unzip();
        Composite {
            layout: Heap::new(CompositeLayout::new(names)),
            fields: Heap::new(values),
        }
    }

    /// Same layout, new field values. Callers keep the layout's field count.
    pub(crate) fn with_values(&self, values: Vec<Value>) -> Self {
        debug_assert_eq!(values.len(), self.layout.len());
        Composite {
            layout: self.layout.clone(),
            fields: Heap::new(values),
        }
    }

    pub fn layout(&self) -> &Heap<CompositeLayout> {
        &self.layout
    }

    /// Field values in layout order.
    pub fn values(&self) -> &[Value] {
        &self.fields
    }

    /// Get a field value by name.
    pub fn get(&self, field: &str) -> Option<&Value> {
        let index = self.layout.get_index(field)?;
        self.fields.get(index)
    }

    /// Overwrite a field, detaching from any shared copy first.
    pub fn set(&mut self, field: &str, value: Value) -> RtResult<()> {
        let index = self
            .layout
            .get_index(field)
            .ok_or_else(|| undefined_field(field))?;
        Heap::make_mut(&mut self.fields)[index] = value;
        Ok(())
    }

    /// Iterate `(name, value)` pairs in layout order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.layout
            .names()
            .iter()
            .map(String::as_str)
            .zip(self.fields.iter())
    }
}

#[cfg(test)]
mod tests;
