//! Slice model: shared backing storage, aliasing, and capacity growth.
//!
//! A [`Slice`] is a header `{length, contents}` over a backing buffer. The
//! buffer's size is the slice's capacity. Cloning a header shares the buffer,
//! so every header of one lineage sees writes made through any other, as long
//! as the write lands inside its own `[0, length)` window.
//!
//! # Growth
//!
//! `append` writes in place while there is spare capacity. Once the buffer is
//! full it allocates a new buffer of `max(1, capacity * 2)` slots, deep-copies
//! the populated prefix into it, and returns a header bound to the new buffer;
//! older headers keep the old one.
//!
//! Slots that were never written hold [`Value::Undefined`].

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::errors::{
    index_out_of_range, length_exceeds_capacity, negative_index, negative_length, RtResult,
};
use crate::semantics::deep_copy;
use crate::value::Value;

type Backing = Arc<RwLock<Vec<Value>>>;

/// Slice header over shared backing storage.
#[derive(Clone, Debug)]
pub struct Slice {
    length: usize,
    contents: Backing,
}

impl Slice {
    /// Slice with no elements and no capacity.
    pub fn empty() -> Self {
        Slice::with_backing(0, Vec::new())
    }

    /// Slice whose length and capacity are the number of `items`.
    ///
    /// The items are stored as given; callers copy them first when they must
    /// not be shared.
    pub fn from_values(items: Vec<Value>) -> Self {
        Slice::with_backing(items.len(), items)
    }

    fn with_backing(length: usize, backing: Vec<Value>) -> Self {
        debug_assert!(length <= backing.len());
        Slice {
            length,
            contents: Arc::new(RwLock::new(backing)),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Size of the backing buffer.
    pub fn cap(&self) -> usize {
        self.contents.read().len()
    }

    /// Whether two headers reference the same backing buffer.
    pub fn shares_backing(&self, other: &Slice) -> bool {
        Arc::ptr_eq(&self.contents, &other.contents)
    }

    /// Read the element at `index`, bounds-checked against this header's length.
    pub fn get(&self, index: i64) -> RtResult<Value> {
        let i = check_bounds(index, self.length)?;
        Ok(self.contents.read()[i].clone())
    }

    /// Write the element at `index` into the shared buffer.
    ///
    /// Every alias whose window covers `index` observes the write.
    pub fn set(&self, index: i64, value: Value) -> RtResult<()> {
        let i = check_bounds(index, self.length)?;
        self.contents.write()[i] = value;
        Ok(())
    }

    /// Snapshot of the logical range `[0, length)`.
    pub fn to_vec(&self) -> Vec<Value> {
        self.contents.read()[..self.length].to_vec()
    }
}

/// Validate an index against a length.
///
/// Returns the index as a `usize` when `0 <= index < length`.
pub fn check_bounds(index: i64, length: usize) -> RtResult<usize> {
    if index < 0 {
        return Err(negative_index(index, length));
    }
    match usize::try_from(index) {
        Ok(i) if i < length => Ok(i),
        _ => Err(index_out_of_range(index, length)),
    }
}

/// Slice of `length` independent copies of `example`, with `capacity == length`.
pub fn make_array(length: i64, example: &Value) -> RtResult<Slice> {
    make_slice(length, length, example)
}

/// Slice of `length` copies of `example` over a buffer of `capacity` slots.
///
/// Slots past `length` are left unpopulated until an append writes them.
pub fn make_slice(length: i64, capacity: i64, example: &Value) -> RtResult<Slice> {
    let Ok(len) = usize::try_from(length) else {
        return Err(negative_length(length));
    };
    if capacity < length {
        return Err(length_exceeds_capacity(length, capacity));
    }
    let cap = usize::try_from(capacity).map_err(|_| length_exceeds_capacity(length, capacity))?;

    let mut backing = Vec::with_capacity(cap);
    for _ in 0..len {
        backing.push(deep_copy(example)?);
    }
    backing.resize(cap, Value::Undefined);
    Ok(Slice::with_backing(len, backing))
}

/// Append a copy of `value`, returning the new header.
///
/// Writes in place when the buffer has room past `slice.len()`; otherwise
/// grows into a fresh buffer and the returned header no longer aliases
/// `slice`.
pub fn append(slice: &Slice, value: &Value) -> RtResult<Slice> {
    let item = deep_copy(value)?;
    let length = slice.length;
    let capacity = slice.cap();

    if length < capacity {
        trace!(length, capacity, "append in place");
        slice.contents.write()[length] = item;
        return Ok(Slice {
            length: length + 1,
            contents: Arc::clone(&slice.contents),
        });
    }

    let new_capacity = (capacity * 2).max(1);
    debug!(
        old_capacity = capacity,
        new_capacity, "slice backing grows"
    );
    let mut backing = Vec::with_capacity(new_capacity);
    {
        let old = slice.contents.read();
        for element in &old[..length] {
            backing.push(deep_copy(element)?);
        }
    }
    backing.push(item);
    backing.resize(new_capacity, Value::Undefined);
    Ok(Slice::with_backing(length + 1, backing))
}

#[cfg(test)]
mod tests;
