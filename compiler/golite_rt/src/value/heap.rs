//! Shared heap cell for composite values.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Reference-counted, copy-on-write storage for Sequence and Composite data.
///
/// Cloning a `Heap` shares the allocation. Mutation goes through
/// [`Heap::make_mut`], which copies the data first when it is shared, so a
/// clone can never observe a write made through another clone. This is what
/// gives sequences and composites value semantics while keeping `Value::clone`
/// O(1).
pub struct Heap<T>(Arc<T>);

impl<T> Heap<T> {
    /// Allocate a new heap cell.
    #[inline]
    pub fn new(value: T) -> Self {
        Heap(Arc::new(value))
    }

    /// Whether two cells share one allocation.
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.0, &other.0)
    }
}

impl<T: Clone> Heap<T> {
    /// Mutable access, detaching from other owners first.
    #[inline]
    pub fn make_mut(this: &mut Self) -> &mut T {
        Arc::make_mut(&mut this.0)
    }
}

impl<T> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Arc::clone(&self.0))
    }
}

impl<T> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: PartialEq> PartialEq for Heap<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
