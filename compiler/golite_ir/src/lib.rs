//! GoLite IR - operator vocabulary.
//!
//! The code generator decides which runtime entry point an expression lowers
//! to; the runtime dispatches on the same enums. Keeping both sides on one
//! definition means an operator can never be renamed on one side only.
//!
//! All types are `Copy + Eq + Hash + Debug` so they can key generator tables.

mod operators;

pub use operators::{BinaryOp, UnaryOp};
