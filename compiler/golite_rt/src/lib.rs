//! GoLite runtime: support library for code emitted by the GoLite compiler.
//!
//! GoLite has array and struct value semantics, slice views over shared
//! storage, and 32-bit integer arithmetic. Generated code calls into this
//! crate wherever those semantics differ from plain double arithmetic and
//! reference-typed containers.
//!
//! # Modules
//!
//! - [`value`]: the closed value model and zero values
//! - [`semantics`]: `deep_copy` / `deep_eq`
//! - [`slice`]: `make_array`, `make_slice`, `append`, `check_bounds`
//! - [`numeric`]: typed operator entry points; [`operators`] dispatches over values
//! - [`render`]: canonical number formatting
//! - [`runtime`]: the [`Runtime`] facade with print and trap handlers

pub mod access;
pub mod conversions;
mod errors;
pub mod numeric;
pub mod operators;
mod output;
pub mod render;
pub mod runtime;
pub mod semantics;
pub mod slice;
mod trap;
pub mod value;

use std::sync::Once;

pub use errors::{
    division_by_zero, index_out_of_range, invalid_binary_operands, invalid_unary_operand,
    length_exceeds_capacity, negative_index, negative_length, type_mismatch, undefined_field,
    unlowered_logical_operator, unsupported_comparison, unsupported_value_shape, RtResult,
    RuntimeError, RuntimeErrorKind,
};
pub use golite_ir::{BinaryOp, UnaryOp};
pub use operators::{evaluate_binary, evaluate_unary};
pub use output::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use render::{format_float, format_number};
pub use runtime::{Runtime, RuntimeBuilder};
pub use semantics::{deep_copy, deep_eq};
pub use slice::{append, check_bounds, make_array, make_slice, Slice};
pub use trap::{CaptureTrapHandler, TrapHandler};
pub use value::{zero_value, Composite, CompositeLayout, Heap, Kind, Value, ValueClass};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
