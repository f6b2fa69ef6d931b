//! Runtime error types.
//!
//! Every failure the runtime can report is fatal for the running GoLite
//! program. The library still returns them as ordinary `Result` values so the
//! failure paths stay testable; `TrapHandler` decides whether an error ends the
//! process or is handed back to the caller.
//!
//! # Structured Error Categories
//!
//! `RuntimeErrorKind` carries the data needed for the diagnostic. Factory
//! functions (e.g. `division_by_zero()`) are the public construction API.

use std::fmt;

/// Result of a runtime operation.
pub type RtResult<T> = Result<T, RuntimeError>;

/// Typed error category.
///
/// The `Display` impl produces the message part of the diagnostic line
/// `Error: line <N>: <message>`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeErrorKind {
    // Indexing
    #[error("index {index} is negative. Should be in range of {length}")]
    NegativeIndex { index: i64, length: usize },
    #[error("index {index} out of range. Should be in range of {length}")]
    IndexOutOfRange { index: i64, length: usize },

    // Arithmetic
    #[error("integer division by zero")]
    DivisionByZero,

    // Value semantics
    #[error("cannot compare {left} with {right}")]
    UnsupportedComparison {
        left: &'static str,
        right: &'static str,
    },
    #[error("unsupported value shape: {shape}")]
    UnsupportedValueShape { shape: &'static str },

    // Operators
    #[error("operator `{op}` cannot be applied to {left} and {right}")]
    InvalidBinaryOperands {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },
    #[error("operator `{op}` cannot be applied to {type_name}")]
    InvalidUnaryOperand {
        op: &'static str,
        type_name: &'static str,
    },
    #[error("logical operator `{op}` reached the runtime; it must be lowered to control flow")]
    UnloweredLogicalOperator { op: &'static str },

    // Construction and access
    #[error("negative slice length {length}")]
    NegativeLength { length: i64 },
    #[error("slice length {length} exceeds capacity {capacity}")]
    LengthExceedsCapacity { length: i64, capacity: i64 },
    #[error("no field {field} on struct")]
    UndefinedField { field: String },
    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },
}

/// Runtime error: a kind plus the source line reported in the diagnostic.
///
/// The line is supplied by generated code at the call site; the runtime
/// never computes it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct RuntimeError {
    pub kind: RuntimeErrorKind,
    pub line: Option<u32>,
}

impl RuntimeError {
    fn from_kind(kind: RuntimeErrorKind) -> Self {
        RuntimeError { kind, line: None }
    }

    /// Attach the source line of the failing operation.
    ///
    /// The first line attached wins, so an error raised deep inside a nested
    /// operation keeps the line it was raised at.
    #[must_use]
    pub fn at_line(mut self, line: u32) -> Self {
        if self.line.is_none() {
            self.line = Some(line);
        }
        self
    }

    /// Render the single diagnostic line written before the program exits.
    pub fn diagnostic(&self) -> String {
        Diagnostic(self).to_string()
    }
}

struct Diagnostic<'a>(&'a RuntimeError);

impl fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.line {
            Some(line) => write!(f, "Error: line {line}: {}", self.0.kind),
            None => write!(f, "Error: {}", self.0.kind),
        }
    }
}

// Factory functions

#[cold]
pub fn negative_index(index: i64, length: usize) -> RuntimeError {
    RuntimeError::from_kind(RuntimeErrorKind::NegativeIndex { index, length })
}

#[cold]
pub fn index_out_of_range(index: i64, length: usize) -> RuntimeError {
    RuntimeError::from_kind(RuntimeErrorKind::IndexOutOfRange { index, length })
}

#[cold]
pub fn division_by_zero() -> RuntimeError {
    RuntimeError::from_kind(RuntimeErrorKind::DivisionByZero)
}

#[cold]
pub fn unsupported_comparison(left: &'static str, right: &'static str) -> RuntimeError {
    RuntimeError::from_kind(RuntimeErrorKind::UnsupportedComparison { left, right })
}

#[cold]
pub fn unsupported_value_shape(shape: &'static str) -> RuntimeError {
    RuntimeError::from_kind(RuntimeErrorKind::UnsupportedValueShape { shape })
}

#[cold]
pub fn invalid_binary_operands(
    op: &'static str,
    left: &'static str,
    right: &'static str,
) -> RuntimeError {
    RuntimeError::from_kind(RuntimeErrorKind::InvalidBinaryOperands { op, left, right })
}

#[cold]
pub fn invalid_unary_operand(op: &'static str, type_name: &'static str) -> RuntimeError {
    RuntimeError::from_kind(RuntimeErrorKind::InvalidUnaryOperand { op, type_name })
}

#[cold]
pub fn unlowered_logical_operator(op: &'static str) -> RuntimeError {
    RuntimeError::from_kind(RuntimeErrorKind::UnloweredLogicalOperator { op })
}

#[cold]
pub fn negative_length(length: i64) -> RuntimeError {
    RuntimeError::from_kind(RuntimeErrorKind::NegativeLength { length })
}

#[cold]
pub fn length_exceeds_capacity(length: i64, capacity: i64) -> RuntimeError {
    RuntimeError::from_kind(RuntimeErrorKind::LengthExceedsCapacity { length, capacity })
}

#[cold]
pub fn undefined_field(field: impl Into<String>) -> RuntimeError {
    RuntimeError::from_kind(RuntimeErrorKind::UndefinedField {
        field: field.into(),
    })
}

#[cold]
pub fn type_mismatch(expected: &'static str, got: &'static str) -> RuntimeError {
    RuntimeError::from_kind(RuntimeErrorKind::TypeMismatch { expected, got })
}
