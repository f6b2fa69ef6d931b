//! `Runtime`: the entry points generated code calls.
//!
//! Every fallible operation takes the source line of the call site. On
//! failure the line is attached to the error and the error goes through the
//! configured [`TrapHandler`]; with the default handler the process ends
//! there. Output statements go through the configured print handler.
//!
//! ```text
//! let rt = Runtime::builder().print_handler(buffer_handler()).build();
//! let s = rt.make_array(3, &Value::int(0), 4)?;
//! let s = rt.append(&s, &Value::int(7), 5)?;
//! rt.print_not_float(&rt.index_get(&s, 3, 6)?);
//! ```

use golite_ir::{BinaryOp, UnaryOp};

use crate::errors::{type_mismatch, RtResult};
use crate::output::{stdout_handler, SharedPrintHandler};
use crate::render::format_float;
use crate::trap::TrapHandler;
use crate::value::{Kind, Value};
use crate::{access, conversions, operators, semantics, slice};

/// Builder for [`Runtime`].
///
/// Defaults: output to stdout, exit on trap.
#[derive(Default)]
pub struct RuntimeBuilder {
    print_handler: Option<SharedPrintHandler>,
    trap_handler: TrapHandler,
}

impl RuntimeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set where program output goes.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Set what happens on a runtime error.
    #[must_use]
    pub fn trap_handler(mut self, handler: TrapHandler) -> Self {
        self.trap_handler = handler;
        self
    }

    pub fn build(self) -> Runtime {
        Runtime {
            print: self.print_handler.unwrap_or_else(stdout_handler),
            trap: self.trap_handler,
        }
    }
}

/// Runtime context of one running GoLite program.
pub struct Runtime {
    print: SharedPrintHandler,
    trap: TrapHandler,
}

impl Default for Runtime {
    fn default() -> Self {
        RuntimeBuilder::new().build()
    }
}

impl Runtime {
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Attach `line` to a failure and hand it to the trap handler.
    fn guard<T>(&self, result: RtResult<T>, line: u32) -> RtResult<T> {
        result.map_err(|err| self.trap.raise(err.at_line(line), &self.print))
    }

    // Slices

    /// `make([]T, length)`: `length` copies of `example`, capacity `length`.
    pub fn make_array(&self, length: i64, example: &Value, line: u32) -> RtResult<Value> {
        self.guard(slice::make_array(length, example).map(Value::Slice), line)
    }

    /// `make([]T, length, capacity)`.
    pub fn make_slice(
        &self,
        length: i64,
        capacity: i64,
        example: &Value,
        line: u32,
    ) -> RtResult<Value> {
        self.guard(
            slice::make_slice(length, capacity, example).map(Value::Slice),
            line,
        )
    }

    /// `append(s, value)`.
    pub fn append(&self, target: &Value, value: &Value, line: u32) -> RtResult<Value> {
        let result = match target {
            Value::Slice(s) => slice::append(s, value).map(Value::Slice),
            _ => Err(type_mismatch("slice", target.type_name())),
        };
        self.guard(result, line)
    }

    pub fn check_bounds(&self, index: i64, length: usize, line: u32) -> RtResult<usize> {
        self.guard(slice::check_bounds(index, length), line)
    }

    // Value semantics

    pub fn deep_copy(&self, value: &Value, line: u32) -> RtResult<Value> {
        self.guard(semantics::deep_copy(value), line)
    }

    pub fn deep_eq(&self, a: &Value, b: &Value, line: u32) -> RtResult<bool> {
        self.guard(semantics::deep_eq(a, b), line)
    }

    // Operators

    pub fn binary(
        &self,
        left: &Value,
        right: &Value,
        op: BinaryOp,
        line: u32,
    ) -> RtResult<Value> {
        self.guard(operators::evaluate_binary(left, right, op), line)
    }

    pub fn unary(&self, value: &Value, op: UnaryOp, line: u32) -> RtResult<Value> {
        self.guard(operators::evaluate_unary(value, op), line)
    }

    // Access

    pub fn index_get(&self, container: &Value, index: i64, line: u32) -> RtResult<Value> {
        self.guard(access::index_get(container, index), line)
    }

    pub fn index_set(
        &self,
        container: &mut Value,
        index: i64,
        value: &Value,
        line: u32,
    ) -> RtResult<()> {
        self.guard(access::index_set(container, index, value), line)
    }

    pub fn field_get(&self, value: &Value, field: &str, line: u32) -> RtResult<Value> {
        self.guard(access::field_get(value, field), line)
    }

    pub fn field_set(
        &self,
        target: &mut Value,
        field: &str,
        value: &Value,
        line: u32,
    ) -> RtResult<()> {
        self.guard(access::field_set(target, field, value), line)
    }

    pub fn len(&self, value: &Value, line: u32) -> RtResult<usize> {
        self.guard(access::len(value), line)
    }

    pub fn cap(&self, value: &Value, line: u32) -> RtResult<usize> {
        self.guard(access::cap(value), line)
    }

    pub fn cast(&self, target: &Kind, value: &Value, line: u32) -> RtResult<Value> {
        self.guard(conversions::cast(target, value), line)
    }

    // Output

    /// Print a float in canonical scientific form.
    pub fn print_float(&self, x: f64) {
        self.print.print(&format_float(x));
    }

    /// Print any other value in its natural text form.
    pub fn print_not_float(&self, value: &Value) {
        self.print.print(&value.to_string());
    }

    /// Separator `println` emits between items.
    pub fn print_space(&self) {
        self.print.print(" ");
    }

    pub fn print_newline(&self) {
        self.print.print("\n");
    }

    /// Output captured by a buffer print handler.
    pub fn output(&self) -> String {
        self.print.get_output()
    }

    /// Diagnostics recorded by a capturing trap handler.
    pub fn diagnostics(&self) -> Vec<String> {
        self.trap.diagnostics()
    }
}

#[cfg(test)]
mod tests;
