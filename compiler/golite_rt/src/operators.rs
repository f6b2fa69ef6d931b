//! Operator dispatch over boxed [`Value`]s.
//!
//! Generated code that already knows its operand types calls the typed
//! functions in [`crate::numeric`] directly. Code working on boxed values
//! goes through [`evaluate_binary`] and [`evaluate_unary`], which match on
//! the operand variants and forward to the same functions, so both paths
//! share one set of semantics.

use golite_ir::{BinaryOp, UnaryOp};

use crate::errors::{
    invalid_binary_operands, invalid_unary_operand, unlowered_logical_operator, RtResult,
};
use crate::numeric;
use crate::semantics::deep_eq;
use crate::value::Value;

/// Evaluate a binary operation.
///
/// `Eq`/`Neq` accept any classifiable operands. `Or`/`And` always fail:
/// the code generator lowers them to control flow.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> RtResult<Value> {
    match op {
        BinaryOp::Or | BinaryOp::And => Err(unlowered_logical_operator(op.as_symbol())),
        BinaryOp::Eq => Ok(Value::Bool(deep_eq(left, right)?)),
        BinaryOp::Neq => Ok(Value::Bool(!deep_eq(left, right)?)),
        _ => match (left, right) {
            (Value::Number(a), Value::Number(b)) => eval_number_binary(*a, *b, op),
            (Value::Text(a), Value::Text(b)) => eval_text_binary(a, b, op),
            _ => Err(mismatch(left, right, op)),
        },
    }
}

/// Binary operations on numbers.
fn eval_number_binary(a: f64, b: f64, op: BinaryOp) -> RtResult<Value> {
    let n = match op {
        BinaryOp::Lt => return Ok(Value::Bool(numeric::lt(a, b))),
        BinaryOp::Leq => return Ok(Value::Bool(numeric::leq(a, b))),
        BinaryOp::Gt => return Ok(Value::Bool(numeric::gt(a, b))),
        BinaryOp::Geq => return Ok(Value::Bool(numeric::geq(a, b))),
        BinaryOp::Add => numeric::add(a, b),
        BinaryOp::Sub => numeric::sub(a, b),
        BinaryOp::Mul => numeric::mul(a, b),
        BinaryOp::Div => numeric::div(a, b),
        BinaryOp::Mod => numeric::modulo(a, b),
        BinaryOp::BwOr => numeric::bw_or(a, b),
        BinaryOp::BwXor => numeric::bw_xor(a, b),
        BinaryOp::BwAnd => numeric::bw_and(a, b),
        BinaryOp::BwAndNot => numeric::bw_and_not(a, b),
        BinaryOp::LShift => numeric::lshift(a, b),
        BinaryOp::RShift => numeric::rshift(a, b),
        BinaryOp::AddInt => numeric::add_int(a, b),
        BinaryOp::SubInt => numeric::sub_int(a, b),
        BinaryOp::MulInt => numeric::mul_int(a, b),
        BinaryOp::DivInt => numeric::div_int(a, b)?,
        BinaryOp::Or | BinaryOp::And | BinaryOp::Eq | BinaryOp::Neq => {
            return Err(invalid_binary_operands(op.as_symbol(), "number", "number"));
        }
    };
    Ok(Value::Number(n))
}

/// Binary operations on text: concatenation and lexicographic ordering.
fn eval_text_binary(a: &str, b: &str, op: BinaryOp) -> RtResult<Value> {
    match op {
        BinaryOp::Add => Ok(Value::text(format!("{a}{b}"))),
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::Leq => Ok(Value::Bool(a <= b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::Geq => Ok(Value::Bool(a >= b)),
        _ => Err(invalid_binary_operands(op.as_symbol(), "string", "string")),
    }
}

#[cold]
fn mismatch(left: &Value, right: &Value, op: BinaryOp) -> crate::errors::RuntimeError {
    invalid_binary_operands(op.as_symbol(), left.type_name(), right.type_name())
}

/// Evaluate a unary operation.
pub fn evaluate_unary(value: &Value, op: UnaryOp) -> RtResult<Value> {
    match (value, op) {
        (Value::Number(n), UnaryOp::Plus) => Ok(Value::Number(numeric::plus(*n))),
        (Value::Number(n), UnaryOp::Neg) => Ok(Value::Number(numeric::neg(*n))),
        (Value::Number(n), UnaryOp::BwCompl) => Ok(Value::Number(numeric::bw_compl(*n))),
        (Value::Bool(b), UnaryOp::Not) => Ok(Value::Bool(numeric::not(*b))),
        _ => Err(invalid_unary_operand(op.as_symbol(), value.type_name())),
    }
}
