#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use crate::errors::RuntimeErrorKind;
use crate::output::buffer_handler;
use pretty_assertions::assert_eq;

fn capturing() -> Runtime {
    Runtime::builder()
        .print_handler(buffer_handler())
        .trap_handler(TrapHandler::capture())
        .build()
}

#[test]
fn test_print_statements() {
    let rt = capturing();
    rt.print_not_float(&Value::int(3));
    rt.print_space();
    rt.print_float(1.0);
    rt.print_space();
    rt.print_not_float(&Value::text("ok"));
    rt.print_newline();
    assert_eq!(rt.output(), "3 +1.000000e+000 ok\n");
}

#[test]
fn test_trap_records_line() {
    let rt = capturing();
    let err = rt.check_bounds(-1, 5, 12).unwrap_err();
    assert_eq!(err.line, Some(12));
    assert_eq!(
        rt.diagnostics(),
        vec!["Error: line 12: index -1 is negative. Should be in range of 5".to_string()]
    );
}

#[test]
fn test_successful_call_records_nothing() {
    let rt = capturing();
    assert_eq!(rt.check_bounds(4, 5, 1).unwrap(), 4);
    assert!(rt.diagnostics().is_empty());
}

#[test]
fn test_div_int_by_zero_traps() {
    let rt = capturing();
    let err = rt
        .binary(&Value::int(1), &Value::int(0), BinaryOp::DivInt, 30)
        .unwrap_err();
    assert_eq!(err.kind, RuntimeErrorKind::DivisionByZero);
    assert_eq!(
        rt.diagnostics(),
        vec!["Error: line 30: integer division by zero".to_string()]
    );
}

#[test]
fn test_append_requires_slice() {
    let rt = capturing();
    let err = rt.append(&Value::int(1), &Value::int(2), 4).unwrap_err();
    assert_eq!(
        err.kind,
        RuntimeErrorKind::TypeMismatch {
            expected: "slice",
            got: "number"
        }
    );
}

#[test]
fn test_slice_program() {
    let rt = capturing();
    let mut s = rt.make_slice(0, 3, &Value::int(0), 1).unwrap();
    for n in 1..=3 {
        s = rt.append(&s, &Value::int(n), 2).unwrap();
    }
    assert_eq!(rt.len(&s, 3).unwrap(), 3);
    assert_eq!(rt.cap(&s, 3).unwrap(), 3);
    assert_eq!(rt.index_get(&s, 2, 4).unwrap(), Value::int(3));
    assert!(rt.index_get(&s, 3, 5).is_err());
    assert_eq!(rt.diagnostics().len(), 1);
}

#[test]
fn test_struct_assignment_copies() {
    let rt = capturing();
    let a = Value::composite([("x", Value::int(1))]);
    let mut b = rt.deep_copy(&a, 1).unwrap();
    rt.field_set(&mut b, "x", &Value::int(2), 2).unwrap();
    assert_eq!(rt.field_get(&a, "x", 3).unwrap(), Value::int(1));
    assert!(!rt.deep_eq(&a, &b, 4).unwrap());
}

#[test]
fn test_unary_and_cast() {
    let rt = capturing();
    assert_eq!(
        rt.unary(&Value::int(5), UnaryOp::Neg, 1).unwrap(),
        Value::int(-5)
    );
    assert_eq!(
        rt.cast(&Kind::Int, &Value::Number(2.7), 2).unwrap(),
        Value::int(2)
    );
}

#[test]
fn test_make_array_and_index_set() {
    let rt = capturing();
    let mut s = rt.make_array(2, &Value::text(""), 1).unwrap();
    rt.index_set(&mut s, 1, &Value::text("b"), 2).unwrap();
    assert_eq!(rt.index_get(&s, 1, 3).unwrap(), Value::text("b"));
    assert!(rt.make_array(-1, &Value::int(0), 4).is_err());
}
