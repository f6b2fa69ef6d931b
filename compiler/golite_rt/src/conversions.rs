//! Type conversions: `int(x)`, `float64(x)`, `rune(x)`, `string(x)`.

use crate::errors::{type_mismatch, RtResult};
use crate::numeric::to_int32;
use crate::value::{Kind, Value};

/// Convert `value` to the type described by `target`.
///
/// Integer targets truncate toward zero and wrap to 32 bits. Converting a
/// number to `string` yields the character with that code point, or U+FFFD
/// when the code point is invalid. Identity conversions return the value
/// unchanged.
pub fn cast(target: &Kind, value: &Value) -> RtResult<Value> {
    match (target, value) {
        (Kind::Int | Kind::Rune, Value::Number(n)) => Ok(Value::int(to_int32(*n))),
        (Kind::Float, Value::Number(n)) => Ok(Value::Number(*n)),
        (Kind::String, Value::Number(n)) => Ok(Value::text(code_point_to_string(*n))),
        (Kind::String, Value::Text(_)) | (Kind::Bool, Value::Bool(_)) => Ok(value.clone()),
        _ => Err(type_mismatch(kind_name(target), value.type_name())),
    }
}

fn code_point_to_string(n: f64) -> String {
    u32::try_from(to_int32(n))
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
        .to_string()
}

fn kind_name(kind: &Kind) -> &'static str {
    match kind {
        Kind::Int => "int",
        Kind::Float => "float64",
        Kind::Rune => "rune",
        Kind::String => "string",
        Kind::Bool => "bool",
        Kind::Array(..) => "array",
        Kind::Slice(_) => "slice",
        Kind::Struct(_) => "struct",
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use crate::errors::RuntimeErrorKind;

    #[test]
    fn int_truncates_toward_zero() {
        assert_eq!(cast(&Kind::Int, &Value::Number(3.9)).unwrap(), Value::int(3));
        assert_eq!(cast(&Kind::Int, &Value::Number(-3.9)).unwrap(), Value::int(-3));
    }

    #[test]
    fn int_wraps_to_32_bits() {
        assert_eq!(
            cast(&Kind::Int, &Value::Number(2_147_483_648.0)).unwrap(),
            Value::int(i32::MIN)
        );
    }

    #[test]
    fn float_keeps_value() {
        assert_eq!(cast(&Kind::Float, &Value::int(7)).unwrap(), Value::Number(7.0));
    }

    #[test]
    fn string_from_code_point() {
        assert_eq!(cast(&Kind::String, &Value::int(65)).unwrap(), Value::text("A"));
        assert_eq!(
            cast(&Kind::String, &Value::int(0x4E16)).unwrap(),
            Value::text("\u{4E16}")
        );
    }

    #[test]
    fn string_from_invalid_code_point() {
        let replacement = Value::text("\u{FFFD}");
        assert_eq!(cast(&Kind::String, &Value::int(-1)).unwrap(), replacement);
        assert_eq!(cast(&Kind::String, &Value::int(0xD800)).unwrap(), replacement);
    }

    #[test]
    fn identity_conversions() {
        assert_eq!(cast(&Kind::String, &Value::text("s")).unwrap(), Value::text("s"));
        assert_eq!(cast(&Kind::Bool, &Value::Bool(true)).unwrap(), Value::Bool(true));
    }

    #[test]
    fn rejects_unsupported_conversion() {
        assert_eq!(
            cast(&Kind::Int, &Value::text("1")).unwrap_err().kind,
            RuntimeErrorKind::TypeMismatch {
                expected: "int",
                got: "string"
            }
        );
    }
}
