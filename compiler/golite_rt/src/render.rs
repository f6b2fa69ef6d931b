//! Canonical text rendering of numbers.
//!
//! Floats print in the fixed scientific form GoLite's `print` uses:
//! explicit sign, one integral digit, six fractional digits, and a signed
//! exponent padded to three digits (`+1.000000e+000`, `-2.500000e-003`).
//! Non-float numbers print in their shortest natural form.

use std::fmt::Write;

/// Render a float for `print_float`.
///
/// Non-finite values render as `NaN`, `+Inf` and `-Inf`. Negative zero
/// renders with a `+` sign. Exact decimal ties round away from zero.
pub fn format_float(x: f64) -> String {
    if let Some(special) = non_finite(x) {
        return special.to_string();
    }
    // Normalize -0.0 so the sign below comes out as `+`.
    let x = if x == 0.0 { 0.0 } else { x };
    let (mantissa, exponent) = seven_digits(x.abs());

    let mut out = String::with_capacity(14);
    out.push(if x < 0.0 { '-' } else { '+' });
    let _ = write!(out, "{}.{:06}", mantissa / 1_000_000, mantissa % 1_000_000);
    out.push('e');
    out.push(if exponent < 0 { '-' } else { '+' });
    let _ = write!(out, "{:03}", exponent.unsigned_abs());
    out
}

/// Seven significant digits of `abs` as an integer, with its decimal exponent.
///
/// `{:e}` with a precision rounds ties to even, so the digits come from a
/// long expansion and the eighth digit decides the rounding.
fn seven_digits(abs: f64) -> (u32, i32) {
    let expanded = format!("{abs:.30e}");
    let (digits, exponent) = expanded
        .split_once('e')
        .unwrap_or((expanded.as_str(), "0"));
    let mut exponent: i32 = exponent.parse().unwrap_or(0);

    let mut digits = digits.chars().filter_map(|c| c.to_digit(10));
    let mut mantissa = digits.by_ref().take(7).fold(0, |acc, d| acc * 10 + d);
    if digits.next().is_some_and(|d| d >= 5) {
        mantissa += 1;
    }
    if mantissa >= 10_000_000 {
        mantissa /= 10;
        exponent += 1;
    }
    (mantissa, exponent)
}

/// Render a non-float number in its shortest form (`3`, `-7`, `0.5`).
///
/// Magnitudes of `1e21` and above, or below `1e-6`, switch to exponent
/// form with a signed exponent (`1e+21`, `1.5e-7`).
pub fn format_number(x: f64) -> String {
    if let Some(special) = non_finite(x) {
        return special.to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }
    let abs = x.abs();
    if !(1e-6..1e21).contains(&abs) {
        let exponential = format!("{x:e}");
        return match exponential.split_once('e') {
            Some((digits, exponent)) if !exponent.starts_with('-') => {
                format!("{digits}e+{exponent}")
            }
            _ => exponential,
        };
    }
    x.to_string()
}

fn non_finite(x: f64) -> Option<&'static str> {
    if x.is_nan() {
        Some("NaN")
    } else if x.is_infinite() {
        Some(if x > 0.0 { "+Inf" } else { "-Inf" })
    } else {
        None
    }
}
