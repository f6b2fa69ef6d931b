//! Numeric operator set over `f64` operands.
//!
//! Every GoLite number is carried as a double. Operators that GoLite defines
//! on fixed-width integers first coerce each operand to a 32-bit two's
//! complement integer with [`to_int32`], operate on `i32`, and widen the
//! result back. The remaining operators keep IEEE-754 semantics.
//!
//! Only [`div_int`] can fail: integer division by zero is fatal, while
//! [`div`] yields an infinity or NaN.

use crate::errors::{division_by_zero, RtResult};

const TWO_POW_32: f64 = 4_294_967_296.0;

/// Coerce a double to a 32-bit two's complement integer.
///
/// Non-finite inputs map to 0; finite inputs are truncated toward zero and
/// reduced modulo 2^32.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    reason = "value is an integer in [0, 2^32) before the casts"
)]
pub fn to_int32(x: f64) -> i32 {
    if !x.is_finite() {
        return 0;
    }
    let reduced = x.trunc().rem_euclid(TWO_POW_32);
    (reduced as u32) as i32
}

#[inline]
fn int_op(a: f64, b: f64, op: impl FnOnce(i32, i32) -> i32) -> f64 {
    f64::from(op(to_int32(a), to_int32(b)))
}

// Ordering

#[inline]
pub fn lt(a: f64, b: f64) -> bool {
    a < b
}

#[inline]
pub fn leq(a: f64, b: f64) -> bool {
    a <= b
}

#[inline]
pub fn gt(a: f64, b: f64) -> bool {
    a > b
}

#[inline]
pub fn geq(a: f64, b: f64) -> bool {
    a >= b
}

// IEEE arithmetic

#[inline]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

#[inline]
pub fn sub(a: f64, b: f64) -> f64 {
    a - b
}

#[inline]
pub fn mul(a: f64, b: f64) -> f64 {
    a * b
}

/// Floating division; a zero divisor gives an infinity or NaN.
#[inline]
pub fn div(a: f64, b: f64) -> f64 {
    a / b
}

/// Truncating remainder, coerced to 32 bits.
///
/// The sign follows the dividend: `modulo(-7, 3) == -1`. A zero divisor
/// produces NaN, which coerces to 0.
#[inline]
pub fn modulo(a: f64, b: f64) -> f64 {
    f64::from(to_int32(a % b))
}

// Bitwise

pub fn bw_or(a: f64, b: f64) -> f64 {
    int_op(a, b, |x, y| x | y)
}

pub fn bw_xor(a: f64, b: f64) -> f64 {
    int_op(a, b, |x, y| x ^ y)
}

pub fn bw_and(a: f64, b: f64) -> f64 {
    int_op(a, b, |x, y| x & y)
}

/// `a &^ b`: bits of `a` not set in `b`.
pub fn bw_and_not(a: f64, b: f64) -> f64 {
    int_op(a, b, |x, y| x & !y)
}

/// Left shift; the count is taken modulo 32.
#[expect(clippy::cast_sign_loss, reason = "shift count is masked to 5 bits")]
pub fn lshift(a: f64, b: f64) -> f64 {
    int_op(a, b, |x, y| x.wrapping_shl((y & 31) as u32))
}

/// Arithmetic right shift; the count is taken modulo 32.
#[expect(clippy::cast_sign_loss, reason = "shift count is masked to 5 bits")]
pub fn rshift(a: f64, b: f64) -> f64 {
    int_op(a, b, |x, y| x.wrapping_shr((y & 31) as u32))
}

// Fixed-width integer arithmetic

pub fn add_int(a: f64, b: f64) -> f64 {
    int_op(a, b, i32::wrapping_add)
}

pub fn sub_int(a: f64, b: f64) -> f64 {
    int_op(a, b, i32::wrapping_sub)
}

/// Wrapping multiply, exact even when the true product exceeds 2^53.
pub fn mul_int(a: f64, b: f64) -> f64 {
    int_op(a, b, i32::wrapping_mul)
}

/// Truncating division. `i32::MIN / -1` wraps to `i32::MIN`.
pub fn div_int(a: f64, b: f64) -> RtResult<f64> {
    let divisor = to_int32(b);
    if divisor == 0 {
        return Err(division_by_zero());
    }
    Ok(f64::from(to_int32(a).wrapping_div(divisor)))
}

// Unary

#[inline]
pub fn plus(a: f64) -> f64 {
    a
}

#[inline]
pub fn neg(a: f64) -> f64 {
    -a
}

pub fn bw_compl(a: f64) -> f64 {
    f64::from(!to_int32(a))
}

#[inline]
pub fn not(a: bool) -> bool {
    !a
}
