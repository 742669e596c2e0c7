//! Value semantics for Hexagony memory edges.
//!
//! Every memory edge holds a signed arbitrary-precision integer. Division and
//! modulo round towards negative infinity, so the remainder takes the sign of
//! the divisor.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};

/// The value type stored on memory edges.
pub type Value = BigInt;

/// Floor division, or `None` when `rhs` is zero.
pub fn floor_div(lhs: &Value, rhs: &Value) -> Option<Value> {
    if rhs.is_zero() {
        None
    } else {
        Some(lhs.div_floor(rhs))
    }
}

/// Floor modulo, or `None` when `rhs` is zero.
pub fn floor_mod(lhs: &Value, rhs: &Value) -> Option<Value> {
    if rhs.is_zero() {
        None
    } else {
        Some(lhs.mod_floor(rhs))
    }
}

/// Append one decimal digit, growing the magnitude while keeping the sign.
pub fn push_digit(value: &Value, digit: u32) -> Value {
    let shifted = value * 10u32;
    if value.is_negative() {
        shifted - digit
    } else {
        shifted + digit
    }
}

/// The byte written by `;`: the value reduced into `0..256`.
pub fn to_output_byte(value: &Value) -> u8 {
    value.mod_floor(&Value::from(256u32)).to_u8().unwrap_or_default()
}

/// The IP index selected by `#`: the value reduced into `0..6`.
pub fn to_ip_index(value: &Value) -> usize {
    value.mod_floor(&Value::from(6u32)).to_usize().unwrap_or_default()
}

/// True when the value is strictly greater than zero.
#[inline]
pub fn is_positive(value: &Value) -> bool {
    value.is_positive()
}
