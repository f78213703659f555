//! Scalar type inference for raw text tokens.
//!
//! Both parsers hand every scalar token to [`coerce`]. Rules apply in order:
//!
//! | Token | Result |
//! |-------|--------|
//! | empty | `String("")` |
//! | `null` (any case) | `Null` |
//! | `true` / `false` (any case) | `Bool` |
//! | `-?[0-9]+` | `Int` |
//! | `-?[0-9]+.[0-9]+` | `Float` |
//! | anything else | `String` |
//!
//! Coercion never fails.

use crate::Value;
use num_bigint::BigInt;

/// Infers the scalar value of a token. Surrounding whitespace is ignored.
///
/// # Examples
///
/// ```rust
/// use colonpipe::{coerce, Value};
///
/// assert_eq!(coerce(" 30 "), Value::from(30));
/// assert_eq!(coerce("-2.50"), Value::from(-2.5));
/// assert_eq!(coerce("TRUE"), Value::from(true));
/// assert_eq!(coerce("Null"), Value::Null);
/// assert_eq!(coerce("1e6"), Value::from("1e6"));
/// assert_eq!(coerce(""), Value::from(""));
/// ```
#[must_use]
pub fn coerce(token: &str) -> Value {
    let t = token.trim();
    if t.is_empty() {
        return Value::String(String::new());
    }
    if t.eq_ignore_ascii_case("null") {
        return Value::Null;
    }
    if t.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if t.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if is_integer(t) {
        if let Ok(i) = t.parse::<BigInt>() {
            return Value::Int(i);
        }
    }
    if is_decimal(t) {
        if let Ok(f) = t.parse::<f64>() {
            return Value::Float(f);
        }
    }
    Value::String(t.to_string())
}

/// `-?[0-9]+`
fn is_integer(t: &str) -> bool {
    let digits = t.strip_prefix('-').unwrap_or(t);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// `-?[0-9]+\.[0-9]+`
fn is_decimal(t: &str) -> bool {
    let unsigned = t.strip_prefix('-').unwrap_or(t);
    match unsigned.split_once('.') {
        Some((whole, frac)) => {
            !whole.is_empty()
                && !frac.is_empty()
                && whole.bytes().all(|b| b.is_ascii_digit())
                && frac.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}
