//! Value Coercion
//!
//! Loose conversions from stored JSON values, mirroring how the browser
//! coerces values with `Number()` and `String()`.

use serde_json::Value;

/// Convert a JSON value to a finite number.
///
/// Numeric strings parse, blank strings, `null` and `false` are 0, `true`
/// is 1. Everything else is not a number.
pub fn to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|n| n.is_finite()),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                Some(0.0)
            } else {
                s.parse::<f64>().ok().filter(|n| n.is_finite())
            }
        }
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null => Some(0.0),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Non-negative unit price; anything unusable is 0
pub fn to_price(value: &Value) -> f64 {
    to_number(value).filter(|n| *n > 0.0).unwrap_or(0.0)
}

/// Non-negative whole quantity; fractions truncate, anything unusable is 0
pub fn to_quantity(value: &Value) -> u32 {
    to_number(value).map(number_to_quantity).unwrap_or(0)
}

pub fn number_to_quantity(n: f64) -> u32 {
    if n.is_nan() || n <= 0.0 {
        0
    } else {
        n.trunc().min(u32::MAX as f64) as u32
    }
}

/// Identifier as a string. Falsy values (`""`, `0`, `false`, `null`) and
/// containers yield nothing.
pub fn to_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                (i != 0).then(|| i.to_string())
            } else if let Some(u) = n.as_u64() {
                Some(u.to_string())
            } else {
                n.as_f64().filter(|f| *f != 0.0).map(|f| f.to_string())
            }
        }
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// Display text; `null` yields nothing
pub fn to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
