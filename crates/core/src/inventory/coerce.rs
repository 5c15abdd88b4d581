//! Conversions from loosely-typed request values to record field types.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;

use super::error::CoercionError;

/// Converts a value to an integer.
///
/// Integers pass through. Finite floats are truncated toward zero. Strings are
/// trimmed and parsed as base-10.
pub fn to_integer(field: &'static str, value: &Value) -> Result<i64, CoercionError> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            match n.as_f64() {
                Some(f) if f.is_finite() && f.trunc().abs() < i64::MAX as f64 => Ok(f.trunc() as i64),
                _ => Err(CoercionError::new(field, format!("{n} is out of range"))),
            }
        }
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|e| CoercionError::new(field, format!("{s:?}: {e}"))),
        other => Err(CoercionError::new(
            field,
            format!("expected an integer, got {}", type_name(other)),
        )),
    }
}

/// Converts a value to an exact decimal.
///
/// The decimal is always built from the textual form of the value, so a JSON
/// number such as `19.99` becomes exactly `19.99`.
pub fn to_decimal(field: &'static str, value: &Value) -> Result<Decimal, CoercionError> {
    let text = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        other => {
            return Err(CoercionError::new(
                field,
                format!("expected a decimal, got {}", type_name(other)),
            ))
        }
    };

    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|e| CoercionError::new(field, format!("{text:?}: {e}")))
}

/// Converts a scalar value to text.
pub fn to_text(field: &'static str, value: &Value) -> Result<String, CoercionError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(CoercionError::new(
            field,
            format!("expected text, got {}", type_name(other)),
        )),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
