use serde_json::Value;
use thiserror::Error;

/// A `scores` field whose value cannot be read as the expected number
#[derive(Debug, Clone, PartialEq, Error)]
#[error("cannot convert {field} value {value} to {expected}")]
pub struct CoercionError {
    pub field: &'static str,
    pub value: Value,
    pub expected: &'static str,
}

impl CoercionError {
    fn new(field: &'static str, value: &Value, expected: &'static str) -> Self {
        Self {
            field,
            value: value.clone(),
            expected,
        }
    }
}

/// Coerce a `quantity` value to an integer
///
/// Integers pass through, floats are truncated toward zero, strings must
/// hold a decimal integer (surrounding whitespace allowed), booleans map
/// to 1 and 0.
pub fn coerce_quantity(value: &Value) -> Result<i64, CoercionError> {
    let err = || CoercionError::new("quantity", value, "an integer");

    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            let f = n.as_f64().ok_or_else(err)?;
            truncate(f).ok_or_else(err)
        }
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| err()),
        Value::Bool(b) => Ok(i64::from(*b)),
        _ => Err(err()),
    }
}

/// Coerce a `score` value to a float
///
/// Numbers pass through, strings are parsed as floats (surrounding
/// whitespace allowed), booleans map to 1.0 and 0.0. NaN and infinities
/// are rejected since JSON output cannot carry them.
pub fn coerce_score(value: &Value) -> Result<f64, CoercionError> {
    let err = || CoercionError::new("score", value, "a finite float");

    let score = match value {
        Value::Number(n) => n.as_f64().ok_or_else(err)?,
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| err())?,
        Value::Bool(b) => f64::from(u8::from(*b)),
        _ => return Err(err()),
    };

    if score.is_finite() {
        Ok(score)
    } else {
        Err(err())
    }
}

#[inline]
fn truncate(f: f64) -> Option<i64> {
    let t = f.trunc();
    // i64::MAX is not representable as f64; the bound is exclusive
    if t.is_finite() && t >= i64::MIN as f64 && t < i64::MAX as f64 {
        Some(t as i64)
    } else {
        None
    }
}
