//! Lenient deserializers for loosely typed payload fields.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Interpret a JSON value as an integer.
///
/// Accepts integer literals, float literals with no fractional part, and
/// numeric strings. `null` and the empty string read as `0`.
///
/// # Errors
/// Returns a description of the offending value when it is not integral.
pub fn int_from_value(value: &Value) -> Result<i64, String> {
    match value {
        Value::Null => Ok(0),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            n.as_f64().and_then(integral_f64).ok_or_else(|| format!("expected integer, found {n}"))
        }
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(0);
            }
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().and_then(integral_f64))
                .ok_or_else(|| format!("expected integer, found string {s:?}"))
        }
        other => Err(format!("expected integer, found {other}")),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn integral_f64(f: f64) -> Option<i64> {
    let in_range = f >= i64::MIN as f64 && f <= i64::MAX as f64;
    (f.is_finite() && f.fract() == 0.0 && in_range).then_some(f as i64)
}

/// `deserialize_with` helper for integer fields.
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    int_from_value(&value).map_err(de::Error::custom)
}

/// `deserialize_with` helper for string fields that sometimes arrive as
/// numbers or booleans.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(int_from_value(&Value::Number(n.clone()))
            .map_or_else(|_| n.to_string(), |i| i.to_string())),
        other => Err(de::Error::custom(format!("expected string, found {other}"))),
    }
}

/// Like [`lenient_string`] but `null` and `""` read as `None`.
pub fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_string(deserializer).map(|s| (!s.is_empty()).then_some(s))
}
