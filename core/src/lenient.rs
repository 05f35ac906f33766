//! Lenient deserializers for client supplied JSON.
//!
//! Browser clients send loosely typed values: an ISBN as a number, a count as
//! a string. These helpers accept such shapes instead of failing the whole
//! body. Use them with `#[serde(default, deserialize_with = "...")]`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Read a string, number or boolean as text.
///
/// Any other shape, `null` included, reads as `None`.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(v) => Some(v),
        Value::Number(v) => Some(v.to_string()),
        Value::Bool(v) => Some(v.to_string()),
        _ => None,
    })
}

/// Read a non-negative number or numeric string as a count.
///
/// Fractions are truncated and values above `u32::MAX` saturate. Negative,
/// non numeric or missing values read as `None`.
pub fn count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = match Value::deserialize(deserializer)? {
        Value::Number(v) => v.as_f64(),
        Value::String(v) => v.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(v.filter(|v| v.is_finite() && *v >= 0.0).map(|v| v as u32))
}
