//! Deserializers for dataset fields whose stored type varies between
//! records. CSV imports leave numbers as int32, double or numeric strings.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn number_from(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Any number or numeric string; anything else reads as 0.
pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_from(&value).filter(|f| f.is_finite()).unwrap_or(0.0))
}

/// Any non-negative number or numeric string, rounded up to whole days.
pub fn days<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match number_from(&value) {
        Some(f) if f.is_finite() && f > 0.0 => Ok(f.ceil().min(u32::MAX as f64) as u32),
        _ => Ok(0),
    }
}

/// Free text that is sometimes stored as a number ("5 km" vs 5).
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    })
}
