//! Lenient field parsing for loosely typed API payloads.
//!
//! The upstream API mixes numbers, numeric strings and nulls in the same
//! field across records. Everything here coerces instead of failing so the
//! view-model can always be fully populated.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Coerce a JSON value to a number, `0.0` when it is not numeric.
pub fn number(value: &Value) -> f64 {
    optional_number(value).unwrap_or(0.0)
}

/// Coerce a JSON value to a number, `None` when it is not numeric.
///
/// Strings are trimmed and parsed; an empty string is not a number.
pub fn optional_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

/// Coerce a JSON value to display text. Null and containers become `""`.
pub fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Look up `key` in `map` and coerce it with [`number`]. Absent → `0.0`.
pub fn number_field(map: &Map<String, Value>, key: &str) -> f64 {
    map.get(key).map(number).unwrap_or(0.0)
}

/// Look up `key` in `map` and coerce it with [`text`]. Absent → `""`.
pub fn text_field(map: &Map<String, Value>, key: &str) -> String {
    map.get(key).map(text).unwrap_or_default()
}

/// Return the first non-empty text among several alias field names.
pub fn first_text(map: &Map<String, Value>, aliases: &[&str]) -> String {
    aliases
        .iter()
        .map(|key| text_field(map, key))
        .find(|s| !s.is_empty())
        .unwrap_or_default()
}

/// Serde helper: deserialize any JSON value into `Option<f64>` via
/// [`optional_number`].
pub fn de_optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(optional_number(&value))
}

/// Serde helper: deserialize any JSON value into an integer level,
/// `0` when non-numeric.
pub fn de_level<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number(&value) as i64)
}

/// Serde helper: deserialize any JSON value into text via [`text`].
pub fn de_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(text(&value))
}

/// Serde helper: deserialize an id that may be a number or a string.
/// Null, empty and `0` are treated as absent.
pub fn de_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let id = text(&value);
    Ok((!id.is_empty() && id != "0").then_some(id))
}

/// Serde helper: treat an explicit `null` like a missing field.
pub fn de_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
