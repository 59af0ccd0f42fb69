use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::fields::text;

/// Ordered band colors, index-aligned with the sorted threshold levels.
///
/// The API sends either a list of color tokens, a list of objects with a
/// `color` field, or a comma-separated string. All three normalize to the
/// same ordered list; source order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ColorSpec(pub Vec<String>);

impl ColorSpec {
    pub fn from_value(value: &Value) -> Self {
        let colors = match value {
            Value::Array(entries) => entries.iter().map(color_of).collect(),
            Value::String(csv) => csv
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        };
        Self(colors)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn color_of(entry: &Value) -> String {
    match entry {
        Value::Object(obj) => match obj.get("color") {
            Some(color) if !color.is_null() => text(color),
            // No color field: the object stands in for itself.
            _ => entry.to_string(),
        },
        other => text(other),
    }
}

impl<'de> Deserialize<'de> for ColorSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}
