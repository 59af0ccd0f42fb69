use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::fields::{first_text, number_field, text_field};

/// Demographic record returned by the basic-data call.
///
/// Field names differ between API versions, so every accessor checks the
/// German name first and the English one second.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BasicRecord(pub Map<String, Value>);

impl BasicRecord {
    /// The basic-data call answers with either an array or a single object.
    /// Arrays contribute their first element.
    pub fn from_response(value: Value) -> Option<Self> {
        match value {
            Value::Array(items) => items.into_iter().find_map(|item| match item {
                Value::Object(map) => Some(Self(map)),
                _ => None,
            }),
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// First and last name joined by a space, trimmed.
    pub fn full_name(&self) -> String {
        let first = first_text(&self.0, &["vorname", "first_name", "firstname"]);
        let last = first_text(&self.0, &["nachname", "last_name", "lastname"]);
        format!("{first} {last}").trim().to_string()
    }

    pub fn birthdate(&self) -> String {
        first_text(&self.0, &["geburtsdatum", "birthdate", "birthday"])
    }

    pub fn language(&self) -> String {
        first_text(&self.0, &["sprache", "language", "muttersprache"])
    }

    /// Date since which the child attends the institution.
    pub fn since(&self) -> String {
        first_text(&self.0, &["seit", "since", "aufnahmedatum"])
    }

    /// Date of the assessment.
    pub fn date(&self) -> String {
        first_text(&self.0, &["datum", "date", "testdatum"])
    }

    pub fn teacher(&self) -> String {
        first_text(&self.0, &["paedagoge", "erzieher", "teacher"])
    }
}

/// Category-specific result blob from the test-result call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawTestResult(pub Map<String, Value>);

impl RawTestResult {
    /// Pick the blob stored under `key` in the test-result response.
    pub fn from_response(response: &Value, key: &str) -> Option<Self> {
        match response.get(key)? {
            Value::Object(map) => Some(Self(map.clone())),
            // Some endpoints wrap the blob in a one-element list.
            Value::Array(items) => items.iter().find_map(|item| match item {
                Value::Object(map) => Some(Self(map.clone())),
                _ => None,
            }),
            _ => None,
        }
    }

    pub fn number(&self, field: &str) -> f64 {
        number_field(&self.0, field)
    }

    pub fn text(&self, field: &str) -> String {
        text_field(&self.0, field)
    }

    /// The first entry of `items`, which carries the evaluation flags.
    pub fn first_item(&self) -> Option<&Map<String, Value>> {
        self.0.get("items")?.as_array()?.first()?.as_object()
    }
}
