use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::fields::{de_level, de_optional_number, de_text};

/// One of the six severity bands configured per category and institution.
///
/// `min`/`max` stay `None` when the API sends something non-numeric so the
/// resolver can apply a different default to the outer bounds than to the
/// individual ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Threshold {
    #[serde(default, alias = "kategorie", deserialize_with = "de_text")]
    pub category: String,
    #[serde(default, alias = "stufe", deserialize_with = "de_level")]
    pub level: i64,
    #[serde(default, deserialize_with = "de_optional_number")]
    pub min: Option<f64>,
    #[serde(default, deserialize_with = "de_optional_number")]
    pub max: Option<f64>,
    /// Short band name, e.g. "Stufe 4".
    #[serde(default, alias = "bezeichnung", deserialize_with = "de_text")]
    pub label: String,
    /// Assessment text printed on the worksheet when the score falls in
    /// this band.
    #[serde(default, alias = "beschreibung", deserialize_with = "de_text")]
    pub description: String,
}

impl Threshold {
    /// Inclusive band test. Missing bounds count as `0`.
    pub fn contains(&self, score: f64) -> bool {
        score >= self.min.unwrap_or(0.0) && score <= self.max.unwrap_or(0.0)
    }
}

/// A `[start, end]` pair as rendered on the worksheet's score bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreBand {
    pub start: f64,
    pub end: f64,
}
