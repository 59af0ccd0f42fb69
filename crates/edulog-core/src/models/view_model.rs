//! Flat records handed to the worksheet templates.
//!
//! Every category has its own statically known shape: a shared
//! [`CommonFields`] block plus the extras of its variant. Assembled and
//! fallback records of the same category always carry the same keys.

use std::collections::BTreeMap;

use serde::Serialize;
use ts_rs::TS;

use crate::models::threshold::ScoreBand;

/// Lower bound of the score axis when no usable thresholds exist.
pub const DEFAULT_MIN: f64 = 0.0;

/// Upper bound of the score axis when no usable thresholds exist.
pub const DEFAULT_MAX: f64 = 13.0;

/// Sentinel for sub-band settings that have no business rule yet.
pub const UNDEFINED_SETTING: &str = "TBD";

/// Axis labels printed under the score bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Labels {
    pub label_1: String,
    pub label_2: String,
    pub label_3: String,
    pub label_4: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            label_1: "Label 1".to_string(),
            label_2: "Label 2".to_string(),
            label_3: "Label 3".to_string(),
            label_4: "Label 4".to_string(),
        }
    }
}

/// Split of the score bar into a gray and a green sub-band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct SubBands {
    pub sub_split: String,
    pub sub_min: String,
    pub sub_max: String,
    pub gray_caption: String,
    pub green_caption: String,
}

impl Default for SubBands {
    fn default() -> Self {
        Self {
            sub_split: UNDEFINED_SETTING.to_string(),
            sub_min: UNDEFINED_SETTING.to_string(),
            sub_max: UNDEFINED_SETTING.to_string(),
            gray_caption: UNDEFINED_SETTING.to_string(),
            green_caption: UNDEFINED_SETTING.to_string(),
        }
    }
}

/// Header and score fields shared by every category.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct CommonFields {
    pub name: String,
    pub birthdate: String,
    /// `"years,months"`.
    pub age: String,
    pub language: String,
    pub since: String,
    pub date: String,
    pub teacher: String,
    pub company: String,
    pub location: String,
    pub min: f64,
    pub max: f64,
    pub score: f64,
    pub colors: Vec<String>,
    pub ranges: Vec<ScoreBand>,
    pub assessment: String,
    #[serde(flatten)]
    pub labels: Labels,
    #[serde(flatten)]
    pub sub_bands: SubBands,
}

impl Default for CommonFields {
    fn default() -> Self {
        Self {
            name: String::new(),
            birthdate: String::new(),
            age: String::new(),
            language: String::new(),
            since: String::new(),
            date: String::new(),
            teacher: String::new(),
            company: String::new(),
            location: String::new(),
            min: DEFAULT_MIN,
            // Keeps a non-empty scale span so the score bar still renders.
            max: DEFAULT_MAX,
            score: 0.0,
            colors: Vec::new(),
            ranges: Vec::new(),
            assessment: String::new(),
            labels: Labels::default(),
            sub_bands: SubBands::default(),
        }
    }
}

/// Categories with a pass/fail results grid.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct GridViewModel {
    #[serde(flatten)]
    pub common: CommonFields,
    /// Flag name → cell color (`""` when unevaluated).
    pub items: BTreeMap<String, String>,
}

/// Gross-motor worksheets: balance time and jump count.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct MotorViewModel {
    #[serde(flatten)]
    pub common: CommonFields,
    pub balance_seconds: f64,
    pub jump_count: f64,
}

/// Observation worksheets: who observed and in which setting.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct ObservationViewModel {
    #[serde(flatten)]
    pub common: CommonFields,
    pub observer: String,
    pub setting: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum ViewModel {
    Grid(GridViewModel),
    Motor(MotorViewModel),
    Observation(ObservationViewModel),
}

impl ViewModel {
    pub fn common(&self) -> &CommonFields {
        match self {
            ViewModel::Grid(vm) => &vm.common,
            ViewModel::Motor(vm) => &vm.common,
            ViewModel::Observation(vm) => &vm.common,
        }
    }

    /// Per-item colors, for categories that have a results grid.
    pub fn items(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            ViewModel::Grid(vm) => Some(&vm.items),
            _ => None,
        }
    }
}
