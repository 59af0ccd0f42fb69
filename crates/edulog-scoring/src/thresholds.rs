use edulog_core::models::colors::ColorSpec;
use edulog_core::models::threshold::{ScoreBand, Threshold};
use edulog_core::models::view_model::{DEFAULT_MAX, DEFAULT_MIN};

use crate::error::ScoringError;

/// Number of proficiency levels a complete category table carries.
pub const LEVEL_COUNT: usize = 6;

/// The score axis of one category, derived from its threshold table.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedScale {
    pub min: f64,
    pub max: f64,
    pub ranges: Vec<ScoreBand>,
    pub colors: Vec<String>,
    /// Matching thresholds in ascending level order.
    pub levels: Vec<Threshold>,
}

impl ResolvedScale {
    /// The scale used when a category has no usable threshold table.
    pub fn unconfigured() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            ranges: Vec::new(),
            colors: Vec::new(),
            levels: Vec::new(),
        }
    }
}

/// Resolve the scale for `category` out of the institution's full
/// threshold collection.
///
/// The category name is compared byte-for-byte. Fewer than
/// [`LEVEL_COUNT`] matches is reported as
/// [`ScoringError::InsufficientThresholds`]; callers fall back to
/// [`ResolvedScale::unconfigured`]. Ranges are passed through in level
/// order without checking for gaps or overlap.
pub fn resolve(
    thresholds: &[Threshold],
    colors: &ColorSpec,
    category: &str,
) -> Result<ResolvedScale, ScoringError> {
    let mut levels: Vec<Threshold> = thresholds
        .iter()
        .filter(|t| t.category == category)
        .cloned()
        .collect();

    if levels.len() < LEVEL_COUNT {
        return Err(ScoringError::InsufficientThresholds {
            category: category.to_string(),
            found: levels.len(),
            required: LEVEL_COUNT,
        });
    }
    if levels.len() > LEVEL_COUNT {
        tracing::warn!(
            category,
            found = levels.len(),
            "more threshold entries than levels, keeping all"
        );
    }

    // Stable: duplicate levels keep their source order.
    levels.sort_by_key(|t| t.level);

    let min = levels
        .iter()
        .find(|t| t.level == 1)
        .and_then(|t| t.min)
        .unwrap_or(DEFAULT_MIN);
    let max = levels
        .iter()
        .find(|t| t.level == LEVEL_COUNT as i64)
        .and_then(|t| t.max)
        .unwrap_or(DEFAULT_MAX);

    let ranges = levels
        .iter()
        .map(|t| ScoreBand {
            start: t.min.unwrap_or(0.0),
            end: t.max.unwrap_or(0.0),
        })
        .collect();

    Ok(ResolvedScale {
        min,
        max,
        ranges,
        colors: colors.as_slice().to_vec(),
        levels,
    })
}
