//! The per-worksheet strategy table.

pub mod feinmotorik;
pub mod grobmotorik;
pub mod phonologische_bewusstheit;
pub mod sozial_emotional;
pub mod sprachverstaendnis;
pub mod zahlenverstaendnis;

/// Static configuration of one assessment category ("folder").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Worksheet id used by callers and cache keys.
    pub id: &'static str,
    /// Threshold category name, compared byte-for-byte.
    pub label: &'static str,
    /// Key of this category's blob in the test-result response.
    pub result_key: &'static str,
    /// Numeric score field inside the blob.
    pub score_field: &'static str,
    pub shape: Shape,
}

/// Category-specific part of the view-model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Pass/fail grid read from the first result item, in display order.
    Grid { flags: &'static [&'static str] },
    Motor {
        balance_field: &'static str,
        jumps_field: &'static str,
    },
    Observation {
        observer_field: &'static str,
        setting_field: &'static str,
    },
}

static CATEGORIES: [Category; 6] = [
    sprachverstaendnis::CATEGORY,
    phonologische_bewusstheit::CATEGORY,
    feinmotorik::CATEGORY,
    zahlenverstaendnis::CATEGORY,
    grobmotorik::CATEGORY,
    sozial_emotional::CATEGORY,
];

/// Return all registered categories.
pub fn all_categories() -> &'static [Category] {
    &CATEGORIES
}

/// Look up a category by worksheet id.
pub fn get_category(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}
