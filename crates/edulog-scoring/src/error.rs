use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ScoringError {
    #[error("insufficient thresholds for '{category}': found {found}, need {required}")]
    InsufficientThresholds {
        category: String,
        found: usize,
        required: usize,
    },
}
