//! edulog-scoring
//!
//! Threshold resolution, score classification, grid colorizing and
//! view-model assembly. Pure and synchronous, with no HTTP dependency.
//! Each assessment category is a static configuration entry in
//! [`categories`]; one generic pipeline serves all of them.

pub mod assemble;
pub mod categories;
pub mod classify;
pub mod colorize;
pub mod error;
pub mod thresholds;

pub use categories::{all_categories, get_category, Category, Shape};
