//! edulog-core
//!
//! Pure domain types for the assessment report pipeline: the session
//! payload, threshold tables, raw records and the flat view-models handed
//! to the page templates. No HTTP dependency; this is the shared
//! vocabulary of the other edulog crates.

pub mod age;
pub mod api_paths;
pub mod error;
pub mod fields;
pub mod models;
