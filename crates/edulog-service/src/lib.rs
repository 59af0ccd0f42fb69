//! edulog-service
//!
//! The adapter boundary between the page and the API: reads the page
//! parameters, authenticates, fetches the raw records, assembles the
//! view-model and caches it. Every upstream failure ends in the category's
//! fallback record; callers never see a partially filled view-model.

pub mod cache;
pub mod config;
pub mod error;
pub mod params;
pub mod service;
