//! edulog-export
//!
//! Worksheet HTML generation from assembled view-models. The HTML is what
//! the print pipeline turns into PDF.

pub mod error;
pub mod render;
