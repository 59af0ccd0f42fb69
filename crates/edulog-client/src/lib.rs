//! edulog-client
//!
//! HTTP transport for the session, basic-data and test-result calls.
//! The pipeline talks to the API through the [`source`] traits so it can
//! be driven without a network in tests.

pub mod config;
pub mod error;
pub mod http;
pub mod source;
