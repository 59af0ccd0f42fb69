use thiserror::Error;

use edulog_client::error::ClientError;
use edulog_core::error::CoreError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("authentication failed: {0}")]
    Authentication(#[source] ClientError),

    #[error("identity resolution failed: {0}")]
    Identity(#[from] CoreError),

    #[error("basic data unavailable: {0}")]
    BasicData(#[source] ClientError),

    #[error("HTTP client error: {0}")]
    Client(#[from] ClientError),

    #[error("config error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
