use std::path::Path;

use serde::{Deserialize, Serialize};

use edulog_client::config::{ApiConfig, DEFAULT_TIMEOUT_SECS};

use crate::error::ServiceError;

/// Current config version. Bump this when adding fields or changing shape.
const CURRENT_VERSION: u32 = 1;

pub const DEFAULT_CACHE_CAPACITY: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub base_url: String,
    pub auth_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Upper bound for each of the session and view-model caches.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_cache_capacity() -> usize {
    DEFAULT_CACHE_CAPACITY
}

impl ServiceConfig {
    pub fn new(base_url: impl Into<String>, auth_url: impl Into<String>) -> Self {
        Self {
            config_version: CURRENT_VERSION,
            base_url: base_url.into(),
            auth_url: auth_url.into(),
            api_key: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }

    /// Load a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ServiceError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ServiceError::Config(format!("failed to read config at {}: {e}", path.display()))
        })?;
        let config: ServiceConfig = serde_json::from_str(&contents)?;

        if config.config_version > CURRENT_VERSION {
            return Err(ServiceError::Config(format!(
                "config_version {} is newer than this build supports ({CURRENT_VERSION})",
                config.config_version
            )));
        }
        if config.base_url.trim().is_empty() || config.auth_url.trim().is_empty() {
            return Err(ServiceError::Config(
                "base_url and auth_url must not be empty".to_string(),
            ));
        }

        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn api(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.clone(),
            auth_url: self.auth_url.clone(),
            api_key: self.api_key.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}
