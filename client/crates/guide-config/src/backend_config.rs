use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BACKEND_TIMEOUT_SECS, DEFAULT_BACKEND_URL,
    MAX_BACKEND_TIMEOUT_SECS, MIN_BACKEND_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Remote search / identity backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL, e.g. "http://localhost:8000"
    pub url: String,
    /// Per-request timeout
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: String::from(DEFAULT_BACKEND_URL),
            timeout_secs: DEFAULT_BACKEND_TIMEOUT_SECS,
        }
    }
}

impl BackendConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.url.starts_with("http://") || self.url.starts_with("https://")) {
            return Err(ConfigError::backend(format!(
                "backend.url must start with http:// or https://, got '{}'",
                self.url
            )));
        }

        if self.timeout_secs < MIN_BACKEND_TIMEOUT_SECS
            || self.timeout_secs > MAX_BACKEND_TIMEOUT_SECS
        {
            return Err(ConfigError::backend(format!(
                "backend.timeout_secs must be {}-{}, got {}",
                MIN_BACKEND_TIMEOUT_SECS, MAX_BACKEND_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
