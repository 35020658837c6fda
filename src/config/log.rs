//! Answer log configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Answer log configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Path of the JSON log file.
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// How many times a failed append is retried before being dropped.
    #[serde(default = "default_retries")]
    pub retries: u32,
}

fn default_path() -> PathBuf {
    PathBuf::from("symptom_logs.json")
}

fn default_retries() -> u32 {
    1
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            retries: default_retries(),
        }
    }
}

impl LogConfig {
    /// Validate log configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.path.as_os_str().is_empty() {
            return Err(ValidationError::EmptyLogPath);
        }
        if self.retries > 10 {
            return Err(ValidationError::TooManyLogRetries);
        }
        Ok(())
    }
}
