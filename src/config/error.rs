//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Ranking size must be at least 1")]
    InvalidTopN,

    #[error("Log path must not be empty")]
    EmptyLogPath,

    #[error("Log retries exceeds maximum allowed (10)")]
    TooManyLogRetries,

    #[error("Contact region '{0}' has an empty number")]
    EmptyContactNumber(String),
}
