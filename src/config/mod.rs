//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `DIAGARP` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use diagarp::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Logging to {}", config.log.path.display());
//! ```

mod contacts;
mod engine;
mod error;
mod log;

pub use contacts::{ContactsConfig, FALLBACK_REGION};
pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use log::LogConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Evaluation engine tuning (policy, ranking size)
    #[serde(default)]
    pub engine: EngineConfig,

    /// Answer log file and retry behavior
    #[serde(default)]
    pub log: LogConfig,

    /// Emergency veterinary contacts by region
    #[serde(default)]
    pub contacts: ContactsConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `DIAGARP` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `DIAGARP__ENGINE__TOP_N=5` -> `engine.top_n = 5`
    /// - `DIAGARP__LOG__PATH=/var/log/diagarp.json` -> `log.path = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the
    /// expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default().prefix("DIAGARP").separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.engine.validate()?;
        self.log.validate()?;
        self.contacts.validate()?;
        Ok(())
    }
}
