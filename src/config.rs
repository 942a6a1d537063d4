//! Configuration for the contact assistant.
//!
//! All settings are diagnostic: the conversation on stdout is fixed by the
//! command grammar and never configurable. Values come from environment
//! variables, with a `.env` file honored if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use tracing_subscriber::EnvFilter;

/// Default tracing filter; effectively silent in normal use.
const DEFAULT_LOG_LEVEL: &str = "error";

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Tracing filter directive used when `RUST_LOG` is not set
    /// (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: tracing filter directive, e.g. `debug` or
    ///   `contact_assistant=debug` (default: "error")
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `LOG_LEVEL` is not a valid
    /// filter directive.
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present; missing files are fine.
        let _ = dotenvy::dotenv();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        if EnvFilter::try_new(&log_level).is_err() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!("Not a valid tracing filter: {}", log_level),
            });
        }

        Ok(Config { log_level })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
