//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CODE_REVIEW` prefix and nested values use double underscores as separators.
//! The completion API key additionally falls back to the bare `GROQ_API_KEY`
//! variable.
//!
//! # Example
//!
//! ```no_run
//! use code_review_agents::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod ai;
mod error;
mod server;

pub use ai::{AiConfig, GROQ_API_KEY_VAR};
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, LogFormat, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Completion API configuration (credential, model, sampling)
    #[serde(default)]
    pub ai: AiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CODE_REVIEW` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Falls back to `GROQ_API_KEY` for the credential
    ///
    /// # Environment Variable Format
    ///
    /// - `CODE_REVIEW__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CODE_REVIEW__AI__MODEL=llama-3.3-70b-versatile` -> `ai.model = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut config: AppConfig = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CODE_REVIEW")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        config.ai = config.ai.with_env_fallback();

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
