//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `AGENTIC_ENTERPRISE` prefix and nested values use double underscores as separators.
//! Every value has a default, so the service starts with an empty environment.
//!
//! # Example
//!
//! ```no_run
//! use agentic_enterprise::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod error;
mod intent;
mod server;

pub use error::{ConfigError, ValidationError};
pub use intent::IntentConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

use crate::adapters::http::HttpSettings;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, limits)
    #[serde(default)]
    pub server: ServerConfig,

    /// Intent service configuration (Gemini)
    #[serde(default)]
    pub intent: IntentConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `AGENTIC_ENTERPRISE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `AGENTIC_ENTERPRISE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `AGENTIC_ENTERPRISE__INTENT__GEMINI_API_KEY=...` -> `intent.gemini_api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("AGENTIC_ENTERPRISE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is out of range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.intent.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }

    /// Middleware settings for the HTTP router.
    pub fn http_settings(&self) -> HttpSettings {
        HttpSettings {
            request_timeout: self.server.request_timeout(),
            cors_origins: self.server.cors_origins_list(),
            max_upload_bytes: self.server.max_upload_bytes,
        }
    }
}
