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
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid socket address: {0}")]
    InvalidSocketAddr(String),

    #[error("Upload size limit must be positive")]
    InvalidUploadLimit,

    #[error("Invalid intent service timeout")]
    InvalidIntentTimeout,

    #[error("Intent service base URL must be http(s)")]
    InvalidIntentBaseUrl,

    #[error("Intent model must not be empty")]
    MissingIntentModel,
}
