//! Intent Extractor Port - Interface for turning directive text into an `IntentRecord`.
//!
//! The planning flow only consumes the structured record. Extractors may call
//! an external language service or apply local rules; either way a failure is
//! reported as an `IntentError` and the caller falls back to keyword parsing.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct FixedExtractor;
//!
//! #[async_trait]
//! impl IntentExtractor for FixedExtractor {
//!     async fn extract(&self, _prompt: &str) -> Result<IntentRecord, IntentError> {
//!         Ok(IntentRecord::default())
//!     }
//!
//!     fn extractor_info(&self) -> ExtractorInfo {
//!         ExtractorInfo::local("fixed")
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::intent::IntentRecord;

/// Port for extracting structured intent from a directive.
#[async_trait]
pub trait IntentExtractor: Send + Sync {
    /// Reads the directive and returns a validated record.
    async fn extract(&self, prompt: &str) -> Result<IntentRecord, IntentError>;

    /// Describes the extractor (name, model, whether it calls out).
    fn extractor_info(&self) -> ExtractorInfo;
}

/// Extractor identification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractorInfo {
    /// Extractor name (e.g., "gemini", "keyword").
    pub name: String,
    /// Model identifier, if any.
    pub model: Option<String>,
    /// True when extraction leaves the process.
    pub remote: bool,
}

impl ExtractorInfo {
    /// Info for a remote, model-backed extractor.
    pub fn remote(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: Some(model.into()),
            remote: true,
        }
    }

    /// Info for an in-process extractor.
    pub fn local(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: None,
            remote: false,
        }
    }
}

/// Intent extraction errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntentError {
    /// No credentials for the remote service.
    #[error("intent service not configured")]
    NotConfigured,

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Service answered with an error status.
    #[error("intent service unavailable: {message}")]
    Unavailable { message: String },

    /// Reply did not contain a usable record.
    #[error("parse error: {0}")]
    Parse(String),

    /// Record violates the intent invariants.
    #[error("invalid intent record: {0}")]
    InvalidRecord(String),
}

impl IntentError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn timeout(timeout_secs: u64) -> Self {
        Self::Timeout { timeout_secs }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    pub fn invalid_record(message: impl Into<String>) -> Self {
        Self::InvalidRecord(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_info_carries_model() {
        let info = ExtractorInfo::remote("gemini", "gemini-1.5-flash");
        assert!(info.remote);
        assert_eq!(info.model.as_deref(), Some("gemini-1.5-flash"));
    }

    #[test]
    fn local_info_has_no_model() {
        let info = ExtractorInfo::local("keyword");
        assert!(!info.remote);
        assert!(info.model.is_none());
    }

    #[test]
    fn errors_display_context() {
        assert_eq!(IntentError::timeout(20).to_string(), "request timed out after 20s");
        assert_eq!(
            IntentError::parse("no JSON object").to_string(),
            "parse error: no JSON object"
        );
        assert_eq!(
            IntentError::NotConfigured.to_string(),
            "intent service not configured"
        );
    }
}
