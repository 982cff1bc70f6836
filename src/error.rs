//! Error types for the enrichment core.
//!
//! None of these ever escape [`ExpandedOrchestrationStatus`](crate::enrichment::ExpandedOrchestrationStatus)
//! construction: the enricher matches on them and substitutes the documented default.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MonitorError {
    #[error("Upstream fetch failed: {operation} - {reason}")]
    UpstreamFetch { operation: String, reason: String },
    #[error("Sub-orchestration matching failed: {0}")]
    Matching(String),
    #[error("Invalid entity id: {0}")]
    InvalidEntityId(String),
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl MonitorError {
    /// Create an UpstreamFetch error with operation context
    pub fn upstream_fetch(operation: impl Into<String>, reason: impl ToString) -> Self {
        Self::UpstreamFetch {
            operation: operation.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<serde_json::Error> for MonitorError {
    fn from(error: serde_json::Error) -> Self {
        MonitorError::Serialization(format!("JSON serialization error: {error}"))
    }
}

impl From<config::ConfigError> for MonitorError {
    fn from(error: config::ConfigError) -> Self {
        MonitorError::Configuration(error.to_string())
    }
}

pub type MonitorResult<T> = std::result::Result<T, MonitorError>;
