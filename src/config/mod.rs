//! # Monitor Configuration
//!
//! Settings for the enrichment layer and its logging, loaded from an optional
//! TOML/YAML/JSON file and overridden by `MONITOR__*` environment variables.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use monitor_core::config::ConfigManager;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let manager = ConfigManager::load()?;
//! let correlate = manager.config().enrichment.correlate_sub_orchestrations;
//! # Ok(())
//! # }
//! ```

pub mod loader;

use crate::constants::{LAST_EVENT_FIELDS, SUB_ORCHESTRATION_EVENT_TYPES};
use crate::error::{MonitorError, MonitorResult};
use serde::{Deserialize, Serialize};

pub use loader::ConfigManager;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Status enrichment behaviour
    pub enrichment: EnrichmentConfig,

    /// Log level and output format
    pub logging: LoggingConfig,
}

impl MonitorConfig {
    pub fn validate(&self) -> MonitorResult<()> {
        self.enrichment.validate()?;
        self.logging.validate()
    }
}

/// Controls how raw orchestration statuses are enriched
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EnrichmentConfig {
    /// Link completed/failed sub-orchestration events to their child instances
    pub correlate_sub_orchestrations: bool,

    /// Event types eligible for sub-orchestration correlation
    pub sub_orchestration_event_types: Vec<String>,

    /// Event fields consulted, in order, to name the last event
    pub last_event_fields: Vec<String>,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            correlate_sub_orchestrations: true,
            sub_orchestration_event_types: SUB_ORCHESTRATION_EVENT_TYPES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            last_event_fields: LAST_EVENT_FIELDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl EnrichmentConfig {
    pub fn validate(&self) -> MonitorResult<()> {
        if self.last_event_fields.is_empty() {
            return Err(MonitorError::Configuration(
                "enrichment.last_event_fields must name at least one field".to_string(),
            ));
        }
        if self.last_event_fields.iter().any(|f| f.trim().is_empty()) {
            return Err(MonitorError::Configuration(
                "enrichment.last_event_fields must not contain blank names".to_string(),
            ));
        }
        if self.correlate_sub_orchestrations && self.sub_orchestration_event_types.is_empty() {
            return Err(MonitorError::Configuration(
                "enrichment.sub_orchestration_event_types is empty while correlation is enabled"
                    .to_string(),
            ));
        }
        Ok(())
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive; when unset the level is derived from the environment
    pub level: Option<String>,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: None,
            format: LogFormat::Pretty,
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> MonitorResult<()> {
        match &self.level {
            Some(level) if level.trim().is_empty() => Err(MonitorError::Configuration(
                "logging.level must not be blank".to_string(),
            )),
            _ => Ok(()),
        }
    }
}
