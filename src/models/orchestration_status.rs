//! # Orchestration Status
//!
//! The raw status record handed over by the storage collaborator, before enrichment.

use super::HistoryEvent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;

/// Runtime status of an orchestration instance.
///
/// Passed through untouched; strings outside the known set are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RuntimeStatus {
    #[default]
    Unknown,
    Running,
    Completed,
    ContinuedAsNew,
    Failed,
    Canceled,
    Terminated,
    Pending,
    #[serde(untagged)]
    Other(String),
}

impl RuntimeStatus {
    /// Check if the instance has stopped for good
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Completed | Self::Failed | Self::Canceled | Self::Terminated
        )
    }
}

impl fmt::Display for RuntimeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "Unknown"),
            Self::Running => write!(f, "Running"),
            Self::Completed => write!(f, "Completed"),
            Self::ContinuedAsNew => write!(f, "ContinuedAsNew"),
            Self::Failed => write!(f, "Failed"),
            Self::Canceled => write!(f, "Canceled"),
            Self::Terminated => write!(f, "Terminated"),
            Self::Pending => write!(f, "Pending"),
            Self::Other(raw) => f.write_str(raw),
        }
    }
}

impl std::str::FromStr for RuntimeStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Unknown" => Self::Unknown,
            "Running" => Self::Running,
            "Completed" => Self::Completed,
            "ContinuedAsNew" => Self::ContinuedAsNew,
            "Failed" => Self::Failed,
            "Canceled" => Self::Canceled,
            "Terminated" => Self::Terminated,
            "Pending" => Self::Pending,
            other => Self::Other(other.to_string()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrchestrationStatus {
    pub name: String,
    pub instance_id: String,
    pub created_time: DateTime<Utc>,
    pub last_updated_time: DateTime<Utc>,
    #[serde(default)]
    pub input: JsonValue,
    #[serde(default)]
    pub output: JsonValue,
    #[serde(default)]
    pub runtime_status: RuntimeStatus,
    #[serde(default)]
    pub custom_status: JsonValue,
    #[serde(default)]
    pub history: Option<Vec<HistoryEvent>>,
}
