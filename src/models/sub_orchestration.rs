//! Projection of a child orchestration row from the instance history table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubOrchestrationRecord {
    pub instance_id: String,
    pub name: String,
    /// Creation time of the child; equals the parent's `ScheduledTime` for the call.
    #[serde(alias = "_Timestamp", alias = "Timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl SubOrchestrationRecord {
    pub fn new(
        instance_id: impl Into<String>,
        name: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            instance_id: instance_id.into(),
            name: name.into(),
            timestamp,
        }
    }
}
