//! # Expanded Orchestration Status
//!
//! The enriched record served to the monitoring UI: the raw status fields plus entity
//! classification, sub-orchestration links in the history, and the lazily resolved name
//! of the last event.

use super::correlator::SubOrchestrationCorrelator;
use super::fetch::Fetch;
use super::last_event::{LastEventResolver, LastEventState};
use crate::config::EnrichmentConfig;
use crate::logging::log_enrichment_operation;
use crate::models::{
    EntityId, EntityType, HistoryEvent, InstanceKind, OrchestrationStatus, RuntimeStatus,
    SubOrchestrationRecord,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::instrument;

#[derive(Debug)]
pub struct ExpandedOrchestrationStatus {
    name: String,
    instance_id: String,
    created_time: DateTime<Utc>,
    last_updated_time: DateTime<Utc>,
    input: JsonValue,
    output: JsonValue,
    runtime_status: RuntimeStatus,
    custom_status: JsonValue,
    history: Option<Vec<HistoryEvent>>,
    entity_type: EntityType,
    entity_id: Option<EntityId>,
    last_event: LastEventResolver,
}

impl ExpandedOrchestrationStatus {
    /// Enrich `status` with the default configuration.
    ///
    /// `details` is the detailed-history read backing [`last_event`](Self::last_event);
    /// `sub_orchestrations` lists the child instances of this one. Both are optional and
    /// either may fail without affecting the result beyond its derived fields.
    pub async fn new(
        status: OrchestrationStatus,
        details: Option<Fetch<OrchestrationStatus>>,
        sub_orchestrations: Option<Fetch<Vec<SubOrchestrationRecord>>>,
    ) -> Self {
        Self::with_config(status, details, sub_orchestrations, &EnrichmentConfig::default())
            .await
    }

    #[instrument(
        name = "enrich_status",
        skip_all,
        fields(instance_id = %status.instance_id, orchestration = %status.name)
    )]
    pub async fn with_config(
        status: OrchestrationStatus,
        details: Option<Fetch<OrchestrationStatus>>,
        sub_orchestrations: Option<Fetch<Vec<SubOrchestrationRecord>>>,
        config: &EnrichmentConfig,
    ) -> Self {
        let OrchestrationStatus {
            name,
            instance_id,
            created_time,
            last_updated_time,
            input,
            output,
            runtime_status,
            custom_status,
            history,
        } = status;

        let history = match sub_orchestrations {
            Some(fetch) if config.correlate_sub_orchestrations => {
                SubOrchestrationCorrelator::new(config.sub_orchestration_event_types.clone())
                    .correlate(history, fetch)
                    .await
            }
            _ => history,
        };

        let (entity_type, entity_id) = InstanceKind::parse(&instance_id).into_parts();

        log_enrichment_operation(
            "expand_status",
            &instance_id,
            "completed",
            Some(&format!("entity_type={entity_type}")),
        );

        Self {
            name,
            instance_id,
            created_time,
            last_updated_time,
            input,
            output,
            runtime_status,
            custom_status,
            history,
            entity_type,
            entity_id,
            last_event: LastEventResolver::new(details, config.last_event_fields.clone()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    pub fn created_time(&self) -> DateTime<Utc> {
        self.created_time
    }

    pub fn last_updated_time(&self) -> DateTime<Utc> {
        self.last_updated_time
    }

    pub fn input(&self) -> &JsonValue {
        &self.input
    }

    pub fn output(&self) -> &JsonValue {
        &self.output
    }

    pub fn runtime_status(&self) -> &RuntimeStatus {
        &self.runtime_status
    }

    pub fn custom_status(&self) -> &JsonValue {
        &self.custom_status
    }

    /// History with sub-orchestration links attached where they could be found
    pub fn history(&self) -> Option<&[HistoryEvent]> {
        self.history.as_deref()
    }

    pub fn entity_type(&self) -> EntityType {
        self.entity_type
    }

    pub fn entity_id(&self) -> Option<&EntityId> {
        self.entity_id.as_ref()
    }

    /// Name of the most recent named event in the detailed history, or `""`.
    /// The detailed fetch is awaited on the first call only.
    pub async fn last_event(&self) -> &str {
        self.last_event.last_event().await
    }

    pub fn last_event_state(&self) -> LastEventState {
        self.last_event.state()
    }

    /// Resolve the last event and snapshot everything into a serializable response
    pub async fn to_response(&self) -> ExpandedStatusResponse {
        let last_event = self.last_event().await.to_string();
        ExpandedStatusResponse {
            name: self.name.clone(),
            instance_id: self.instance_id.clone(),
            created_time: self.created_time,
            last_updated_time: self.last_updated_time,
            input: self.input.clone(),
            output: self.output.clone(),
            runtime_status: self.runtime_status.clone(),
            custom_status: self.custom_status.clone(),
            history: self.history.clone(),
            entity_type: self.entity_type,
            entity_id: self.entity_id.clone(),
            last_event,
        }
    }
}

/// Wire shape of an enriched status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandedStatusResponse {
    pub name: String,
    pub instance_id: String,
    pub created_time: DateTime<Utc>,
    pub last_updated_time: DateTime<Utc>,
    pub input: JsonValue,
    pub output: JsonValue,
    pub runtime_status: RuntimeStatus,
    pub custom_status: JsonValue,
    pub history: Option<Vec<HistoryEvent>>,
    pub entity_type: EntityType,
    pub entity_id: Option<EntityId>,
    pub last_event: String,
}
