//! # History Event
//!
//! A single entry of an orchestration's append-only history as returned by the Durable
//! Task storage layer. Events are heterogeneous JSON objects, so the model keeps the raw
//! map and offers typed views over the handful of keys the enrichment layer reads.

use crate::constants::fields;
use crate::error::{MonitorError, MonitorResult};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryEvent(Map<String, Value>);

fn parse_timestamp(raw: &str) -> MonitorResult<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    raw.parse::<NaiveDateTime>()
        .map(|naive| naive.and_utc())
        .map_err(|e| MonitorError::Matching(format!("unparseable ScheduledTime {raw:?}: {e}")))
}

impl HistoryEvent {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn event_type(&self) -> Option<&str> {
        self.get_str(fields::EVENT_TYPE)
    }

    pub fn name(&self) -> Option<&str> {
        self.get_str(fields::NAME)
    }

    pub fn function_name(&self) -> Option<&str> {
        self.get_str(fields::FUNCTION_NAME)
    }

    /// Scheduled time of the invocation this event closes.
    ///
    /// `Ok(None)` when the key is missing or null. Timestamps without an offset are read
    /// as UTC; anything that is neither RFC 3339 nor an ISO 8601 local date-time is an error.
    pub fn scheduled_time(&self) -> MonitorResult<Option<DateTime<Utc>>> {
        match self.0.get(fields::SCHEDULED_TIME) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(raw)) => parse_timestamp(raw).map(Some),
            Some(other) => Err(MonitorError::Matching(format!(
                "ScheduledTime is not a timestamp: {other}"
            ))),
        }
    }

    pub fn sub_orchestration_id(&self) -> Option<&str> {
        self.get_str(fields::SUB_ORCHESTRATION_ID)
    }

    /// Return this event with the child instance id attached
    pub fn with_sub_orchestration_id(mut self, instance_id: impl Into<String>) -> Self {
        self.0.insert(
            fields::SUB_ORCHESTRATION_ID.to_string(),
            Value::String(instance_id.into()),
        );
        self
    }

    /// Value of the first of `keys` present with a non-null value, rendered as text.
    /// JSON strings are returned raw, anything else as compact JSON.
    pub fn first_named_field<S: AsRef<str>>(&self, keys: &[S]) -> Option<String> {
        keys.iter()
            .filter_map(|key| self.0.get(key.as_ref()))
            .find(|value| !value.is_null())
            .map(|value| match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for HistoryEvent {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

impl TryFrom<Value> for HistoryEvent {
    type Error = MonitorError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(MonitorError::Serialization(format!(
                "history event must be a JSON object, got {other}"
            ))),
        }
    }
}
