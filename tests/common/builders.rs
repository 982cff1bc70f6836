//! Test data builders for status records, history events and fetch doubles

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use monitor_core::enrichment::Fetch;
use monitor_core::models::{
    HistoryEvent, OrchestrationStatus, RuntimeStatus, SubOrchestrationRecord,
};
use monitor_core::{MonitorError, MonitorResult};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Fixed base time so tests can build exact-equality timestamps
pub fn at(minute: u32, second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 10, minute, second).unwrap()
}

pub fn event(value: Value) -> HistoryEvent {
    HistoryEvent::try_from(value).expect("history event fixture must be an object")
}

pub fn sub_orchestration_completed(function: &str, scheduled: DateTime<Utc>) -> HistoryEvent {
    event(json!({
        "EventType": "SubOrchestrationInstanceCompleted",
        "FunctionName": function,
        "ScheduledTime": scheduled.to_rfc3339(),
    }))
}

pub fn sub_orchestration_failed(function: &str, scheduled: DateTime<Utc>) -> HistoryEvent {
    event(json!({
        "EventType": "SubOrchestrationInstanceFailed",
        "FunctionName": function,
        "ScheduledTime": scheduled.to_rfc3339(),
    }))
}

pub fn task_completed(function: &str, scheduled: DateTime<Utc>) -> HistoryEvent {
    event(json!({
        "EventType": "TaskCompleted",
        "FunctionName": function,
        "ScheduledTime": scheduled.to_rfc3339(),
    }))
}

pub fn child(instance_id: &str, name: &str, created: DateTime<Utc>) -> SubOrchestrationRecord {
    SubOrchestrationRecord::new(instance_id, name, created)
}

/// Builder pattern for creating test OrchestrationStatus records
pub struct StatusBuilder {
    name: String,
    instance_id: String,
    runtime_status: RuntimeStatus,
    history: Option<Vec<HistoryEvent>>,
}

impl StatusBuilder {
    pub fn new(instance_id: &str) -> Self {
        Self {
            name: "OrderWorkflow".to_string(),
            instance_id: instance_id.to_string(),
            runtime_status: RuntimeStatus::Running,
            history: None,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_runtime_status(mut self, runtime_status: RuntimeStatus) -> Self {
        self.runtime_status = runtime_status;
        self
    }

    pub fn with_history(mut self, history: Vec<HistoryEvent>) -> Self {
        self.history = Some(history);
        self
    }

    pub fn build(self) -> OrchestrationStatus {
        OrchestrationStatus {
            name: self.name,
            instance_id: self.instance_id,
            created_time: at(0, 0),
            last_updated_time: at(30, 0),
            input: json!({ "orderId": 42 }),
            output: Value::Null,
            runtime_status: self.runtime_status,
            custom_status: json!({ "stage": "shipping" }),
            history: self.history,
        }
    }
}

/// Fetch double that counts how many times its future is polled to completion
pub struct CountingFetch {
    calls: Arc<AtomicUsize>,
}

impl CountingFetch {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn fetch<T: Send + 'static>(
        &self,
        operation: &'static str,
        result: MonitorResult<T>,
    ) -> Fetch<T> {
        let calls = self.calls.clone();
        Fetch::new(operation, async move {
            calls.fetch_add(1, Ordering::SeqCst);
            result
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

pub fn upstream_failure(operation: &str) -> MonitorError {
    MonitorError::upstream_fetch(operation, "storage account unreachable")
}
