//! # History Constants
//!
//! Well-known history event keys and type discriminators produced by the Durable Task
//! runtime, plus the defaults the enrichment layer falls back to when no configuration
//! is supplied.

/// Keys found on history event objects
pub mod fields {
    /// Event type discriminator
    pub const EVENT_TYPE: &str = "EventType";
    pub const NAME: &str = "Name";
    pub const FUNCTION_NAME: &str = "FunctionName";
    pub const SCHEDULED_TIME: &str = "ScheduledTime";

    /// Correlation field added to matched sub-orchestration events
    pub const SUB_ORCHESTRATION_ID: &str = "subOrchestrationId";
}

/// History event type discriminators that close a sub-orchestration invocation
pub mod event_types {
    pub const SUB_ORCHESTRATION_INSTANCE_COMPLETED: &str = "SubOrchestrationInstanceCompleted";
    pub const SUB_ORCHESTRATION_INSTANCE_FAILED: &str = "SubOrchestrationInstanceFailed";
}

/// Event types that close a sub-orchestration invocation and can be correlated
/// with the child instance that produced them.
pub const SUB_ORCHESTRATION_EVENT_TYPES: &[&str] = &[
    event_types::SUB_ORCHESTRATION_INSTANCE_COMPLETED,
    event_types::SUB_ORCHESTRATION_INSTANCE_FAILED,
];

/// Event fields consulted, in order, when naming the most recent history event.
pub const LAST_EVENT_FIELDS: &[&str] = &[fields::NAME, fields::FUNCTION_NAME];

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "MONITOR";

/// Separator between nested keys in configuration environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_orchestration_event_types() {
        assert_eq!(SUB_ORCHESTRATION_EVENT_TYPES.len(), 2);
        assert!(SUB_ORCHESTRATION_EVENT_TYPES.contains(&"SubOrchestrationInstanceCompleted"));
        assert!(SUB_ORCHESTRATION_EVENT_TYPES.contains(&"SubOrchestrationInstanceFailed"));
        assert!(!SUB_ORCHESTRATION_EVENT_TYPES.contains(&"SubOrchestrationInstanceCreated"));
    }

    #[test]
    fn test_last_event_field_order() {
        assert_eq!(LAST_EVENT_FIELDS, &["Name", "FunctionName"]);
    }
}
