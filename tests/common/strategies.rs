#![allow(dead_code)]

use proptest::prelude::*;

/// Strategy for generating entity type tokens (word characters only)
pub fn entity_type_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{1,24}"
}

/// Strategy for generating entity keys (anything but a line feed)
pub fn entity_key_strategy() -> impl Strategy<Value = String> {
    "[^\n]{1,48}"
}

/// Strategy for generating instance ids that can never be entity ids
pub fn plain_instance_id_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9:_-]{0,64}"
}

/// Strategy for generating sub-orchestration function names from a small pool,
/// so that name collisions are common
pub fn function_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("ProcessOrder".to_string()),
        Just("ShipOrder".to_string()),
        Just("NotifyCustomer".to_string()),
    ]
}

/// Strategy for generating (function, minute) slots with frequent duplicates
pub fn call_slot_strategy() -> impl Strategy<Value = (String, u32)> {
    (function_name_strategy(), 0u32..3)
}

/// Strategy for generating history event type discriminators
pub fn event_type_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("SubOrchestrationInstanceCompleted"),
        Just("SubOrchestrationInstanceFailed"),
        Just("SubOrchestrationInstanceCreated"),
        Just("TaskCompleted"),
        Just("TimerFired"),
    ]
}
