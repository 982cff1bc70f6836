mod common;

use common::*;
use monitor_core::enrichment::{Fetch, SubOrchestrationCorrelator};
use monitor_core::models::{EntityId, EntityType, HistoryEvent, InstanceKind};
use proptest::prelude::*;
use serde_json::json;
use std::collections::HashSet;

fn correlate(
    history: Vec<HistoryEvent>,
    records: Vec<monitor_core::SubOrchestrationRecord>,
) -> Vec<HistoryEvent> {
    tokio_test::block_on(
        SubOrchestrationCorrelator::default()
            .correlate(Some(history), Fetch::ready("sub_orchestrations", records)),
    )
    .expect("present history stays present")
}

proptest! {
    /// Property: any `@type@key` id is a durable entity with exactly that type and key
    #[test]
    fn entity_ids_are_recognised(entity_type in entity_type_strategy(), key in entity_key_strategy()) {
        let kind = InstanceKind::parse(&format!("@{entity_type}@{key}"));
        prop_assert_eq!(kind.entity_type(), EntityType::DurableEntity);
        prop_assert_eq!(kind.entity_id(), Some(&EntityId::new(entity_type, key)));
    }

    /// Property: ids without the marker are plain orchestrations
    #[test]
    fn plain_ids_are_orchestrations(instance_id in plain_instance_id_strategy()) {
        let kind = InstanceKind::parse(&instance_id);
        prop_assert_eq!(kind.entity_type(), EntityType::Orchestration);
        prop_assert!(kind.entity_id().is_none());
    }

    /// Property: correlation pairs one-to-one, preserves order and only touches candidates
    #[test]
    fn correlation_is_one_to_one(
        events in prop::collection::vec((event_type_strategy(), call_slot_strategy()), 0..12),
        children in prop::collection::vec(call_slot_strategy(), 0..12),
    ) {
        let history: Vec<HistoryEvent> = events
            .iter()
            .map(|(event_type, (function, minute))| event(json!({
                "EventType": event_type,
                "FunctionName": function,
                "ScheduledTime": at(*minute, 0).to_rfc3339(),
            })))
            .collect();
        let records: Vec<_> = children
            .iter()
            .enumerate()
            .map(|(i, (function, minute))| child(&format!("child-{i}"), function, at(*minute, 0)))
            .collect();

        let out = correlate(history.clone(), records);
        prop_assert_eq!(out.len(), history.len());

        let mut seen = HashSet::new();
        for (before, after) in history.iter().zip(out.iter()) {
            match after.sub_orchestration_id() {
                Some(id) => {
                    prop_assert!(seen.insert(id.to_string()), "child {} matched twice", id);
                    prop_assert!(matches!(
                        before.event_type(),
                        Some("SubOrchestrationInstanceCompleted" | "SubOrchestrationInstanceFailed")
                    ));
                    let index: usize = id.trim_start_matches("child-").parse().unwrap();
                    let (function, minute) = &children[index];
                    prop_assert_eq!(before.function_name(), Some(function.as_str()));
                    prop_assert_eq!(before.scheduled_time().unwrap(), Some(at(*minute, 0)));
                    prop_assert_eq!(after.as_map().len(), before.as_map().len() + 1);
                }
                None => {
                    prop_assert_eq!(after, before);
                }
            }
        }
    }
}
