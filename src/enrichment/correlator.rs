//! # Sub-Orchestration Correlator
//!
//! Links `SubOrchestrationInstanceCompleted` / `SubOrchestrationInstanceFailed` events in a
//! parent history to the child instances that produced them.
//!
//! The history does not carry the child instance id, so pairing is heuristic: a child
//! record matches the first still-unpaired candidate event whose `FunctionName` equals the
//! child's name and whose `ScheduledTime` equals the child's creation timestamp exactly.
//! A paired candidate is removed, so children sharing a name and timestamp are paired
//! one-to-one in the order the records arrive.

use super::fetch::Fetch;
use crate::error::{MonitorError, MonitorResult};
use crate::models::{HistoryEvent, SubOrchestrationRecord};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Pairs found for a history, as `(event index, child instance id)`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pairing {
    pub matches: Vec<(usize, String)>,
}

impl Pairing {
    /// Produce the annotated history; order is preserved and unmatched events are untouched
    pub fn apply(&self, history: Vec<HistoryEvent>) -> Vec<HistoryEvent> {
        if self.matches.is_empty() {
            return history;
        }
        let mut by_index: HashMap<usize, &str> = self
            .matches
            .iter()
            .map(|(index, id)| (*index, id.as_str()))
            .collect();

        history
            .into_iter()
            .enumerate()
            .map(|(index, event)| match by_index.remove(&index) {
                Some(id) => event.with_sub_orchestration_id(id),
                None => event,
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct SubOrchestrationCorrelator {
    event_types: Vec<String>,
}

impl SubOrchestrationCorrelator {
    pub fn new(event_types: Vec<String>) -> Self {
        Self { event_types }
    }

    fn is_candidate(&self, event: &HistoryEvent) -> bool {
        event
            .event_type()
            .is_some_and(|t| self.event_types.iter().any(|candidate| candidate == t))
    }

    /// Indices of the events eligible for correlation, in history order
    pub fn candidates(&self, history: &[HistoryEvent]) -> Vec<usize> {
        history
            .iter()
            .enumerate()
            .filter(|(_, event)| self.is_candidate(event))
            .map(|(index, _)| index)
            .collect()
    }

    /// Annotate `history` with child instance ids from `sub_orchestrations`.
    ///
    /// Never fails: a failed fetch leaves the history as it was, and a matching error keeps
    /// whatever was paired before it. The fetch is not awaited when there is nothing to match.
    pub async fn correlate(
        &self,
        history: Option<Vec<HistoryEvent>>,
        sub_orchestrations: Fetch<Vec<SubOrchestrationRecord>>,
    ) -> Option<Vec<HistoryEvent>> {
        let history = history?;

        let candidates = self.candidates(&history);
        if candidates.is_empty() {
            return Some(history);
        }

        let candidate_count = candidates.len();
        let operation = sub_orchestrations.operation();
        let records = match sub_orchestrations.await {
            Ok(records) => records,
            Err(e) => {
                warn!(
                    operation = operation,
                    error = %e,
                    "Sub-orchestration fetch failed, history left unannotated"
                );
                return Some(history);
            }
        };

        let mut pairing = Pairing::default();
        if let Err(e) = Self::pair(&history, candidates, &records, &mut pairing) {
            warn!(
                error = %e,
                matched = pairing.matches.len(),
                "Sub-orchestration matching stopped early"
            );
        }

        debug!(
            candidates = candidate_count,
            records = records.len(),
            matched = pairing.matches.len(),
            "Sub-orchestration correlation finished"
        );

        Some(pairing.apply(history))
    }

    /// Pair each record with the first remaining candidate, accumulating into `pairing`
    /// so that a failure part-way keeps earlier pairs.
    fn pair(
        history: &[HistoryEvent],
        mut remaining: Vec<usize>,
        records: &[SubOrchestrationRecord],
        pairing: &mut Pairing,
    ) -> MonitorResult<()> {
        for record in records {
            let mut found = None;
            for (position, &index) in remaining.iter().enumerate() {
                let event = history.get(index).ok_or_else(|| {
                    MonitorError::Matching(format!(
                        "candidate index {index} outside history of {}",
                        history.len()
                    ))
                })?;
                if event.function_name() != Some(record.name.as_str()) {
                    continue;
                }
                if event.scheduled_time()? == Some(record.timestamp) {
                    found = Some(position);
                    break;
                }
            }

            if let Some(position) = found {
                let index = remaining.remove(position);
                pairing.matches.push((index, record.instance_id.clone()));
            }
        }
        Ok(())
    }
}

impl Default for SubOrchestrationCorrelator {
    fn default() -> Self {
        Self::new(
            crate::constants::SUB_ORCHESTRATION_EVENT_TYPES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }
}
