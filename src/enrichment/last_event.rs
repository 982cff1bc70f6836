//! # Last Event Resolver
//!
//! Names the most recent event of an instance's detailed history. The detailed history is
//! a separate, more expensive read than the summary history on the status record, so it
//! is awaited lazily on first access and the outcome is memoized, failures included.

use super::fetch::Fetch;
use crate::models::{HistoryEvent, OrchestrationStatus};
use parking_lot::Mutex;
use tokio::sync::OnceCell;
use tracing::debug;

/// Memoization state of the last event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LastEventState {
    /// Not read yet
    Unresolved,
    Resolved(String),
    /// The detailed history could not be fetched; reads yield the empty string
    Failed,
}

impl LastEventState {
    pub fn value(&self) -> &str {
        match self {
            Self::Resolved(name) => name,
            Self::Unresolved | Self::Failed => "",
        }
    }
}

pub struct LastEventResolver {
    details: Mutex<Option<Fetch<OrchestrationStatus>>>,
    fields: Vec<String>,
    cell: OnceCell<LastEventState>,
}

impl LastEventResolver {
    /// `fields` are consulted in order on each event, newest event first
    pub fn new(details: Option<Fetch<OrchestrationStatus>>, fields: Vec<String>) -> Self {
        let cell = match details {
            Some(_) => OnceCell::new(),
            None => OnceCell::new_with(Some(LastEventState::Resolved(String::new()))),
        };
        Self {
            details: Mutex::new(details),
            fields,
            cell,
        }
    }

    /// Name of the last event, or the empty string.
    ///
    /// Concurrent first callers share one await of the detailed fetch.
    pub async fn last_event(&self) -> &str {
        self.cell.get_or_init(|| self.resolve()).await.value()
    }

    /// Current state without triggering resolution
    pub fn state(&self) -> LastEventState {
        self.cell
            .get()
            .cloned()
            .unwrap_or(LastEventState::Unresolved)
    }

    async fn resolve(&self) -> LastEventState {
        // Taken by the single initializer. Missing only if an earlier initializer
        // was cancelled after taking it.
        let taken = self.details.lock().take();
        let Some(details) = taken else {
            return LastEventState::Failed;
        };

        let operation = details.operation();
        match details.await {
            Ok(status) => LastEventState::Resolved(
                Self::scan(status.history.as_deref(), self.fields.as_slice()).unwrap_or_default(),
            ),
            Err(e) => {
                debug!(
                    operation = operation,
                    error = %e,
                    "Detailed history unavailable, last event left empty"
                );
                LastEventState::Failed
            }
        }
    }

    /// Newest-first search for the first event carrying one of `fields`
    pub fn scan<S: AsRef<str>>(
        history: Option<&[HistoryEvent]>,
        fields: &[S],
    ) -> Option<String> {
        history?
            .iter()
            .rev()
            .find_map(|event| event.first_named_field(fields))
    }
}

impl std::fmt::Debug for LastEventResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LastEventResolver")
            .field("fields", &self.fields)
            .field("state", &self.state())
            .finish()
    }
}
