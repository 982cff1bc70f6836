//! # Status Enrichment
//!
//! Turns a raw [`OrchestrationStatus`](crate::models::OrchestrationStatus) plus up to two
//! in-flight upstream reads into an [`ExpandedOrchestrationStatus`].
//!
//! - [`correlator`] - links sub-orchestration history events to child instances
//! - [`last_event`] - lazily names the most recent event of the detailed history
//! - [`expanded_status`] - composes both with entity classification
//! - [`fetch`] - owned handles for the upstream reads

pub mod correlator;
pub mod expanded_status;
pub mod fetch;
pub mod last_event;

pub use correlator::{Pairing, SubOrchestrationCorrelator};
pub use expanded_status::{ExpandedOrchestrationStatus, ExpandedStatusResponse};
pub use fetch::Fetch;
pub use last_event::{LastEventResolver, LastEventState};
