#![allow(clippy::doc_markdown)] // Allow technical terms like DurableTask in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Orchestration Monitor Core
//!
//! Enrichment layer between a Durable Task status store and a monitoring UI.
//!
//! ## Overview
//!
//! A raw orchestration status says what the runtime persisted. The UI needs a little more:
//!
//! - whether the instance is a plain orchestration or a **durable entity** (`@type@key`),
//! - links from `SubOrchestrationInstanceCompleted`/`Failed` history events to the child
//!   instances that produced them,
//! - the name of the **last event**, taken from a separate detailed-history read.
//!
//! The upstream reads are already in flight when they reach this crate and either of them
//! may fail. Failures never surface: the affected field degrades to its empty default.
//!
//! ## Module Organization
//!
//! - [`models`] - status, history event, entity id and child record types
//! - [`enrichment`] - correlator, last-event resolver and the expanded status
//! - [`config`] - configuration loading
//! - [`error`] - structured error handling
//! - [`logging`] - tracing subscriber setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use monitor_core::enrichment::{ExpandedOrchestrationStatus, Fetch};
//! use monitor_core::models::{OrchestrationStatus, SubOrchestrationRecord};
//!
//! # async fn example(
//! #     status: OrchestrationStatus,
//! #     details: tokio::task::JoinHandle<monitor_core::MonitorResult<OrchestrationStatus>>,
//! #     children: tokio::task::JoinHandle<monitor_core::MonitorResult<Vec<SubOrchestrationRecord>>>,
//! # ) -> Result<(), Box<dyn std::error::Error>> {
//! let expanded = ExpandedOrchestrationStatus::new(
//!     status,
//!     Some(Fetch::from_task("details", details)),
//!     Some(Fetch::from_task("sub_orchestrations", children)),
//! )
//! .await;
//!
//! let body = serde_json::to_string(&expanded.to_response().await)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod enrichment;
pub mod error;
pub mod logging;
pub mod models;

pub use config::{ConfigManager, EnrichmentConfig, LogFormat, LoggingConfig, MonitorConfig};
pub use enrichment::{
    ExpandedOrchestrationStatus, ExpandedStatusResponse, Fetch, LastEventState,
    SubOrchestrationCorrelator,
};
pub use error::{MonitorError, MonitorResult};
pub use models::{
    EntityId, EntityType, HistoryEvent, InstanceKind, OrchestrationStatus, RuntimeStatus,
    SubOrchestrationRecord,
};
