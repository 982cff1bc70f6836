pub mod entity;
pub mod history_event;
pub mod orchestration_status;
pub mod sub_orchestration;

// Re-export models for easy access
pub use entity::{EntityId, EntityType, InstanceKind};
pub use history_event::HistoryEvent;
pub use orchestration_status::{OrchestrationStatus, RuntimeStatus};
pub use sub_orchestration::SubOrchestrationRecord;
