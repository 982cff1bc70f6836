//! # Entity Identity
//!
//! Durable entities share the instance-id namespace with orchestrations and are told apart
//! by a reserved encoding:
//!
//! ```text
//! entity-id  = "@" type-token "@" entity-key
//! type-token = 1*( word-char )          ; letters, digits, underscore (Unicode-aware)
//! entity-key = 1*( any char but LF )    ; greedy, may itself contain "@"
//! ```
//!
//! The marker match is case-insensitive and, like the monitor that deployed this rule,
//! is a search rather than an anchored match: the first occurrence anywhere in the
//! instance id decides. Anything that does not match is a plain orchestration.

use crate::error::MonitorError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

const ENTITY_ID_PATTERN: &str = r"(?i)@(\w+)@(.+)";

fn entity_id_regex() -> &'static Regex {
    static ENTITY_ID_REGEX: OnceLock<Regex> = OnceLock::new();
    ENTITY_ID_REGEX.get_or_init(|| Regex::new(ENTITY_ID_PATTERN).expect("Valid regex pattern"))
}

/// Execution classification exposed to the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EntityType {
    #[default]
    Orchestration,
    DurableEntity,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Orchestration => write!(f, "Orchestration"),
            Self::DurableEntity => write!(f, "DurableEntity"),
        }
    }
}

/// Type name and key of a durable entity instance
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId {
    #[serde(rename = "type")]
    pub entity_type: String,
    pub key: String,
}

impl EntityId {
    pub fn new(entity_type: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            key: key.into(),
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}@{}", self.entity_type, self.key)
    }
}

impl std::str::FromStr for EntityId {
    type Err = MonitorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match InstanceKind::parse(s) {
            InstanceKind::DurableEntity(id) => Ok(id),
            InstanceKind::Orchestration => Err(MonitorError::InvalidEntityId(s.to_string())),
        }
    }
}

/// Result of classifying an instance id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstanceKind {
    Orchestration,
    DurableEntity(EntityId),
}

impl InstanceKind {
    /// Classify an instance id. Never fails: non-matching ids are orchestrations.
    pub fn parse(instance_id: &str) -> Self {
        entity_id_regex()
            .captures(instance_id)
            .and_then(|caps| match (caps.get(1), caps.get(2)) {
                (Some(entity_type), Some(key)) => Some(Self::DurableEntity(EntityId::new(
                    entity_type.as_str(),
                    key.as_str(),
                ))),
                _ => None,
            })
            .unwrap_or(Self::Orchestration)
    }

    pub fn entity_type(&self) -> EntityType {
        match self {
            Self::Orchestration => EntityType::Orchestration,
            Self::DurableEntity(_) => EntityType::DurableEntity,
        }
    }

    pub fn entity_id(&self) -> Option<&EntityId> {
        match self {
            Self::Orchestration => None,
            Self::DurableEntity(id) => Some(id),
        }
    }

    pub fn into_parts(self) -> (EntityType, Option<EntityId>) {
        match self {
            Self::Orchestration => (EntityType::Orchestration, None),
            Self::DurableEntity(id) => (EntityType::DurableEntity, Some(id)),
        }
    }
}
