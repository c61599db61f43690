//! Error types for capability violations.

use std::fmt;

use thiserror::Error;

/// A capability an operation requires from an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// The entity must exist in the registry.
    Entity,
    /// The entity must have a transform (local position).
    Transform,
    /// The entity must have a texture (footprint).
    Texture,
    /// The entity's parent chain must end at a root.
    Parent,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Entity => write!(f, "entity"),
            Capability::Transform => write!(f, "transform"),
            Capability::Texture => write!(f, "texture"),
            Capability::Parent => write!(f, "acyclic parent"),
        }
    }
}

/// An operation was invoked on an entity lacking a required capability.
///
/// This is a programming error: callers propagate it, never retry it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("entity {entity} lacks the {capability} capability")]
pub struct CapabilityError {
    pub entity: String,
    pub capability: Capability,
}

impl CapabilityError {
    pub fn new(entity: impl fmt::Debug, capability: Capability) -> Self {
        Self {
            entity: format!("{entity:?}"),
            capability,
        }
    }
}
