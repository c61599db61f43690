//! Scene snapshot: the visible state of every named entity after a tick.

use serde::{Deserialize, Serialize};

use crate::events::SceneEvent;
use crate::types::{Footprint, SceneTime, Vec2};

/// Complete scene state produced after each tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub time: SceneTime,
    /// Entities in spawn order.
    pub entities: Vec<EntityView>,
    pub events: Vec<SceneEvent>,
}

/// One entity as seen from outside the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub name: String,
    /// Local position (relative to the parent).
    pub position: Vec2,
    pub global_position: Vec2,
    /// None for bare nodes without a texture.
    pub footprint: Option<Footprint>,
    /// Member of the collider group.
    pub collidable: bool,
    /// Currently overlapping another collider. Always false for non-collidables.
    pub colliding: bool,
}

impl SceneSnapshot {
    /// Look up an entity view by name.
    pub fn entity(&self, name: &str) -> Option<&EntityView> {
        self.entities.iter().find(|view| view.name == name)
    }
}
