//! Events emitted by systems during a tick.

use serde::{Deserialize, Serialize};

use crate::types::Vec2;

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SceneEvent {
    /// A watched entity was teleported by a warp point.
    Warped {
        entity: String,
        warp: String,
        from: Vec2,
        to: Vec2,
    },
    /// The marker was moved to the knight.
    MarkerDropped { at: Vec2 },
}
