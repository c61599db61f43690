//! Player commands fed to the engine.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Walk one step on the next tick. Each axis is clamped to -1..=1.
    Walk { x: i8, y: i8 },
    /// Drop the marker at the knight's current position.
    DropMarker,
}
