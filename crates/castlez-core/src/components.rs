//! ECS components for scene entities.
//!
//! Components are plain data. Collision and movement logic lives in
//! `castlez-collision`, scripted behaviour in the sim systems.

use serde::{Deserialize, Serialize};

use crate::types::{Footprint, Vec2};

/// Local translation, relative to the parent node (or the scene root).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec2,
}

impl Transform {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
        }
    }
}

/// Text art drawn at the entity's position. Its extents define the footprint.
///
/// Serialized as its rows only; the footprint is measured again on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Texture {
    rows: Vec<String>,
    footprint: Footprint,
}

impl Texture {
    pub fn new(rows: Vec<String>) -> Self {
        let footprint = Footprint::from_rows(&rows);
        Self { rows, footprint }
    }

    pub fn from_rows(rows: &[&str]) -> Self {
        Self::new(rows.iter().map(|row| row.to_string()).collect())
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Cell extents, measured once at construction.
    pub fn footprint(&self) -> Footprint {
        self.footprint
    }
}

impl From<Vec<String>> for Texture {
    fn from(rows: Vec<String>) -> Self {
        Self::new(rows)
    }
}

impl From<Texture> for Vec<String> {
    fn from(texture: Texture) -> Self {
        texture.rows
    }
}

/// Human-readable label used in snapshots and log lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name(pub String);

/// Marks the player-controlled knight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Knight;

/// Direction the knight walks on the next tick. Consumed by the walk system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WalkIntent {
    pub direction: Vec2,
}

/// Marks the position marker the knight can drop.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Marker;

/// Marks entities that warp points keep an eye on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Watched;
