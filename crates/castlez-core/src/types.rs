//! Fundamental grid and simulation types.

use serde::{Deserialize, Serialize};

/// Grid-space vector. y grows downward.
pub use glam::Vec2;

/// Per-component sign of a vector: -1, 0 or +1.
///
/// Unlike `f32::signum`, zero maps to `0.0`.
pub fn sign(v: Vec2) -> Vec2 {
    Vec2::new(sign_of(v.x), sign_of(v.y))
}

fn sign_of(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Size of a texture in grid cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footprint {
    /// Longest row, in chars.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
}

impl Footprint {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Measure a block of text rows.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Self {
        let width = rows
            .iter()
            .map(|row| row.as_ref().chars().count())
            .max()
            .unwrap_or(0);
        Self {
            width,
            height: rows.len(),
        }
    }

    /// True when the footprint covers no cells at all.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// Scene time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
}

impl SceneTime {
    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
    }
}
