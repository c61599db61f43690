//! Systems that operate on the scene each tick.
//!
//! Systems are plain functions over `&mut Scene` (or `&Scene` for read-only).
//! They hold no state of their own.

pub mod markers;
pub mod snapshot;
pub mod walk;
pub mod warp;
