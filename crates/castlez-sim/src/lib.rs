//! Headless tick engine for the castle scene.
//!
//! Owns the scene, applies queued player commands, runs the scripted systems
//! (walking, marker drops, warp points) at each tick, and produces
//! `SceneSnapshot`s. No rendering or input polling.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use castlez_collision;
pub use castlez_core;
pub use engine::{SceneConfig, SceneEngine};
