//! Warp system: teleports watched entities standing on a warp trigger.
//!
//! Warps move entities by rewriting their position directly. Arrival is not
//! collision-checked.

use hecs::Entity;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use castlez_collision::{Scene, SpatialRegistry};
use castlez_core::components::Watched;
use castlez_core::error::CapabilityError;
use castlez_core::events::SceneEvent;
use castlez_core::types::Vec2;

/// A point that sends watched entities elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub struct WarpPoint {
    /// Fires when `watched.global - warp.global` equals this exactly.
    pub trigger_offset: Vec2,
    /// Added to the chosen destination's global position on arrival.
    pub exit_offset: Vec2,
    /// Candidate destinations, picked uniformly.
    pub destinations: Vec<Entity>,
}

/// Check every warp point against every watched entity, in spawn order.
pub fn run(
    scene: &mut Scene,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<SceneEvent>,
) -> Result<(), CapabilityError> {
    let mut warps: Vec<(Entity, WarpPoint)> = Vec::new();
    let mut watched: Vec<Entity> = Vec::new();
    for &entity in scene.entities() {
        if let Ok(point) = scene.world().get::<&WarpPoint>(entity) {
            warps.push((entity, WarpPoint::clone(&point)));
        }
        if scene.world().get::<&Watched>(entity).is_ok() {
            watched.push(entity);
        }
    }

    for (warp, point) in &warps {
        if point.destinations.is_empty() {
            continue;
        }
        let origin = scene.global_position(*warp)?;

        for &entity in &watched {
            let from = scene.global_position(entity)?;
            if from - origin != point.trigger_offset {
                continue;
            }

            let destination = point.destinations[rng.gen_range(0..point.destinations.len())];
            let to = scene.global_position(destination)? + point.exit_offset;
            scene.set_global_position(entity, to)?;

            log::debug!(
                "{} warped by {} from {from} to {to}",
                scene.name(entity),
                scene.name(*warp)
            );
            events.push(SceneEvent::Warped {
                entity: scene.name(entity),
                warp: scene.name(*warp),
                from,
                to,
            });
        }
    }
    Ok(())
}
