//! Snapshot system: builds a `SceneSnapshot` from the current scene.
//!
//! Read-only; never modifies the scene.

use castlez_collision::{Resolver, Scene, SpatialRegistry};
use castlez_core::error::CapabilityError;
use castlez_core::events::SceneEvent;
use castlez_core::state::{EntityView, SceneSnapshot};
use castlez_core::types::SceneTime;

/// Build a snapshot of every entity, in spawn order.
pub fn build_snapshot(
    scene: &Scene,
    resolver: &Resolver,
    time: &SceneTime,
    events: Vec<SceneEvent>,
) -> Result<SceneSnapshot, CapabilityError> {
    let mut entities = Vec::with_capacity(scene.entities().len());
    for &entity in scene.entities() {
        let collidable = scene.is_in_group(resolver.group(), entity);
        let colliding = collidable && resolver.is_colliding(scene, entity)?;
        entities.push(EntityView {
            name: scene.name(entity),
            position: scene.local_position(entity)?,
            global_position: scene.global_position(entity)?,
            footprint: scene.footprint(entity),
            collidable,
            colliding,
        });
    }

    Ok(SceneSnapshot {
        time: *time,
        entities,
        events,
    })
}
