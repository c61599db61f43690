//! Marker system: drops every marker at a carrier's global position.

use hecs::Entity;

use castlez_collision::{Scene, SpatialRegistry};
use castlez_core::components::Marker;
use castlez_core::error::CapabilityError;
use castlez_core::events::SceneEvent;

pub fn drop_at(scene: &mut Scene, carrier: Entity) -> Result<SceneEvent, CapabilityError> {
    let at = scene.global_position(carrier)?;
    let markers: Vec<Entity> = scene
        .world()
        .query::<&Marker>()
        .iter()
        .map(|(entity, _)| entity)
        .collect();

    for marker in markers {
        scene.set_global_position(marker, at)?;
    }
    Ok(SceneEvent::MarkerDropped { at })
}
