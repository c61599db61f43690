//! Walk system: moves entities with a pending walk intent, sliding along colliders.

use hecs::Entity;

use castlez_collision::{Resolver, Scene};
use castlez_core::components::WalkIntent;
use castlez_core::error::CapabilityError;
use castlez_core::types::Vec2;

/// Consume every walk intent and resolve the step with `move_and_slide`.
pub fn run(scene: &mut Scene, resolver: &Resolver) -> Result<(), CapabilityError> {
    let mut steps: Vec<(Entity, Vec2)> = Vec::new();
    for (entity, intent) in scene.world_mut().query_mut::<&mut WalkIntent>() {
        let direction = std::mem::take(&mut intent.direction);
        if direction != Vec2::ZERO {
            steps.push((entity, direction));
        }
    }

    for (entity, direction) in steps {
        resolver.move_and_slide(scene, entity, direction)?;
    }
    Ok(())
}
