//! Collision detection and movement resolution for text-cell entities.
//!
//! Entities are axis-aligned blocks of grid cells. The crate answers two
//! questions: does an entity overlap another collider right now, and where
//! does it end up when it tries to move. Registries plug in through
//! [`SpatialRegistry`]; [`Scene`] is the hecs-backed one.

pub mod movement;
pub mod overlap;
pub mod query;
pub mod rect;
pub mod registry;
pub mod scene;

pub use overlap::{CornerSampling, OverlapTest};
pub use query::Resolver;
pub use rect::{point_in_rect, Rect};
pub use registry::SpatialRegistry;
pub use scene::{Parent, Scene};

use castlez_core::error::CapabilityError;
use castlez_core::types::Vec2;

/// Corner-sampling resolver over the standard collider group.
fn text_colliders() -> Resolver {
    Resolver::default()
}

/// Move by `distance` in one go; on a hit, drop the move and snap onto the collider's top edge.
pub fn move_and_collide<R: SpatialRegistry>(
    registry: &mut R,
    entity: R::Id,
    distance: Vec2,
) -> Result<(), CapabilityError> {
    text_colliders().move_and_collide(registry, entity, distance)
}

/// Move each axis separately, x first, stopping flush against whatever blocks it.
pub fn move_and_slide<R: SpatialRegistry>(
    registry: &mut R,
    entity: R::Id,
    distance: Vec2,
) -> Result<(), CapabilityError> {
    text_colliders().move_and_slide(registry, entity, distance)
}

/// True if a collider sits directly below the entity.
pub fn is_on_floor<R: SpatialRegistry>(
    registry: &mut R,
    entity: R::Id,
) -> Result<bool, CapabilityError> {
    text_colliders().is_on_floor(registry, entity)
}

pub fn is_colliding<R: SpatialRegistry>(
    registry: &R,
    entity: R::Id,
) -> Result<bool, CapabilityError> {
    text_colliders().is_colliding(registry, entity)
}

pub fn get_collider<R: SpatialRegistry>(
    registry: &R,
    entity: R::Id,
) -> Result<Option<R::Id>, CapabilityError> {
    text_colliders().get_collider(registry, entity)
}

pub fn is_colliding_with<R: SpatialRegistry>(
    registry: &R,
    entity: R::Id,
    other: R::Id,
) -> Result<bool, CapabilityError> {
    text_colliders().is_colliding_with(registry, entity, other)
}

#[cfg(test)]
mod tests;
