//! Movement resolvers and the floor probe.
//!
//! Both resolvers write the local position only. On a hit the mover is put
//! back before the collider is read, then snapped against the collider's
//! global position, so a mover with a displaced parent snaps relative to its
//! parent.

use castlez_core::constants::FLOOR_PROBE_DEPTH;
use castlez_core::error::CapabilityError;
use castlez_core::types::{sign, Vec2};

use crate::overlap::OverlapTest;
use crate::query::Resolver;
use crate::registry::SpatialRegistry;

impl<O: OverlapTest> Resolver<O> {
    /// Apply the whole displacement at once.
    ///
    /// On a hit the move is dropped on both axes and the entity is put on top
    /// of the collider: `y = collider.y - height`. No sliding.
    pub fn move_and_collide<R: SpatialRegistry>(
        &self,
        registry: &mut R,
        entity: R::Id,
        distance: Vec2,
    ) -> Result<(), CapabilityError> {
        let saved = registry.local_position(entity)?;
        if let Some(collider) = self.attempt(registry, entity, saved, saved + distance)? {
            let mut position = saved;
            position.y =
                registry.global_position(collider)?.y - registry.footprint_size(entity)?.y;
            log::debug!("{entity:?} landed on {collider:?} at {position}");
            registry.set_local_position(entity, position)?;
        }
        Ok(())
    }

    /// Resolve x, then y, each flush against the first collider it hits.
    ///
    /// One hit per axis per call; stacked obstacles can leave residual overlap.
    pub fn move_and_slide<R: SpatialRegistry>(
        &self,
        registry: &mut R,
        entity: R::Id,
        distance: Vec2,
    ) -> Result<(), CapabilityError> {
        let signs = sign(distance);

        let saved = registry.local_position(entity)?;
        let target = Vec2::new(saved.x + distance.x, saved.y);
        if let Some(collider) = self.attempt(registry, entity, saved, target)? {
            let mut position = saved;
            if signs.x == 1.0 {
                position.x =
                    registry.global_position(collider)?.x - registry.footprint_size(entity)?.x;
            } else if signs.x == -1.0 {
                position.x =
                    registry.global_position(collider)?.x + registry.footprint_size(collider)?.x;
            }
            log::debug!("{entity:?} blocked by {collider:?} on x, now at {position}");
            registry.set_local_position(entity, position)?;
        }

        let saved = registry.local_position(entity)?;
        let target = Vec2::new(saved.x, saved.y + distance.y);
        if let Some(collider) = self.attempt(registry, entity, saved, target)? {
            let mut position = saved;
            if signs.y == 1.0 {
                position.y =
                    registry.global_position(collider)?.y - registry.footprint_size(entity)?.y;
            } else if signs.y == -1.0 {
                position.y =
                    registry.global_position(collider)?.y + registry.footprint_size(collider)?.y;
            }
            log::debug!("{entity:?} blocked by {collider:?} on y, now at {position}");
            registry.set_local_position(entity, position)?;
        }
        Ok(())
    }

    /// Would the entity hit something one cell further down? Never moves it.
    pub fn is_on_floor<R: SpatialRegistry>(
        &self,
        registry: &mut R,
        entity: R::Id,
    ) -> Result<bool, CapabilityError> {
        let saved = registry.local_position(entity)?;
        registry.set_local_position(entity, Vec2::new(saved.x, saved.y + FLOOR_PROBE_DEPTH))?;
        let on_floor = self.is_colliding(registry, entity);
        registry.set_local_position(entity, saved)?;
        on_floor
    }

    /// Move to `target` and look for a collider there.
    ///
    /// The entity stays at `target` only when nothing is hit. On a hit or a
    /// failed query it is back at `saved` before this returns.
    fn attempt<R: SpatialRegistry>(
        &self,
        registry: &mut R,
        entity: R::Id,
        saved: Vec2,
        target: Vec2,
    ) -> Result<Option<R::Id>, CapabilityError> {
        registry.set_local_position(entity, target)?;
        let hit = self.get_collider(registry, entity);
        if !matches!(hit, Ok(None)) {
            registry.set_local_position(entity, saved)?;
        }
        hit
    }
}
