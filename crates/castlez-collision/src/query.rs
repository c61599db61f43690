//! Collider queries: who, if anyone, is the entity overlapping right now.

use castlez_core::constants::TEXT_COLLIDER_GROUP;
use castlez_core::error::CapabilityError;

use crate::overlap::{CornerSampling, OverlapTest};
use crate::rect::Rect;
use crate::registry::SpatialRegistry;

/// Collision queries and movement resolution over one collider group.
///
/// Generic over the pairwise test; [`CornerSampling`] by default.
#[derive(Debug, Clone)]
pub struct Resolver<O = CornerSampling> {
    overlap: O,
    group: String,
}

impl Default for Resolver<CornerSampling> {
    fn default() -> Self {
        Self::new(CornerSampling)
    }
}

impl<O: OverlapTest> Resolver<O> {
    /// Resolver over the standard collider group.
    pub fn new(overlap: O) -> Self {
        Self::with_group(overlap, TEXT_COLLIDER_GROUP)
    }

    pub fn with_group(overlap: O, group: &str) -> Self {
        Self {
            overlap,
            group: group.to_string(),
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    /// Does `entity`'s box hit `other`'s box? Not symmetric.
    pub fn is_colliding_with<R: SpatialRegistry>(
        &self,
        registry: &R,
        entity: R::Id,
        other: R::Id,
    ) -> Result<bool, CapabilityError> {
        let mover = Rect::from_origin_size(
            registry.global_position(entity)?,
            registry.footprint_size(entity)?,
        );
        let target = Rect::from_origin_size(
            registry.global_position(other)?,
            registry.footprint_size(other)?,
        );
        Ok(self.overlap.overlaps(&mover, &target))
    }

    /// First other group member `entity` collides with, in registry order.
    pub fn get_collider<R: SpatialRegistry>(
        &self,
        registry: &R,
        entity: R::Id,
    ) -> Result<Option<R::Id>, CapabilityError> {
        for &other in registry.group_members(&self.group) {
            if other == entity {
                continue;
            }
            if self.is_colliding_with(registry, entity, other)? {
                log::trace!("{entity:?} collides with {other:?}");
                return Ok(Some(other));
            }
        }
        Ok(None)
    }

    /// True if any other group member blocks `entity`.
    pub fn is_colliding<R: SpatialRegistry>(
        &self,
        registry: &R,
        entity: R::Id,
    ) -> Result<bool, CapabilityError> {
        Ok(self.get_collider(registry, entity)?.is_some())
    }
}
