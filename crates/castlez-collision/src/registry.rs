//! The capability contract the resolvers consume.

use std::fmt;

use castlez_core::error::CapabilityError;
use castlez_core::types::Vec2;

/// A tag-grouped set of positioned, textured entities.
///
/// Registries own entity state. The resolvers only read positions and
/// footprints and write the local position of the entity being moved.
pub trait SpatialRegistry {
    type Id: Copy + PartialEq + fmt::Debug;

    /// Current members of a group, in stable iteration order. May include the caller.
    fn group_members(&self, tag: &str) -> &[Self::Id];

    fn local_position(&self, id: Self::Id) -> Result<Vec2, CapabilityError>;

    fn set_local_position(&mut self, id: Self::Id, position: Vec2)
        -> Result<(), CapabilityError>;

    /// Local position composed with every ancestor. Computed on each call.
    fn global_position(&self, id: Self::Id) -> Result<Vec2, CapabilityError>;

    /// Texture width and height in cells.
    fn footprint_size(&self, id: Self::Id) -> Result<Vec2, CapabilityError>;
}
