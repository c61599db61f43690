//! hecs-backed scene graph and spatial registry.
//!
//! `Scene` owns the ECS world plus ordered tag groups. Positions are local to
//! the parent node; global positions are composed on every read.

use std::collections::HashMap;

use hecs::{Component, ComponentError, Entity, World};

use castlez_core::components::{Name, Texture, Transform};
use castlez_core::constants::TEXT_COLLIDER_GROUP;
use castlez_core::error::{Capability, CapabilityError};
use castlez_core::types::{Footprint, Vec2};

use crate::registry::SpatialRegistry;

/// Links a node to the node its transform is relative to.
///
/// Only the scene creates these, through `spawn_node` and `set_parent`.
#[derive(Debug, PartialEq, Eq)]
pub struct Parent(Entity);

impl Parent {
    pub fn entity(&self) -> Entity {
        self.0
    }
}

/// The scene: ECS world, group membership and spawn order.
#[derive(Default)]
pub struct Scene {
    world: World,
    groups: HashMap<String, Vec<Entity>>,
    order: Vec<Entity>,
}

fn component_error(entity: Entity, err: ComponentError, capability: Capability) -> CapabilityError {
    match err {
        ComponentError::NoSuchEntity => CapabilityError::new(entity, Capability::Entity),
        _ => CapabilityError::new(entity, capability),
    }
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only access to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access for systems that query their own components.
    ///
    /// Spawn and despawn through the scene, not the world: entities spawned
    /// here are missing from `entities()` and groups, and entities despawned
    /// here stay listed and fail later lookups with `Capability::Entity`.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// All live entities in spawn order.
    pub fn entities(&self) -> &[Entity] {
        &self.order
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.world.contains(entity)
    }

    // -----------------------------------------------------------------------
    // Spawning

    /// Spawn a bare transform node.
    pub fn spawn_node(
        &mut self,
        name: &str,
        position: Vec2,
        parent: Option<Entity>,
    ) -> Result<Entity, CapabilityError> {
        if let Some(parent) = parent {
            if !self.world.contains(parent) {
                return Err(CapabilityError::new(parent, Capability::Entity));
            }
        }

        let entity = self
            .world
            .spawn((Name(name.to_string()), Transform { position }));
        if let Some(parent) = parent {
            self.insert_one(entity, Parent(parent))?;
        }
        self.order.push(entity);
        Ok(entity)
    }

    /// Spawn a node that draws a texture. Not collidable.
    pub fn spawn_sprite(
        &mut self,
        name: &str,
        position: Vec2,
        texture: Texture,
        parent: Option<Entity>,
    ) -> Result<Entity, CapabilityError> {
        let entity = self.spawn_node(name, position, parent)?;
        self.insert_one(entity, texture)?;
        Ok(entity)
    }

    /// Spawn a textured node and register it in the collider group.
    pub fn spawn_collider(
        &mut self,
        name: &str,
        position: Vec2,
        texture: Texture,
        parent: Option<Entity>,
    ) -> Result<Entity, CapabilityError> {
        let entity = self.spawn_sprite(name, position, texture, parent)?;
        self.add_to_group(TEXT_COLLIDER_GROUP, entity);
        Ok(entity)
    }

    /// Attach an extra component to an existing entity.
    pub fn insert_one<T: Component>(
        &mut self,
        entity: Entity,
        component: T,
    ) -> Result<(), CapabilityError> {
        self.world
            .insert_one(entity, component)
            .map_err(|_| CapabilityError::new(entity, Capability::Entity))
    }

    /// Re-parent `child`, keeping its local position. `None` makes it a root.
    ///
    /// Rejects a parent that is `child` itself or one of its descendants.
    pub fn set_parent(
        &mut self,
        child: Entity,
        parent: Option<Entity>,
    ) -> Result<(), CapabilityError> {
        if !self.world.contains(child) {
            return Err(CapabilityError::new(child, Capability::Entity));
        }
        let Some(parent) = parent else {
            self.world.remove_one::<Parent>(child).ok();
            return Ok(());
        };
        if !self.world.contains(parent) {
            return Err(CapabilityError::new(parent, Capability::Entity));
        }
        if self.ancestry(parent).contains(&child) {
            return Err(CapabilityError::new(child, Capability::Parent));
        }
        self.insert_one(child, Parent(parent))
    }

    /// Remove an entity, its descendants and their group memberships.
    pub fn despawn(&mut self, entity: Entity) -> Result<(), CapabilityError> {
        if !self.world.contains(entity) {
            return Err(CapabilityError::new(entity, Capability::Entity));
        }

        let mut doomed = vec![entity];
        let mut next = 0;
        while next < doomed.len() {
            let current = doomed[next];
            for &candidate in &self.order {
                if self.parent(candidate) == Some(current) && !doomed.contains(&candidate) {
                    doomed.push(candidate);
                }
            }
            next += 1;
        }

        for members in self.groups.values_mut() {
            members.retain(|member| !doomed.contains(member));
        }
        self.order.retain(|live| !doomed.contains(live));
        for gone in doomed {
            self.world
                .despawn(gone)
                .map_err(|_| CapabilityError::new(gone, Capability::Entity))?;
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Groups

    /// Add to a group. Returns false if the entity was already a member.
    pub fn add_to_group(&mut self, tag: &str, entity: Entity) -> bool {
        let members = self.groups.entry(tag.to_string()).or_default();
        if members.contains(&entity) {
            return false;
        }
        members.push(entity);
        true
    }

    /// Remove from a group. Returns false if the entity was not a member.
    pub fn remove_from_group(&mut self, tag: &str, entity: Entity) -> bool {
        let Some(members) = self.groups.get_mut(tag) else {
            return false;
        };
        let before = members.len();
        members.retain(|&member| member != entity);
        members.len() != before
    }

    pub fn is_in_group(&self, tag: &str, entity: Entity) -> bool {
        self.group_members(tag).contains(&entity)
    }

    // -----------------------------------------------------------------------
    // Accessors

    /// Display name, falling back to the entity id.
    pub fn name(&self, entity: Entity) -> String {
        match self.world.get::<&Name>(entity) {
            Ok(name) => name.0.clone(),
            Err(_) => format!("{entity:?}"),
        }
    }

    pub fn parent(&self, entity: Entity) -> Option<Entity> {
        self.world.get::<&Parent>(entity).ok().map(|parent| parent.0)
    }

    /// `entity` followed by its ancestors, nearest first. Stops early if the
    /// chain loops.
    fn ancestry(&self, entity: Entity) -> Vec<Entity> {
        let mut chain = vec![entity];
        let mut current = self.parent(entity);
        while let Some(ancestor) = current {
            if chain.contains(&ancestor) {
                break;
            }
            chain.push(ancestor);
            current = self.parent(ancestor);
        }
        chain
    }

    /// Footprint of the entity's texture, if it has one.
    pub fn footprint(&self, entity: Entity) -> Option<Footprint> {
        self.world
            .get::<&Texture>(entity)
            .ok()
            .map(|texture| texture.footprint())
    }

    /// Place an entity at a global position by rewriting its local position.
    pub fn set_global_position(
        &mut self,
        entity: Entity,
        global: Vec2,
    ) -> Result<(), CapabilityError> {
        let parent_global = match self.parent(entity) {
            Some(parent) => self.global_position(parent)?,
            None => Vec2::ZERO,
        };
        self.set_local_position(entity, global - parent_global)
    }
}

impl SpatialRegistry for Scene {
    type Id = Entity;

    fn group_members(&self, tag: &str) -> &[Entity] {
        self.groups.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    fn local_position(&self, id: Entity) -> Result<Vec2, CapabilityError> {
        self.world
            .get::<&Transform>(id)
            .map(|transform| transform.position)
            .map_err(|err| component_error(id, err, Capability::Transform))
    }

    fn set_local_position(&mut self, id: Entity, position: Vec2) -> Result<(), CapabilityError> {
        let mut transform = self
            .world
            .get::<&mut Transform>(id)
            .map_err(|err| component_error(id, err, Capability::Transform))?;
        transform.position = position;
        Ok(())
    }

    fn global_position(&self, id: Entity) -> Result<Vec2, CapabilityError> {
        let mut global = self.local_position(id)?;
        let mut current = self.parent(id);
        let mut depth = 0;
        while let Some(ancestor) = current {
            depth += 1;
            if depth > self.order.len() {
                return Err(CapabilityError::new(id, Capability::Parent));
            }
            global += self.local_position(ancestor)?;
            current = self.parent(ancestor);
        }
        Ok(global)
    }

    fn footprint_size(&self, id: Entity) -> Result<Vec2, CapabilityError> {
        self.world
            .get::<&Texture>(id)
            .map(|texture| texture.footprint().as_vec2())
            .map_err(|err| component_error(id, err, Capability::Texture))
    }
}
