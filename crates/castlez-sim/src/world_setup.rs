//! Entity spawn factories for the castle scene.
//!
//! Builds the knight, its marker, three castles (two towers and a gate each),
//! a banner on the first castle, and the magic gate linking them.

use hecs::Entity;

use castlez_collision::Scene;
use castlez_core::components::*;
use castlez_core::constants::*;
use castlez_core::error::CapabilityError;
use castlez_core::types::Vec2;

use crate::systems::warp::WarpPoint;

/// Handles to the entities the engine needs to reach directly.
#[derive(Debug, Clone)]
pub struct CastleWorld {
    pub knight: Entity,
    pub marker: Entity,
    pub castles: Vec<Entity>,
    pub magic_gate: Entity,
}

/// Populate an empty scene with the castle layout.
pub fn setup_castle_world(
    scene: &mut Scene,
    knight_start: Vec2,
) -> Result<CastleWorld, CapabilityError> {
    let knight = spawn_knight(scene, knight_start)?;
    let marker = spawn_marker(scene)?;

    let mut castles = Vec::with_capacity(CASTLE_POSITIONS.len());
    for (i, &position) in CASTLE_POSITIONS.iter().enumerate() {
        castles.push(spawn_castle(scene, &format!("castle{}", i + 1), position)?);
    }
    scene.spawn_sprite(
        "castle1.decoration",
        DECORATION_OFFSET,
        Texture::from_rows(DECORATION_TEXTURE),
        Some(castles[0]),
    )?;

    let magic_gate = spawn_magic_gate(scene, castles.clone())?;
    for &castle in &castles {
        scene.insert_one(
            castle,
            WarpPoint {
                trigger_offset: CASTLE_WARP_TRIGGER,
                exit_offset: CASTLE_WARP_EXIT,
                destinations: vec![magic_gate],
            },
        )?;
    }

    Ok(CastleWorld {
        knight,
        marker,
        castles,
        magic_gate,
    })
}

/// Spawn the player's knight: a 1x1 collider that walks and is watched by warps.
pub fn spawn_knight(scene: &mut Scene, position: Vec2) -> Result<Entity, CapabilityError> {
    let knight =
        scene.spawn_collider("knight", position, Texture::from_rows(KNIGHT_TEXTURE), None)?;
    scene.insert_one(knight, Knight)?;
    scene.insert_one(knight, WalkIntent::default())?;
    scene.insert_one(knight, Watched)?;
    Ok(knight)
}

/// Spawn the drop marker at the origin. Not collidable.
pub fn spawn_marker(scene: &mut Scene) -> Result<Entity, CapabilityError> {
    let marker =
        scene.spawn_sprite("marker", Vec2::ZERO, Texture::from_rows(MARKER_TEXTURE), None)?;
    scene.insert_one(marker, Marker)?;
    Ok(marker)
}

/// Spawn a castle root with its two towers and gate as collidable children.
pub fn spawn_castle(
    scene: &mut Scene,
    name: &str,
    position: Vec2,
) -> Result<Entity, CapabilityError> {
    let castle = scene.spawn_node(name, position, None)?;
    scene.spawn_collider(
        &format!("{name}.tower_left"),
        TOWER_LEFT_OFFSET,
        Texture::from_rows(TOWER_TEXTURE),
        Some(castle),
    )?;
    scene.spawn_collider(
        &format!("{name}.gate"),
        GATE_OFFSET,
        Texture::from_rows(GATE_TEXTURE),
        Some(castle),
    )?;
    scene.spawn_collider(
        &format!("{name}.tower_right"),
        TOWER_RIGHT_OFFSET,
        Texture::from_rows(TOWER_TEXTURE),
        Some(castle),
    )?;
    Ok(castle)
}

/// Spawn the magic gate, which sends the knight back to one of `exits`.
pub fn spawn_magic_gate(
    scene: &mut Scene,
    exits: Vec<Entity>,
) -> Result<Entity, CapabilityError> {
    let gate = scene.spawn_sprite(
        "magic_gate",
        MAGIC_GATE_POSITION,
        Texture::from_rows(MAGIC_GATE_TEXTURE),
        None,
    )?;
    scene.insert_one(
        gate,
        WarpPoint {
            trigger_offset: MAGIC_GATE_WARP_TRIGGER,
            exit_offset: MAGIC_GATE_WARP_EXIT,
            destinations: exits,
        },
    )?;
    Ok(gate)
}
