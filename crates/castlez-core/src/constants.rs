//! Scene constants, art and layout.

use crate::types::Vec2;

// --- Collision ---

/// Group tag shared by every collidable entity.
pub const TEXT_COLLIDER_GROUP: &str = "text_collider";

/// How far below the entity the floor probe looks (cells).
pub const FLOOR_PROBE_DEPTH: f32 = 1.0;

// --- Simulation ---

/// Default RNG seed for warp destination rolls.
pub const DEFAULT_SEED: u64 = 42;

// --- Art ---

pub const KNIGHT_TEXTURE: &[&str] = &["@"];

pub const MARKER_TEXTURE: &[&str] = &["[?]"];

pub const TOWER_TEXTURE: &[&str] = &[
    "#.#.#", //
    "#####",
    "#####",
    "#####",
];

pub const GATE_TEXTURE: &[&str] = &[
    " #.#.#.#.# ", //
    "|#########|",
    "|###| |###|",
];

pub const MAGIC_GATE_TEXTURE: &[&str] = &[
    "\\", //
    " |",
    "  )",
    " |",
    "/",
];

pub const DECORATION_TEXTURE: &[&str] = &["|||"];

// --- Castle layout ---

/// Castle roots, in spawn order.
pub const CASTLE_POSITIONS: [Vec2; 3] = [
    Vec2::new(5.0, -3.0),
    Vec2::new(20.0, 9.0),
    Vec2::new(-24.0, 10.0),
];

/// Offsets of castle parts relative to the castle root.
pub const TOWER_LEFT_OFFSET: Vec2 = Vec2::new(-10.0, -4.0);
pub const GATE_OFFSET: Vec2 = Vec2::new(-5.0, -3.0);
pub const TOWER_RIGHT_OFFSET: Vec2 = Vec2::new(6.0, -4.0);

/// Banner on top of the first castle.
pub const DECORATION_OFFSET: Vec2 = Vec2::new(-1.0, -3.0);

/// The magic gate sits far off to the west.
pub const MAGIC_GATE_POSITION: Vec2 = Vec2::new(-400.0, 0.0);

// --- Warps ---

/// Standing exactly on a castle root sends the knight to the magic gate.
pub const CASTLE_WARP_TRIGGER: Vec2 = Vec2::ZERO;
/// Arrival offset below the magic gate.
pub const CASTLE_WARP_EXIT: Vec2 = Vec2::new(0.0, 2.0);

/// Stepping into the magic gate's mouth sends the knight to a castle.
pub const MAGIC_GATE_WARP_TRIGGER: Vec2 = Vec2::new(1.0, 2.0);
/// Arrival offset below a castle root.
pub const MAGIC_GATE_WARP_EXIT: Vec2 = Vec2::new(0.0, 1.0);
