//! Tests for collider queries, the movement resolvers and the floor probe.

use hecs::Entity;

use castlez_core::components::Texture;
use castlez_core::constants::TEXT_COLLIDER_GROUP;
use castlez_core::error::Capability;
use castlez_core::types::Vec2;

use crate::overlap::{CornerSampling, OverlapTest};
use crate::rect::Rect;
use crate::registry::SpatialRegistry;
use crate::scene::Scene;
use crate::{
    get_collider, is_colliding, is_colliding_with, is_on_floor, move_and_collide,
    move_and_slide, Resolver,
};

/// Solid block texture of `width` x `height` cells.
fn solid(width: usize, height: usize) -> Texture {
    Texture::new(vec!["#".repeat(width); height])
}

fn spawn_block(
    scene: &mut Scene,
    name: &str,
    x: f32,
    y: f32,
    width: usize,
    height: usize,
) -> Entity {
    scene
        .spawn_collider(name, Vec2::new(x, y), solid(width, height), None)
        .unwrap()
}

fn position(scene: &Scene, entity: Entity) -> Vec2 {
    scene.local_position(entity).unwrap()
}

// ---- Collider query ----

#[test]
fn test_no_obstacles_means_no_collider() {
    let mut scene = Scene::new();
    let knight = spawn_block(&mut scene, "knight", 0.0, 0.0, 1, 1);

    assert_eq!(get_collider(&scene, knight).unwrap(), None);
    assert!(!is_colliding(&scene, knight).unwrap());
}

#[test]
fn test_group_scan_skips_self() {
    let mut scene = Scene::new();
    let knight = spawn_block(&mut scene, "knight", 0.0, 0.0, 1, 1);

    assert_eq!(scene.group_members(TEXT_COLLIDER_GROUP), &[knight]);
    assert_eq!(get_collider(&scene, knight).unwrap(), None);
}

#[test]
fn test_pairwise_test_is_asymmetric() {
    let mut scene = Scene::new();
    let small = spawn_block(&mut scene, "small", 4.0, 4.0, 1, 1);
    let large = spawn_block(&mut scene, "large", 0.0, 0.0, 10, 10);

    assert!(is_colliding_with(&scene, small, large).unwrap());
    assert!(!is_colliding_with(&scene, large, small).unwrap());
    assert_eq!(get_collider(&scene, small).unwrap(), Some(large));
    assert_eq!(get_collider(&scene, large).unwrap(), None);
}

#[test]
fn test_first_collider_in_registry_order() {
    let mut scene = Scene::new();
    let knight = spawn_block(&mut scene, "knight", 3.0, 3.0, 1, 1);
    let outer = spawn_block(&mut scene, "outer", 0.0, 0.0, 10, 10);
    let inner = spawn_block(&mut scene, "inner", 2.0, 2.0, 5, 5);

    assert_eq!(get_collider(&scene, knight).unwrap(), Some(outer));

    scene.remove_from_group(TEXT_COLLIDER_GROUP, outer);
    assert_eq!(get_collider(&scene, knight).unwrap(), Some(inner));
}

#[test]
fn test_sprites_outside_the_group_are_ignored() {
    let mut scene = Scene::new();
    let knight = spawn_block(&mut scene, "knight", 3.0, 3.0, 1, 1);
    scene
        .spawn_sprite("banner", Vec2::ZERO, solid(10, 10), None)
        .unwrap();

    assert!(!is_colliding(&scene, knight).unwrap());
}

#[test]
fn test_children_collide_at_their_global_position() {
    let mut scene = Scene::new();
    let castle = scene.spawn_node("castle", Vec2::new(5.0, -3.0), None).unwrap();
    let tower = scene
        .spawn_collider("tower", Vec2::new(-10.0, -4.0), solid(5, 4), Some(castle))
        .unwrap();
    // Tower spans x -5..0, y -7..-3.
    let knight = spawn_block(&mut scene, "knight", -3.0, -5.0, 1, 1);

    assert_eq!(get_collider(&scene, knight).unwrap(), Some(tower));
}

// ---- move_and_slide ----

#[test]
fn test_slide_without_obstacles_applies_full_distance() {
    let mut scene = Scene::new();
    let knight = spawn_block(&mut scene, "knight", 0.0, 0.0, 1, 1);

    move_and_slide(&mut scene, knight, Vec2::new(3.0, -2.0)).unwrap();
    assert_eq!(position(&scene, knight), Vec2::new(3.0, -2.0));

    move_and_slide(&mut scene, knight, Vec2::new(-0.5, 4.0)).unwrap();
    assert_eq!(position(&scene, knight), Vec2::new(2.5, 2.0));
}

#[test]
fn test_slide_right_snaps_to_left_edge() {
    let mut scene = Scene::new();
    let knight = spawn_block(&mut scene, "knight", 0.0, 0.0, 1, 1);
    spawn_block(&mut scene, "obstacle", 2.0, 0.0, 3, 3);

    move_and_slide(&mut scene, knight, Vec2::new(4.0, 0.0)).unwrap();
    assert_eq!(position(&scene, knight), Vec2::new(1.0, 0.0));
}

#[test]
fn test_slide_far_past_thin_column_tunnels() {
    let mut scene = Scene::new();
    let knight = spawn_block(&mut scene, "knight", 0.0, 0.0, 1, 1);
    spawn_block(&mut scene, "obstacle", 2.0, 0.0, 3, 3);

    // At x = 5 both sampled columns sit on or past the obstacle's right edge.
    move_and_slide(&mut scene, knight, Vec2::new(5.0, 0.0)).unwrap();
    assert_eq!(position(&scene, knight), Vec2::new(5.0, 0.0));
}

#[test]
fn test_slide_x_block_keeps_y_motion() {
    let mut scene = Scene::new();
    let knight = spawn_block(&mut scene, "knight", 0.0, 0.0, 1, 1);
    spawn_block(&mut scene, "wall", 2.0, -5.0, 3, 20);

    move_and_slide(&mut scene, knight, Vec2::new(3.0, 2.0)).unwrap();
    assert_eq!(position(&scene, knight), Vec2::new(1.0, 2.0));
}

#[test]
fn test_slide_left_snaps_to_right_edge() {
    let mut scene = Scene::new();
    let knight = spawn_block(&mut scene, "knight", 10.0, 0.0, 1, 1);
    spawn_block(&mut scene, "wall", 2.0, -5.0, 3, 20);

    move_and_slide(&mut scene, knight, Vec2::new(-6.0, 0.0)).unwrap();
    assert_eq!(position(&scene, knight), Vec2::new(5.0, 0.0));
}

#[test]
fn test_slide_down_lands_on_floor() {
    let mut scene = Scene::new();
    let knight = spawn_block(&mut scene, "knight", 1.0, 0.0, 1, 1);
    spawn_block(&mut scene, "floor", 0.0, 3.0, 5, 1);

    move_and_slide(&mut scene, knight, Vec2::new(0.0, 3.0)).unwrap();
    assert_eq!(position(&scene, knight), Vec2::new(1.0, 2.0));
    assert!(is_on_floor(&mut scene, knight).unwrap());
}

#[test]
fn test_slide_up_stops_under_ceiling() {
    let mut scene = Scene::new();
    let knight = spawn_block(&mut scene, "knight", 1.0, 5.0, 1, 1);
    spawn_block(&mut scene, "ceiling", 0.0, 0.0, 5, 2);

    move_and_slide(&mut scene, knight, Vec2::new(0.0, -4.0)).unwrap();
    assert_eq!(position(&scene, knight), Vec2::new(1.0, 2.0));
}

#[test]
fn test_slide_with_zero_distance_inside_obstacle_stays_put() {
    let mut scene = Scene::new();
    let knight = spawn_block(&mut scene, "knight", 3.0, 3.0, 1, 1);
    spawn_block(&mut scene, "boulder", 0.0, 0.0, 10, 10);

    move_and_slide(&mut scene, knight, Vec2::ZERO).unwrap();
    assert_eq!(position(&scene, knight), Vec2::new(3.0, 3.0));
}

#[test]
fn test_slide_diagonal_into_corner() {
    let mut scene = Scene::new();
    let knight = spawn_block(&mut scene, "knight", 0.0, 0.0, 1, 1);
    spawn_block(&mut scene, "wall", 3.0, -10.0, 2, 20);
    spawn_block(&mut scene, "floor", -10.0, 3.0, 20, 2);

    move_and_slide(&mut scene, knight, Vec2::new(3.0, 3.0)).unwrap();
    assert_eq!(position(&scene, knight), Vec2::new(2.0, 2.0));
}

// ---- move_and_collide ----

#[test]
fn test_collide_without_obstacles_applies_full_distance() {
    let mut scene = Scene::new();
    let knight = spawn_block(&mut scene, "knight", 0.0, 0.0, 1, 1);

    move_and_collide(&mut scene, knight, Vec2::new(1.0, 1.0)).unwrap();
    assert_eq!(position(&scene, knight), Vec2::new(1.0, 1.0));
}

#[test]
fn test_collide_discards_x_and_snaps_on_top() {
    let mut scene = Scene::new();
    let knight = spawn_block(&mut scene, "knight", 0.0, 0.0, 1, 1);
    spawn_block(&mut scene, "obstacle", 2.0, 0.0, 3, 3);

    move_and_collide(&mut scene, knight, Vec2::new(3.0, 1.0)).unwrap();
    assert_eq!(position(&scene, knight), Vec2::new(0.0, -1.0));
}

#[test]
fn test_collide_snap_ignores_direction_of_y() {
    let mut scene = Scene::new();
    let obstacle_top = 0.0;
    spawn_block(&mut scene, "obstacle", 2.0, obstacle_top, 3, 3);

    let falling = spawn_block(&mut scene, "falling", 0.0, -4.0, 1, 1);
    move_and_collide(&mut scene, falling, Vec2::new(2.0, 6.0)).unwrap();
    assert_eq!(position(&scene, falling), Vec2::new(0.0, obstacle_top - 1.0));

    let rising = spawn_block(&mut scene, "rising", 0.0, 5.0, 1, 1);
    move_and_collide(&mut scene, rising, Vec2::new(3.0, -3.0)).unwrap();
    assert_eq!(position(&scene, rising), Vec2::new(0.0, obstacle_top - 1.0));
}

#[test]
fn test_collide_uses_mover_height() {
    let mut scene = Scene::new();
    let tall = spawn_block(&mut scene, "tall", 0.0, 0.0, 1, 4);
    spawn_block(&mut scene, "floor", -5.0, 6.0, 10, 2);

    move_and_collide(&mut scene, tall, Vec2::new(2.0, 3.0)).unwrap();
    assert_eq!(position(&scene, tall), Vec2::new(0.0, 2.0));
}

/// A 1x1 knight carrying a collidable 3x1 shield one cell to its left.
fn knight_with_shield(scene: &mut Scene) -> (Entity, Entity) {
    let knight = spawn_block(scene, "knight", 0.0, 0.0, 1, 1);
    let shield = scene
        .spawn_collider("shield", Vec2::new(-1.0, 0.0), solid(3, 1), Some(knight))
        .unwrap();
    (knight, shield)
}

#[test]
fn test_slide_snaps_against_collider_after_restoring() {
    let mut scene = Scene::new();
    let (knight, shield) = knight_with_shield(&mut scene);

    // The shield moves with the knight, so the snap has to read it from the
    // knight's original position: x = -1 - 1.
    move_and_slide(&mut scene, knight, Vec2::new(3.0, 0.0)).unwrap();
    assert_eq!(position(&scene, knight), Vec2::new(-2.0, 0.0));
    assert_eq!(scene.global_position(shield).unwrap(), Vec2::new(-3.0, 0.0));
}

#[test]
fn test_collide_snaps_against_collider_after_restoring() {
    let mut scene = Scene::new();
    let (knight, _shield) = knight_with_shield(&mut scene);

    move_and_collide(&mut scene, knight, Vec2::new(0.0, 5.0)).unwrap();
    assert_eq!(position(&scene, knight), Vec2::new(0.0, -1.0));
}

// ---- is_on_floor ----

#[test]
fn test_floor_probe_never_moves_entity() {
    let mut scene = Scene::new();
    let grounded = spawn_block(&mut scene, "grounded", 1.0, 2.0, 1, 1);
    let airborne = spawn_block(&mut scene, "airborne", 1.0, -10.0, 1, 1);
    spawn_block(&mut scene, "floor", 0.0, 3.0, 5, 1);

    assert!(is_on_floor(&mut scene, grounded).unwrap());
    assert_eq!(position(&scene, grounded), Vec2::new(1.0, 2.0));

    assert!(!is_on_floor(&mut scene, airborne).unwrap());
    assert_eq!(position(&scene, airborne), Vec2::new(1.0, -10.0));
}

#[test]
fn test_floor_probe_only_looks_one_cell_down() {
    let mut scene = Scene::new();
    let knight = spawn_block(&mut scene, "knight", 1.0, 1.0, 1, 1);
    spawn_block(&mut scene, "floor", 0.0, 3.0, 5, 1);

    assert!(!is_on_floor(&mut scene, knight).unwrap());
}

// ---- Capabilities ----

#[test]
fn test_mover_without_texture_fails_and_is_restored() {
    let mut scene = Scene::new();
    let ghost = scene.spawn_node("ghost", Vec2::new(1.0, 1.0), None).unwrap();
    spawn_block(&mut scene, "wall", 5.0, 5.0, 1, 1);

    let err = move_and_slide(&mut scene, ghost, Vec2::new(2.0, 0.0)).unwrap_err();
    assert_eq!(err.capability, Capability::Texture);
    assert_eq!(position(&scene, ghost), Vec2::new(1.0, 1.0));

    let err = is_on_floor(&mut scene, ghost).unwrap_err();
    assert_eq!(err.capability, Capability::Texture);
    assert_eq!(position(&scene, ghost), Vec2::new(1.0, 1.0));
}

#[test]
fn test_broken_group_member_is_reported() {
    let mut scene = Scene::new();
    let knight = spawn_block(&mut scene, "knight", 0.0, 0.0, 1, 1);
    let node = scene.spawn_node("node", Vec2::ZERO, None).unwrap();
    scene.add_to_group(TEXT_COLLIDER_GROUP, node);

    let err = get_collider(&scene, knight).unwrap_err();
    assert_eq!(err.capability, Capability::Texture);
}

#[test]
fn test_despawned_entity_cannot_move() {
    let mut scene = Scene::new();
    let knight = spawn_block(&mut scene, "knight", 0.0, 0.0, 1, 1);
    scene.despawn(knight).unwrap();

    let err = move_and_collide(&mut scene, knight, Vec2::X).unwrap_err();
    assert_eq!(err.capability, Capability::Entity);
}

// ---- Resolver configuration ----

/// Full interval overlap, for comparison with corner sampling.
struct IntervalOverlap;

impl OverlapTest for IntervalOverlap {
    fn overlaps(&self, mover: &Rect, other: &Rect) -> bool {
        mover.start.x < other.end.x
            && other.start.x < mover.end.x
            && mover.start.y < other.end.y
            && other.start.y < mover.end.y
    }
}

#[test]
fn test_overlap_test_is_swappable() {
    let mut scene = Scene::new();
    let small = spawn_block(&mut scene, "small", 4.0, 4.0, 1, 1);
    let large = spawn_block(&mut scene, "large", 0.0, 0.0, 10, 10);

    let exact = Resolver::new(IntervalOverlap);
    assert!(exact.is_colliding_with(&scene, large, small).unwrap());
    assert_eq!(exact.get_collider(&scene, large).unwrap(), Some(small));

    let sampled = Resolver::new(CornerSampling);
    assert!(!sampled.is_colliding_with(&scene, large, small).unwrap());
}

#[test]
fn test_resolver_over_custom_group() {
    let mut scene = Scene::new();
    let knight = spawn_block(&mut scene, "knight", 0.0, 0.0, 1, 1);
    let hedge = scene
        .spawn_sprite("hedge", Vec2::new(2.0, -5.0), solid(3, 20), None)
        .unwrap();
    scene.add_to_group("hedges", hedge);

    let resolver = Resolver::with_group(CornerSampling, "hedges");
    assert_eq!(resolver.group(), "hedges");

    resolver
        .move_and_slide(&mut scene, knight, Vec2::new(3.0, 0.0))
        .unwrap();
    assert_eq!(position(&scene, knight), Vec2::new(1.0, 0.0));

    // The default group does not see the hedge.
    move_and_slide(&mut scene, knight, Vec2::new(3.0, 0.0)).unwrap();
    assert_eq!(position(&scene, knight), Vec2::new(4.0, 0.0));
}
