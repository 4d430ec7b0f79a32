//! Movement with collision against static solids.
//!
//! Each moving entity is displaced one axis at a time. After applying the
//! horizontal delta the entity is snapped out of every [`Solid`] it now
//! overlaps, then the same happens vertically. Resolving the axes separately
//! lets an entity slide along a wall instead of sticking to it.
use bevy_ecs::prelude::*;

use crate::components::boxcollider::{BoxCollider, Solid};
use crate::components::enemy::Enemy;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::geometry::Rect;

#[derive(Clone, Copy)]
enum Axis {
    Horizontal,
    Vertical,
}

/// Push `pos` out of each overlapping solid along `axis`.
///
/// Moving in the positive direction places the collider's far edge on the
/// solid's near edge; moving in the negative direction places the collider's
/// near edge on the solid's far edge.
fn resolve_axis(pos: &mut MapPosition, collider: &BoxCollider, delta: f32, axis: Axis, solids: &[Rect]) {
    for solid in solids {
        let bounds = collider.aabb(pos.x, pos.y);
        if !bounds.overlaps(solid) {
            continue;
        }
        match axis {
            Axis::Horizontal if delta > 0.0 => pos.x = solid.x - collider.width - collider.offset_x,
            Axis::Horizontal if delta < 0.0 => pos.x = solid.max_x() - collider.offset_x,
            Axis::Vertical if delta > 0.0 => pos.y = solid.y - collider.height - collider.offset_y,
            Axis::Vertical if delta < 0.0 => pos.y = solid.max_y() - collider.offset_y,
            _ => {}
        }
    }
}

fn solid_bounds(solids: &Query<(&MapPosition, &BoxCollider), With<Solid>>) -> Vec<Rect> {
    solids
        .iter()
        .map(|(pos, collider)| collider.aabb(pos.x, pos.y))
        .collect()
}

/// Apply one [`RigidBody`] delta, horizontal pass first.
fn apply(pos: &mut MapPosition, rb: &RigidBody, collider: &BoxCollider, solids: &[Rect]) {
    if rb.dx != 0.0 {
        pos.x += rb.dx;
        resolve_axis(pos, collider, rb.dx, Axis::Horizontal, solids);
    }
    if rb.dy != 0.0 {
        pos.y += rb.dy;
        resolve_axis(pos, collider, rb.dy, Axis::Vertical, solids);
    }
}

/// Move the player. Runs before enemies pick their direction so they chase
/// where the player is after this tick's step.
pub fn player_movement(
    mut movers: Query<(&mut MapPosition, &RigidBody, &BoxCollider), (With<Player>, Without<Solid>)>,
    solids: Query<(&MapPosition, &BoxCollider), With<Solid>>,
) {
    let bounds = solid_bounds(&solids);
    for (mut pos, rb, collider) in movers.iter_mut() {
        apply(&mut pos, rb, collider, &bounds);
    }
}

/// Move every enemy along the delta chosen by the chase system.
pub fn enemy_movement(
    mut movers: Query<(&mut MapPosition, &RigidBody, &BoxCollider), (With<Enemy>, Without<Solid>)>,
    solids: Query<(&MapPosition, &BoxCollider), With<Solid>>,
) {
    let bounds = solid_bounds(&solids);
    for (mut pos, rb, collider) in movers.iter_mut() {
        apply(&mut pos, rb, collider, &bounds);
    }
}
