//! Enemy chase behaviour.
use bevy_ecs::prelude::*;

use crate::components::enemy::Enemy;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;

/// Step of `speed` toward `target` on one axis, zero when already aligned.
fn toward(from: f32, to: f32, speed: f32) -> f32 {
    if from < to {
        speed
    } else if from > to {
        -speed
    } else {
        0.0
    }
}

/// Point every following enemy at the player's current position.
///
/// The delta is per axis, so diagonal chasing is faster than straight
/// chasing. Enemies that do not follow stand still.
pub fn enemy_chase(
    player: Query<&MapPosition, With<Player>>,
    mut enemies: Query<(&Enemy, &MapPosition, &mut RigidBody), Without<Player>>,
) {
    let Ok(target) = player.single() else {
        return;
    };
    for (enemy, pos, mut rb) in enemies.iter_mut() {
        if enemy.follows_player {
            rb.dx = toward(pos.x, target.x, enemy.speed);
            rb.dy = toward(pos.y, target.y, enemy.speed);
        } else {
            rb.stop();
        }
    }
}
