//! Keyboard control of the player.
//!
//! Maps the directional keys of [`InputState`] to the player's
//! [`RigidBody`] delta and keeps [`Player::facing`] in sync with it.
use bevy_ecs::prelude::*;

use crate::components::player::{Facing, Player};
use crate::components::rigidbody::RigidBody;
use crate::resources::input::InputState;

/// Signed per-axis step: `negative` wins over `positive` when both are held.
fn axis(negative: bool, positive: bool, speed: f32) -> f32 {
    if negative {
        -speed
    } else if positive {
        speed
    } else {
        0.0
    }
}

pub fn player_control(input: Res<InputState>, mut query: Query<(&mut Player, &mut RigidBody)>) {
    for (mut player, mut rb) in query.iter_mut() {
        rb.dx = axis(input.left.active, input.right.active, player.speed);
        rb.dy = axis(input.up.active, input.down.active, player.speed);
        if let Some(facing) = Facing::from_delta(rb.dx, rb.dy) {
            player.facing = facing;
        }
    }
}
