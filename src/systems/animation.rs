//! Sprite animation for entities with per-facing walk cycles.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::animation::FacingAnimations;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::components::spritesheet::SpriteSheet;

/// Advance the walk cycle of the current facing while moving, show its idle
/// frame (and rewind the cycle) otherwise, then point the sprite at the
/// resulting sheet frame.
pub fn player_animation(
    mut query: Query<(&Player, &RigidBody, &SpriteSheet, &mut FacingAnimations, &mut Sprite)>,
) {
    for (player, rb, sheet, mut animations, mut sprite) in query.iter_mut() {
        let Some(current) = animations.get_mut(player.facing) else {
            continue;
        };
        let frame = if rb.is_moving() {
            current.walk.update();
            current.walk.frame()
        } else {
            current.walk.reset();
            current.idle_frame
        };
        if frame >= sheet.frame_count() {
            debug!("Frame {} is outside the {}-frame sheet", frame, sheet.frame_count());
            continue;
        }
        sprite.set_region(sheet.rect(frame));
    }
}
