//! Camera follow system.
use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::resources::camera::Camera;
use crate::resources::level::WorldBounds;
use crate::resources::screensize::ScreenSize;

/// Center the camera on the player, then keep the view inside the map.
pub fn camera_follow_player(
    mut camera: ResMut<Camera>,
    screen: Res<ScreenSize>,
    bounds: Option<Res<WorldBounds>>,
    player: Query<(&MapPosition, &BoxCollider), With<Player>>,
) {
    let Ok((pos, collider)) = player.single() else {
        return;
    };
    let (vw, vh) = (screen.w as f32, screen.h as f32);
    let (cx, cy) = collider.aabb(pos.x, pos.y).center();
    camera.follow_target(cx, cy, vw, vh);
    if let Some(bounds) = bounds {
        camera.constrain(bounds.width, bounds.height, vw, vh);
    }
}
