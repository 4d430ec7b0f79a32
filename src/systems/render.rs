//! Drawing.
//!
//! [`render_system`] opens Raylib's drawing scope once per frame and paints
//! the current scene. The Game scene draws every sprite sorted by
//! [`ZIndex`], shifted by the [`Camera`] offset, then outlines the static
//! solids. With [`DebugMode`] present it also outlines every collider and
//! prints frame diagnostics.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::boxcollider::{BoxCollider, Solid};
use crate::components::combat::{Combat, Combatant};
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::camera::Camera;
use crate::resources::debugmode::DebugMode;
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use crate::resources::worldtime::WorldTime;

const GAME_BACKGROUND: Color = Color { r: 120, g: 180, b: 255, a: 255 };
const START_BACKGROUND: Color = Color { r: 255, g: 0, b: 0, a: 255 };
const PAUSE_BACKGROUND: Color = Color { r: 0, g: 255, b: 0, a: 255 };

#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    textures: NonSend<TextureStore>,
    state: Res<GameState>,
    camera: Res<Camera>,
    screen: Res<ScreenSize>,
    time: Res<WorldTime>,
    debug: Option<Res<DebugMode>>,
    sprites: Query<(&Sprite, &MapPosition, &ZIndex)>,
    colliders: Query<(&MapPosition, &BoxCollider, Has<Solid>)>,
    player: Query<&Combat, With<Player>>,
) {
    let mut d = rl.begin_drawing(&th);

    match state.get() {
        GameStates::Start => {
            d.clear_background(START_BACKGROUND);
            d.draw_text("Press enter to start", 10, 10, 10, Color::WHITE);
        }
        GameStates::Pause => {
            d.clear_background(PAUSE_BACKGROUND);
            d.draw_text("Press enter to unpause.", 10, 10, 10, Color::WHITE);
        }
        GameStates::Game => {
            d.clear_background(GAME_BACKGROUND);
            draw_world(&mut d, &textures, &camera, &sprites);
            draw_colliders(&mut d, &camera, &colliders, debug.is_some());
        }
        GameStates::None | GameStates::Exit => d.clear_background(Color::BLACK),
    }

    if debug.is_some() {
        render_debug_ui(&mut d, &camera, &screen, &time);
        if let Ok(combat) = player.single() {
            let text = format!("Health: {} | Attacking: {}", combat.health(), combat.attacking());
            d.draw_text(&text, 10, 70, 10, Color::BLACK);
        }
    }
}

fn draw_world(
    d: &mut RaylibDrawHandle,
    textures: &TextureStore,
    camera: &Camera,
    sprites: &Query<(&Sprite, &MapPosition, &ZIndex)>,
) {
    let mut to_draw: Vec<(&Sprite, &MapPosition, ZIndex)> =
        sprites.iter().map(|(s, p, z)| (s, p, *z)).collect();
    // stable sort keeps spawn order within a layer
    to_draw.sort_by_key(|(_, _, z)| *z);

    for (sprite, pos, _z) in to_draw {
        let Some(tex) = textures.get(&sprite.tex_key) else {
            continue;
        };
        let src = sprite.source();
        let (sx, sy) = camera.world_to_screen(pos.x, pos.y);
        d.draw_texture_rec(
            tex,
            Rectangle::new(src.x, src.y, src.w, src.h),
            Vector2::new(sx, sy),
            Color::WHITE,
        );
    }
}

/// Static solids are always outlined; with `all` every collider is.
fn draw_colliders(
    d: &mut RaylibDrawHandle,
    camera: &Camera,
    colliders: &Query<(&MapPosition, &BoxCollider, Has<Solid>)>,
    all: bool,
) {
    for (pos, collider, solid) in colliders.iter() {
        if !solid && !all {
            continue;
        }
        let bounds = collider.aabb(pos.x, pos.y);
        let (sx, sy) = camera.world_to_screen(bounds.x, bounds.y);
        let color = if solid { Color::RED } else { Color::YELLOW };
        d.draw_rectangle_lines(sx as i32, sy as i32, bounds.w as i32, bounds.h as i32, color);
    }
}

fn render_debug_ui(d: &mut RaylibDrawHandle, camera: &Camera, screen: &ScreenSize, time: &WorldTime) {
    let fps = d.get_fps();
    let text = format!("DEBUG MODE (press F11 to toggle) | FPS: {}", fps);
    d.draw_text(&text, 10, 30, 10, Color::BLACK);

    let text = format!("Ticks: {} | Elapsed: {:.1}s", time.ticks, time.elapsed);
    d.draw_text(&text, 10, 50, 10, Color::BLACK);

    let cam_text = format!("Camera offset: ({:.1}, {:.1})", camera.x, camera.y);
    d.draw_text(&cam_text, 10, screen.h - 30, 10, Color::BLACK);
}
