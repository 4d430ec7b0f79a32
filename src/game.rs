//! Scene hooks, level spawning and the per-tick update schedule.
//!
//! The hooks in this module are registered as one-shot systems in the
//! [`SystemsStore`] and run by the game state observer on every transition.
//! [`init_world`] prepares a `World` with every resource and observer the
//! simulation needs, and [`update_schedule`] builds the ordered systems run
//! once per tick.

use bevy_ecs::prelude::*;
use log::{debug, error, info, warn};

use crate::components::animation::{Animation, FacingAnimations};
use crate::components::boxcollider::{BoxCollider, Solid};
use crate::components::combat::Combat;
use crate::components::enemy::Enemy;
use crate::components::mapposition::MapPosition;
use crate::components::player::{Facing, Player};
use crate::components::potion::Potion;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::components::spritesheet::SpriteSheet;
use crate::components::tile::Tile;
use crate::components::zindex::ZIndex;
use crate::events::combat::add_combat_observers;
use crate::events::gamestate::observe_gamestate_change_event;
use crate::events::switchdebug::switch_debug_observer;
use crate::geometry::Rect;
use crate::resources::camera::Camera;
use crate::resources::debugmode::DebugMode;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::input::InputState;
use crate::resources::level::Level;
use crate::resources::roster::EnemyRoster;
use crate::resources::screensize::ScreenSize;
use crate::resources::systemsstore::SystemsStore;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::player_animation;
use crate::systems::camera::camera_follow_player;
use crate::systems::chase::enemy_chase;
use crate::systems::combat::combat_system;
use crate::systems::gamestate::{check_pending_state, scene_input_system, state_is_game};
use crate::systems::movement::{enemy_movement, player_movement};
use crate::systems::pickup::potion_pickup;
use crate::systems::playercontrol::player_control;

pub const PLAYER_TEXTURE: &str = "./assets/images/ninja.png";
pub const ENEMY_TEXTURE: &str = "./assets/images/skeleton.png";
pub const POTION_TEXTURE: &str = "./assets/images/heart_potion.png";

const SPRITE_SIZE: f32 = 16.0;
const PLAYER_SPEED: f32 = 2.0;
const ENEMY_SPEED: f32 = 1.0;

// Actors draw above every tile layer: player, then enemies, then potions.
const PLAYER_Z: ZIndex = ZIndex(0);
const ENEMY_Z: ZIndex = ZIndex(1);
const POTION_Z: ZIndex = ZIndex(2);

/// Static solid rectangles as (min_x, min_y, max_x, max_y).
const LEVEL_COLLIDERS: [(f32, f32, f32, f32); 1] = [(100.0, 100.0, 116.0, 116.0)];

/// Marker resource: the level's entities exist. Re-entering the Game scene
/// after a pause keeps them instead of spawning a second copy.
#[derive(Resource, Debug, Clone, Copy)]
pub struct LevelSpawned;

/// Insert every resource and observer the simulation needs.
///
/// The level must already be loaded; failing to load it is fatal and happens
/// before the world exists.
pub fn init_world(world: &mut World, config: GameConfig, level: Level) {
    world.insert_resource(WorldTime::default());
    world.insert_resource(ScreenSize {
        w: config.window_width as i32,
        h: config.window_height as i32,
    });
    world.insert_resource(InputState::default());
    world.insert_resource(Camera::default());
    world.insert_resource(EnemyRoster::new());
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    if config.debug {
        world.insert_resource(DebugMode {});
    }
    world.insert_resource(config);
    world.insert_resource(level);

    world.add_observer(observe_gamestate_change_event);
    world.add_observer(switch_debug_observer);
    add_combat_observers(world);

    register_scene_hooks(world);
    // Ensure observers are registered before any system triggers events.
    world.flush();
}

/// Register the scene enter/exit hooks under the names the game state
/// observer looks up.
pub fn register_scene_hooks(world: &mut World) {
    let mut systems_store = SystemsStore::new();
    systems_store.register(world, GameStates::Start.enter_hook(), enter_start);
    systems_store.register(world, GameStates::Game.enter_hook(), enter_game);
    systems_store.register(world, GameStates::Game.exit_hook(), exit_game);
    systems_store.register(world, GameStates::Pause.enter_hook(), enter_pause);
    systems_store.register(world, GameStates::Exit.enter_hook(), enter_exit);
    world.insert_resource(systems_store);
}

/// Systems run once per tick, in order. Gameplay only runs in the Game scene.
pub fn update_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems((scene_input_system, check_pending_state).chain());
    update.add_systems(
        (
            player_control,
            player_movement,
            enemy_chase,
            enemy_movement,
            combat_system,
            potion_pickup,
            player_animation,
            camera_follow_player,
        )
            .chain()
            .run_if(state_is_game)
            .after(check_pending_state),
    );
    update
}

pub fn enter_start() {
    info!("Start scene: press enter to start");
}

/// Spawn the level on the first entry into the Game scene.
pub fn enter_game(
    mut commands: Commands,
    level: Option<Res<Level>>,
    spawned: Option<Res<LevelSpawned>>,
) {
    if spawned.is_some() {
        info!("Resuming game");
        return;
    }
    let Some(level) = level else {
        error!("Entered the Game scene without a loaded level");
        return;
    };

    spawn_tiles(&mut commands, &level);
    spawn_colliders(&mut commands);
    spawn_player(&mut commands);
    let roster = spawn_enemies(&mut commands);
    spawn_potions(&mut commands);
    info!(
        "Spawned level {} with {} enemies",
        level.path.display(),
        roster.len()
    );

    commands.insert_resource(level.bounds());
    commands.insert_resource(roster);
    commands.insert_resource(LevelSpawned);
}

pub fn exit_game() {
    debug!("Leaving the Game scene");
}

pub fn enter_pause() {
    info!("Paused: press enter to unpause");
}

pub fn enter_exit() {
    info!("Quitting");
}

/// One sprite per non-empty cell, layers in order. Tiles taller than a cell
/// are anchored on the cell's bottom edge.
fn spawn_tiles(commands: &mut Commands, level: &Level) {
    let tile_size = level.tile_size();
    let layer_count = level.tilemap.layers.len();
    let mut spawned = 0usize;

    for (layer_index, layer) in level.tilemap.layers.iter().enumerate() {
        let z = ZIndex::for_layer(layer_index, layer_count);
        for (col, row, gid) in layer.tiles() {
            let Some(region) = level.region(gid) else {
                warn!("Layer '{}': no tileset for tile id {}", layer.name, gid);
                continue;
            };
            let x = col as f32 * tile_size;
            let mut y = row as f32 * tile_size;
            if region.src.h > tile_size {
                y += tile_size - region.src.h;
            }
            commands.spawn((
                Tile {
                    layer: layer_index,
                    gid,
                },
                MapPosition::new(x, y),
                Sprite::from_region(region.tex_key, region.src),
                z,
            ));
            spawned += 1;
        }
    }
    debug!("Spawned {} tiles from {} layers", spawned, layer_count);
}

fn spawn_colliders(commands: &mut Commands) {
    for (min_x, min_y, max_x, max_y) in LEVEL_COLLIDERS {
        let rect = Rect::from_corners(min_x, min_y, max_x, max_y);
        commands.spawn((
            MapPosition::new(rect.x, rect.y),
            BoxCollider::new(rect.w, rect.h),
            Solid,
        ));
    }
}

fn player_animations() -> FacingAnimations {
    FacingAnimations::new()
        .with(Facing::Up, 1, Animation::new(5, 13, 4, 20.0))
        .with(Facing::Down, 0, Animation::new(4, 12, 4, 20.0))
        .with(Facing::Left, 2, Animation::new(6, 14, 4, 20.0))
        .with(Facing::Right, 3, Animation::new(7, 15, 4, 20.0))
}

fn spawn_player(commands: &mut Commands) {
    commands.spawn((
        Player::new(PLAYER_SPEED),
        MapPosition::new(50.0, 50.0),
        RigidBody::new(),
        BoxCollider::tile(SPRITE_SIZE),
        Combat::basic(1, 3),
        Sprite::new(PLAYER_TEXTURE, SPRITE_SIZE, SPRITE_SIZE),
        SpriteSheet::new(4, 7, SPRITE_SIZE as u32),
        player_animations(),
        PLAYER_Z,
    ));
}

/// Spawn the enemies and return them in spawn order.
fn spawn_enemies(commands: &mut Commands) -> EnemyRoster {
    let mut roster = EnemyRoster::new();
    let enemies = [
        (Enemy::chaser(ENEMY_SPEED), 100.0, 100.0),
        (Enemy::stationary(), 150.0, 150.0),
    ];
    for (enemy, x, y) in enemies {
        let entity = commands
            .spawn((
                enemy,
                MapPosition::new(x, y),
                RigidBody::new(),
                BoxCollider::tile(SPRITE_SIZE),
                Combat::cooldown(30, 1, 3),
                Sprite::new(ENEMY_TEXTURE, SPRITE_SIZE, SPRITE_SIZE),
                ENEMY_Z,
            ))
            .id();
        roster.push(entity);
    }
    roster
}

fn spawn_potions(commands: &mut Commands) {
    commands.spawn((
        Potion { amount_heal: 1 },
        MapPosition::new(210.0, 100.0),
        BoxCollider::tile(SPRITE_SIZE),
        Sprite::new(POTION_TEXTURE, SPRITE_SIZE, SPRITE_SIZE),
        POTION_Z,
    ));
}
