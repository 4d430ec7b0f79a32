//! Scene tick integration tests: scene flow, movement, combat and pickups
//! driven through the real update schedule.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use bevy_ecs::prelude::*;

use tilecrawl::components::boxcollider::{BoxCollider, Solid};
use tilecrawl::components::combat::{Combat, Combatant};
use tilecrawl::components::enemy::Enemy;
use tilecrawl::components::mapposition::MapPosition;
use tilecrawl::components::player::{Facing, Player};
use tilecrawl::components::potion::Potion;
use tilecrawl::components::rigidbody::RigidBody;
use tilecrawl::components::tile::Tile;
use tilecrawl::events::combat::{EnemyEliminatedEvent, PlayerDamagedEvent, PlayerDiedEvent};
use tilecrawl::events::gamestate::request_transition;
use tilecrawl::game::{LevelSpawned, init_world, update_schedule};
use tilecrawl::resources::camera::Camera;
use tilecrawl::resources::gameconfig::GameConfig;
use tilecrawl::resources::gamestate::{GameState, GameStates};
use tilecrawl::resources::input::InputState;
use tilecrawl::resources::level::{Level, WorldBounds};
use tilecrawl::resources::roster::EnemyRoster;
use tilecrawl::resources::systemsstore::SystemsStore;
use tilecrawl::resources::tilemap::TileMap;
use tilecrawl::resources::tileset::Tileset;

// 20 x 15 tiles, one layer with a single floor row at the top.
const MAP: &str = r#"{
    "width": 20, "height": 15, "tilewidth": 16, "tileheight": 16,
    "layers": [
        { "name": "floor", "width": 20, "height": 15,
          "data": [1, 2, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0] }
    ],
    "tilesets": [ { "source": "floor.json", "firstgid": 1 } ]
}"#;

const FLOOR: &str = r#"{ "image": "../images/floor.png", "imagewidth": 352, "tilewidth": 16, "tileheight": 16 }"#;

fn small_level() -> Level {
    let tilemap = TileMap::from_json(MAP).unwrap();
    let tileset =
        Tileset::from_json(&PathBuf::from("assets/maps/floor.json"), FLOOR, 1, 16).unwrap();
    Level {
        path: PathBuf::from("assets/maps/small.json"),
        tilemap,
        tilesets: vec![tileset],
    }
}

fn make_world() -> World {
    let mut world = World::new();
    init_world(&mut world, GameConfig::new(), small_level());
    world
}

/// World already in the Game scene with nothing spawned, for hand-built
/// fixtures.
fn make_game_world() -> World {
    let mut world = make_world();
    world.insert_resource(LevelSpawned);
    world.resource_mut::<GameState>().set(GameStates::Game);
    world
}

fn tick(world: &mut World, schedule: &mut Schedule) {
    schedule.run(world);
}

/// Press and release confirm over two ticks.
fn tap_confirm(world: &mut World, schedule: &mut Schedule) {
    world.resource_mut::<InputState>().confirm.update(true);
    tick(world, schedule);
    world.resource_mut::<InputState>().confirm.update(false);
    tick(world, schedule);
}

fn count<F: bevy_ecs::query::QueryFilter>(world: &mut World) -> usize {
    world.query_filtered::<Entity, F>().iter(world).count()
}

fn spawn_player(world: &mut World, x: f32, y: f32) -> Entity {
    world
        .spawn((
            Player::new(2.0),
            MapPosition::new(x, y),
            RigidBody::new(),
            BoxCollider::tile(16.0),
            Combat::basic(1, 3),
        ))
        .id()
}

fn spawn_enemy(world: &mut World, x: f32, y: f32, combat: Combat) -> Entity {
    let e = world
        .spawn((
            Enemy::stationary(),
            MapPosition::new(x, y),
            RigidBody::new(),
            BoxCollider::tile(16.0),
            combat,
        ))
        .id();
    world.resource_mut::<EnemyRoster>().push(e);
    e
}

fn health(world: &World, e: Entity) -> i32 {
    world.get::<Combat>(e).unwrap().health()
}

// ==================== SCENE FLOW ====================

#[test]
fn boot_enters_start_scene() {
    let mut world = make_world();
    request_transition(&mut world, GameStates::Start);
    assert_eq!(world.resource::<GameState>().get(), GameStates::Start);
    assert_eq!(count::<With<Player>>(&mut world), 0);
}

#[test]
fn confirm_from_start_spawns_level_once() {
    let mut world = make_world();
    let mut schedule = update_schedule();
    request_transition(&mut world, GameStates::Start);

    tap_confirm(&mut world, &mut schedule);
    assert_eq!(world.resource::<GameState>().get(), GameStates::Game);
    assert_eq!(count::<With<Player>>(&mut world), 1);
    assert_eq!(count::<With<Enemy>>(&mut world), 2);
    assert_eq!(count::<With<Potion>>(&mut world), 1);
    assert_eq!(count::<With<Tile>>(&mut world), 3);
    assert_eq!(count::<With<Solid>>(&mut world), 1);
    assert_eq!(world.resource::<EnemyRoster>().len(), 2);
    assert_eq!(
        *world.resource::<WorldBounds>(),
        WorldBounds {
            width: 320.0,
            height: 240.0
        }
    );

    // pause and resume: nothing is spawned again
    tap_confirm(&mut world, &mut schedule);
    assert_eq!(world.resource::<GameState>().get(), GameStates::Pause);
    tap_confirm(&mut world, &mut schedule);
    assert_eq!(world.resource::<GameState>().get(), GameStates::Game);
    assert_eq!(count::<With<Player>>(&mut world), 1);
    assert_eq!(count::<With<Tile>>(&mut world), 3);
}

#[test]
fn pause_freezes_gameplay() {
    let mut world = make_world();
    let mut schedule = update_schedule();
    request_transition(&mut world, GameStates::Start);
    tap_confirm(&mut world, &mut schedule);
    tap_confirm(&mut world, &mut schedule);
    assert_eq!(world.resource::<GameState>().get(), GameStates::Pause);

    let player = world
        .query_filtered::<Entity, With<Player>>()
        .single(&world)
        .unwrap();
    let before = *world.get::<MapPosition>(player).unwrap();
    world.resource_mut::<InputState>().right.update(true);
    for _ in 0..5 {
        tick(&mut world, &mut schedule);
    }
    assert_eq!(*world.get::<MapPosition>(player).unwrap(), before);
}

#[test]
fn quit_exits_from_start_and_pause() {
    for confirms in [0, 2] {
        let mut world = make_world();
        let mut schedule = update_schedule();
        request_transition(&mut world, GameStates::Start);
        for _ in 0..confirms {
            tap_confirm(&mut world, &mut schedule);
        }
        world.resource_mut::<InputState>().quit.update(true);
        tick(&mut world, &mut schedule);
        let state = world.resource::<GameState>().get();
        assert_eq!(state, GameStates::Exit);
        assert!(state.is_terminal());
    }
}

#[derive(Resource, Default)]
struct HookCalls(u32);

fn count_hook(mut calls: ResMut<HookCalls>) {
    calls.0 += 1;
}

#[test]
fn hooks_run_exactly_once_per_transition() {
    let mut world = make_world();
    world.init_resource::<HookCalls>();
    world.resource_scope(|world, mut store: Mut<SystemsStore>| {
        store.register(world, GameStates::Pause.enter_hook(), count_hook);
        store.register(world, GameStates::Pause.exit_hook(), count_hook);
    });
    let mut schedule = update_schedule();
    request_transition(&mut world, GameStates::Start);

    tap_confirm(&mut world, &mut schedule); // Game
    assert_eq!(world.resource::<HookCalls>().0, 0);
    tap_confirm(&mut world, &mut schedule); // Pause: enter
    assert_eq!(world.resource::<HookCalls>().0, 1);
    world.resource_mut::<InputState>().confirm.update(true);
    tick(&mut world, &mut schedule); // Game: exit pause
    // holding confirm does not retrigger
    world.resource_mut::<InputState>().confirm.update(true);
    tick(&mut world, &mut schedule);
    tick(&mut world, &mut schedule);
    assert_eq!(world.resource::<HookCalls>().0, 2);
    assert_eq!(world.resource::<GameState>().get(), GameStates::Game);
}

// ==================== MOVEMENT ====================

#[test]
fn player_walks_into_wall_and_snaps() {
    let mut world = make_game_world();
    let mut schedule = update_schedule();
    world.spawn((MapPosition::new(100.0, 100.0), BoxCollider::tile(16.0), Solid));
    let player = spawn_player(&mut world, 98.0, 100.0);

    world.resource_mut::<InputState>().right.update(true);
    tick(&mut world, &mut schedule);

    assert_eq!(world.get::<MapPosition>(player).unwrap().x, 84.0);
    assert_eq!(world.get::<Player>(player).unwrap().facing, Facing::Right);
}

#[test]
fn chasing_enemy_approaches_player_each_tick() {
    let mut world = make_game_world();
    let mut schedule = update_schedule();
    spawn_player(&mut world, 50.0, 50.0);
    let chaser = world
        .spawn((
            Enemy::chaser(1.0),
            MapPosition::new(150.0, 50.0),
            RigidBody::new(),
            BoxCollider::tile(16.0),
            Combat::cooldown(30, 1, 3),
        ))
        .id();
    world.resource_mut::<EnemyRoster>().push(chaser);

    for _ in 0..10 {
        tick(&mut world, &mut schedule);
    }
    assert_eq!(*world.get::<MapPosition>(chaser).unwrap(), MapPosition::new(140.0, 50.0));
}

#[test]
fn enemy_chases_where_player_lands_this_tick() {
    let mut world = make_game_world();
    let mut schedule = update_schedule();
    let player = spawn_player(&mut world, 50.0, 50.0);
    let chaser = world
        .spawn((
            Enemy::chaser(1.0),
            MapPosition::new(51.0, 50.0),
            RigidBody::new(),
            BoxCollider::tile(16.0),
            Combat::cooldown(30, 1, 3),
        ))
        .id();
    world.resource_mut::<EnemyRoster>().push(chaser);

    world.resource_mut::<InputState>().right.update(true);
    tick(&mut world, &mut schedule);

    assert_eq!(world.get::<MapPosition>(player).unwrap().x, 52.0);
    assert_eq!(*world.get::<MapPosition>(chaser).unwrap(), MapPosition::new(52.0, 50.0));
}

// ==================== COMBAT ====================

fn record_reports(world: &mut World) -> Arc<Mutex<Vec<String>>> {
    let log = Arc::new(Mutex::new(Vec::new()));
    let l = log.clone();
    world.add_observer(move |t: On<PlayerDamagedEvent>| {
        l.lock().unwrap().push(format!("damaged {}", t.event().health));
    });
    let l = log.clone();
    world.add_observer(move |t: On<PlayerDiedEvent>| {
        l.lock().unwrap().push(format!("died {}", t.event().health));
    });
    let l = log.clone();
    world.add_observer(move |_t: On<EnemyEliminatedEvent>| {
        l.lock().unwrap().push("eliminated".to_string());
    });
    world.flush();
    log
}

#[test]
fn zero_cooldown_enemy_hits_every_tick_until_death() {
    let mut world = make_game_world();
    let mut schedule = update_schedule();
    let log = record_reports(&mut world);
    let player = spawn_player(&mut world, 0.0, 0.0);
    spawn_enemy(&mut world, 8.0, 0.0, Combat::cooldown(0, 1, 5));

    for _ in 0..3 {
        tick(&mut world, &mut schedule);
    }

    assert_eq!(health(&world, player), 0);
    assert_eq!(
        *log.lock().unwrap(),
        vec!["damaged 2", "damaged 1", "damaged 0", "died 0"]
    );
    // the player is never despawned
    assert!(world.get_entity(player).is_ok());
}

#[test]
fn cooldown_enemy_hits_on_first_tick_then_waits() {
    let mut world = make_game_world();
    let mut schedule = update_schedule();
    let player = spawn_player(&mut world, 0.0, 0.0);
    spawn_enemy(&mut world, 8.0, 8.0, Combat::cooldown(30, 1, 3));

    tick(&mut world, &mut schedule);
    assert_eq!(health(&world, player), 2);
    for _ in 0..29 {
        tick(&mut world, &mut schedule);
    }
    assert_eq!(health(&world, player), 2);
    tick(&mut world, &mut schedule);
    assert_eq!(health(&world, player), 1);
}

#[test]
fn pointer_click_damages_enemy_in_reach() {
    let mut world = make_game_world();
    let mut schedule = update_schedule();
    let log = record_reports(&mut world);
    let player = spawn_player(&mut world, 50.0, 50.0);
    let near = spawn_enemy(&mut world, 80.0, 50.0, Combat::cooldown(30, 1, 2));
    let far = spawn_enemy(&mut world, 200.0, 50.0, Combat::cooldown(30, 1, 2));

    // settle the camera first
    tick(&mut world, &mut schedule);

    let click = |world: &mut World, wx: f32, wy: f32, schedule: &mut Schedule| {
        let (sx, sy) = world.resource::<Camera>().world_to_screen(wx, wy);
        {
            let mut input = world.resource_mut::<InputState>();
            input.pointer.x = sx;
            input.pointer.y = sy;
            input.pointer.primary.update(true);
        }
        schedule.run(world);
        world.resource_mut::<InputState>().pointer.primary.update(false);
        schedule.run(world);
    };

    click(&mut world, 205.0, 55.0, &mut schedule);
    assert_eq!(health(&world, far), 2);
    assert!(!world.get::<Combat>(player).unwrap().attacking());

    click(&mut world, 85.0, 55.0, &mut schedule);
    assert_eq!(health(&world, near), 1);
    assert!(world.get::<Combat>(player).unwrap().attacking());

    click(&mut world, 85.0, 55.0, &mut schedule);
    assert!(world.get_entity(near).is_err());
    assert_eq!(world.resource::<EnemyRoster>().as_slice(), &[far]);
    assert_eq!(*log.lock().unwrap(), vec!["eliminated"]);
}

#[test]
fn dead_enemies_pruned_in_one_batch_keeping_order() {
    let mut world = make_game_world();
    let mut schedule = update_schedule();
    spawn_player(&mut world, 300.0, 200.0);
    let a = spawn_enemy(&mut world, 0.0, 0.0, Combat::cooldown(30, 1, 1));
    let b = spawn_enemy(&mut world, 40.0, 0.0, Combat::cooldown(30, 1, 0));
    let c = spawn_enemy(&mut world, 80.0, 0.0, Combat::cooldown(30, 1, 1));

    tick(&mut world, &mut schedule);
    assert_eq!(world.resource::<EnemyRoster>().as_slice(), &[a, c]);
    assert!(world.get_entity(b).is_err());

    world.get_mut::<Combat>(a).unwrap().damage(1);
    world.get_mut::<Combat>(c).unwrap().damage(1);
    tick(&mut world, &mut schedule);
    assert!(world.resource::<EnemyRoster>().is_empty());
    assert_eq!(count::<With<Enemy>>(&mut world), 0);
}

// ==================== PICKUP ====================

#[test]
fn walking_over_potion_heals_once() {
    let mut world = make_game_world();
    let mut schedule = update_schedule();
    let player = spawn_player(&mut world, 192.0, 100.0);
    world.spawn((
        Potion { amount_heal: 1 },
        MapPosition::new(210.0, 100.0),
        BoxCollider::tile(16.0),
    ));

    world.resource_mut::<InputState>().right.update(true);
    for _ in 0..4 {
        tick(&mut world, &mut schedule);
    }
    assert_eq!(health(&world, player), 4);
    assert_eq!(count::<With<Potion>>(&mut world), 0);
}
