//! tilecrawl main entry point.
//!
//! A small 2D tile-based action game written in Rust using:
//! - **raylib** for windowing, input and graphics
//! - **bevy_ecs** for entity-component-system architecture
//!
//! The player walks a Tiled map, fights skeletons and picks up potions.
//!
//! # Main Loop
//!
//! 1. Read `config.ini` and command line overrides
//! 2. Load the level (map and tilesets); failure aborts the process
//! 3. Initialize the raylib window, ECS world, resources and observers
//! 4. Enter the Start scene, then every frame:
//!    - update time, input and the scene state machine
//!    - in the Game scene: control, player movement, chase, enemy movement,
//!      combat, pickup, animation and camera
//!    - load textures referenced by new sprites
//!    - draw the current scene
//! 5. Stop when the window closes or the Exit scene is reached
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --map assets/maps/spawn.json
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};

use tilecrawl::error::AssetError;
use tilecrawl::events::gamestate::request_transition;
use tilecrawl::game::{init_world, update_schedule};
use tilecrawl::resources::gameconfig::GameConfig;
use tilecrawl::resources::gamestate::{GameState, GameStates};
use tilecrawl::resources::level::Level;
use tilecrawl::resources::screensize::ScreenSize;
use tilecrawl::resources::texturestore::{TextureStore, load_pending_textures};
use tilecrawl::systems::gamestate::scene_input_system;
use tilecrawl::systems::input::update_input_state;
use tilecrawl::systems::render::render_system;
use tilecrawl::systems::time::update_world_time;

const IMAGES_README: &str = "assets/images/README.md";

/// tilecrawl: walk the map, fight skeletons, drink potions.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Tiled JSON map to play, overriding the configuration file.
    #[arg(long, value_name = "PATH")]
    map: Option<PathBuf>,

    /// Start with the debug overlay enabled (toggle with F11).
    #[arg(long)]
    debug: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }
    if let Some(map) = cli.map {
        config.map_path = map;
    }
    config.debug |= cli.debug;

    let level = match Level::load(&config.map_path) {
        Ok(level) => level,
        Err(e) => {
            error!("Failed to load level: {}", e);
            std::process::exit(1);
        }
    };

    // --------------- Raylib window ---------------
    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .title(&config.window_title)
        .build();
    rl.set_target_fps(config.target_fps);
    // Q quits, not ESC
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    init_world(&mut world, config, level);
    world.insert_non_send_resource(TextureStore::new());
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
    world.flush();

    request_transition(&mut world, GameStates::Start);

    let mut update = update_schedule();
    update.add_systems(update_input_state.before(scene_input_system));
    let mut render = Schedule::default();
    render.add_systems(render_system);

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && !world.resource::<GameState>().get().is_terminal()
    {
        let (dt, w, h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_frame_time(), rl.get_screen_width(), rl.get_screen_height())
        };
        update_world_time(&mut world, dt);
        *world.resource_mut::<ScreenSize>() = ScreenSize { w, h };

        update.run(&mut world);

        if let Err(e) = load_pending_textures(&mut world) {
            error!("Failed to load texture: {}", e);
            if matches!(e, AssetError::Texture { .. }) {
                error!("Images are not shipped with the game; see {}", IMAGES_README);
            }
            std::process::exit(1);
        }

        render.run(&mut world);

        world.clear_trackers();
    }
    info!("Bye");
}
