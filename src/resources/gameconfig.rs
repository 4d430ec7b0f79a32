//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults for safe startup and a method to load the configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 640
//! height = 480
//! title = tilecrawl
//! target_fps = 60
//!
//! [game]
//! map = ./assets/maps/spawn.json
//!
//! [debug]
//! enabled = false
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 640;
const DEFAULT_WINDOW_HEIGHT: u32 = 480;
const DEFAULT_WINDOW_TITLE: &str = "tilecrawl";
/// The simulation is tick-based, so this is also the tick rate.
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_MAP_PATH: &str = "./assets/maps/spawn.json";
const DEFAULT_DEBUG: bool = false;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores window settings, the level to load and whether the debug overlay
/// starts enabled.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    pub window_title: String,
    /// Target frames (and ticks) per second.
    pub target_fps: u32,
    /// Tiled JSON map loaded by the Game scene.
    pub map_path: PathBuf,
    /// Start with the debug overlay on.
    pub debug: bool,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
            target_fps: DEFAULT_TARGET_FPS,
            map_path: PathBuf::from(DEFAULT_MAP_PATH),
            debug: DEFAULT_DEBUG,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, contents: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(contents.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(title) = config.get("window", "title") {
            self.window_title = title;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [game] section
        if let Some(map) = config.get("game", "map") {
            self.map_path = PathBuf::from(map);
        }

        // [debug] section
        if let Some(enabled) = config.getbool("debug", "enabled").ok().flatten() {
            self.debug = enabled;
        }

        info!(
            "Loaded config: {}x{} window, fps={}, map={}, debug={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.map_path.display(),
            self.debug
        );
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.window_size(), (640, 480));
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.map_path, PathBuf::from("./assets/maps/spawn.json"));
        assert!(!config.debug);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[window]\nwidth = 800\n\n[debug]\nenabled = true\n")
            .unwrap();
        assert_eq!(config.window_size(), (800, 480));
        assert!(config.debug);
        assert_eq!(config.window_title, "tilecrawl");
    }

    #[test]
    fn test_game_section_sets_map() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[game]\nmap = levels/cave.json\n")
            .unwrap();
        assert_eq!(config.map_path, PathBuf::from("levels/cave.json"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut config = GameConfig::with_path("/nonexistent/tilecrawl/config.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config, GameConfig {
            config_path: PathBuf::from("/nonexistent/tilecrawl/config.ini"),
            ..GameConfig::new()
        });
    }
}
