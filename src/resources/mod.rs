//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: input state, timing, the loaded
//! level, asset stores, and the scene state machine. Each submodule documents
//! the semantics and intended usage of its resource(s).
//!
//! Overview
//! - `camera` – scrolling offset applied to every world-space draw
//! - `debugmode` – presence toggles collider outlines and diagnostic text
//! - `gameconfig` – settings read from the INI configuration file
//! - `gamestate` – authoritative and pending scene state
//! - `input` – per-frame snapshot of keys and pointer relevant to the game
//! - `level` – parsed map plus tilesets, and the map's pixel bounds
//! - `roster` – spawn-ordered list of live enemies
//! - `screensize` – current framebuffer dimensions in pixels
//! - `systemsstore` – registry of scene hook systems by name
//! - `texturestore` – loaded textures keyed by image path
//! - `tilemap` – Tiled JSON map document
//! - `tileset` – Tiled JSON tileset documents and gid resolution
//! - `worldtime` – tick counter and frame delta
pub mod camera;
pub mod debugmode;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod level;
pub mod roster;
pub mod screensize;
pub mod systemsstore;
#[cfg(feature = "render")]
pub mod texturestore;
pub mod tilemap;
pub mod tileset;
pub mod worldtime;
