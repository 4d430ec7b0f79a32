//! Game systems.
//!
//! This module groups all ECS systems that advance simulation, input, and
//! rendering.
//!
//! Submodules overview
//! - [`animation`] – advance walk cycles and pick sprite sheet frames
//! - [`camera`] – center the camera on the player and clamp it to the map
//! - [`chase`] – point following enemies at the player
//! - [`combat`] – touch damage, pointer attacks and dead enemy pruning
//! - [`gamestate`] – scene input, pending transitions and run conditions
//! - `input` – read hardware input into [`crate::resources::input::InputState`]
//! - [`movement`] – apply deltas with per-axis collision against solids
//! - [`pickup`] – potion healing
//! - [`playercontrol`] – translate keys into the player's delta and facing
//! - `render` – draw the current scene and debug overlays using Raylib
//! - [`time`] – update the tick counter and frame delta

pub mod animation;
pub mod camera;
pub mod chase;
pub mod combat;
pub mod gamestate;
#[cfg(feature = "render")]
pub mod input;
pub mod movement;
pub mod pickup;
pub mod playercontrol;
#[cfg(feature = "render")]
pub mod render;
pub mod time;
