//! tilecrawl library.
//!
//! This module exposes the game's ECS components, resources, systems, and
//! events for use in integration tests and by the `tilecrawl` binary. The
//! Raylib-backed pieces (texture store, input polling, drawing) are only
//! built with the `render` feature.

pub mod components;
pub mod error;
pub mod events;
pub mod game;
pub mod geometry;
pub mod resources;
pub mod systems;
