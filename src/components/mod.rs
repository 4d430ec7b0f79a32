//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world. Components define data such as position, rendering,
//! collision, animation and combat.
//!
//! Submodules overview:
//! - [`animation`] – frame-range playback and per-facing animation sets
//! - [`boxcollider`] – axis-aligned rectangular collider and the `Solid` marker
//! - [`combat`] – attack and health behaviour shared by player and enemies
//! - [`enemy`] – enemy marker with chase settings
//! - [`mapposition`] – world-space top-left position of an entity
//! - [`player`] – player marker, facing and walk speed
//! - [`potion`] – healing pickup
//! - [`rigidbody`] – per-tick movement intent
//! - [`sprite`] – texture key and source region to draw
//! - [`spritesheet`] – grid layout of a character sheet
//! - [`tile`] – map tile marker
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod animation;
pub mod boxcollider;
pub mod combat;
pub mod enemy;
pub mod mapposition;
pub mod player;
pub mod potion;
pub mod rigidbody;
pub mod sprite;
pub mod spritesheet;
pub mod tile;
pub mod zindex;
