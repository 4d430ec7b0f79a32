//! Per-tick movement delta.
//!
//! Movement in this game is tick-based rather than time-based: a
//! [`RigidBody`] holds how many pixels its entity should travel on each axis
//! during the next update. Control systems (player input, enemy chase) write
//! it fresh every tick and the movement system consumes it.

use bevy_ecs::prelude::Component;

/// Kinematic body storing the per-tick displacement.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct RigidBody {
    /// Horizontal displacement in pixels per tick.
    pub dx: f32,
    /// Vertical displacement in pixels per tick.
    pub dy: f32,
}

impl RigidBody {
    /// Create a RigidBody at rest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a RigidBody with the given per-tick delta.
    pub fn with_delta(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    /// Set both axes to zero.
    pub fn stop(&mut self) {
        self.dx = 0.0;
        self.dy = 0.0;
    }

    pub fn is_moving(&self) -> bool {
        self.dx != 0.0 || self.dy != 0.0
    }
}
