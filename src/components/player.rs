//! Player marker and facing direction.

use bevy_ecs::prelude::Component;

/// One of the four directions an actor can face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Facing {
    /// Direction implied by a movement delta, if it is non-zero.
    ///
    /// Horizontal movement wins over vertical movement, so walking
    /// diagonally shows the side-facing animation.
    pub fn from_delta(dx: f32, dy: f32) -> Option<Self> {
        if dx > 0.0 {
            Some(Facing::Right)
        } else if dx < 0.0 {
            Some(Facing::Left)
        } else if dy > 0.0 {
            Some(Facing::Down)
        } else if dy < 0.0 {
            Some(Facing::Up)
        } else {
            None
        }
    }
}

/// The player-controlled entity. Exactly one exists while the Game scene is
/// loaded, and it is never despawned.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player {
    /// Last non-zero facing direction.
    pub facing: Facing,
    /// Pixels moved per tick on each axis while a direction key is held.
    pub speed: f32,
}

impl Player {
    pub fn new(speed: f32) -> Self {
        Self {
            facing: Facing::default(),
            speed,
        }
    }
}
