use bevy_ecs::prelude::Component;

/// Hostile actor. Enemies deal touch damage to the player and are
/// despawned once their health drops to zero or below.
#[derive(Component, Debug, Clone, Copy)]
pub struct Enemy {
    /// Whether the enemy walks toward the player every tick.
    pub follows_player: bool,
    /// Pixels moved per tick on each axis while chasing.
    pub speed: f32,
}

impl Enemy {
    pub fn chaser(speed: f32) -> Self {
        Self {
            follows_player: true,
            speed,
        }
    }

    pub fn stationary() -> Self {
        Self {
            follows_player: false,
            speed: 0.0,
        }
    }
}
