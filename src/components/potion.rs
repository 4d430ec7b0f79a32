use bevy_ecs::prelude::Component;

/// Pickup that restores `amount_heal` health to the player on contact and is
/// consumed.
#[derive(Component, Debug, Clone, Copy)]
pub struct Potion {
    pub amount_heal: i32,
}
