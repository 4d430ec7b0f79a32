//! Combat outcome events.
//!
//! The combat system reports what happened during a tick through these
//! events. The observers here only log; there is no game-over scene, so a
//! dead player keeps playing with non-positive health.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{info, warn};

/// The player took damage and has `health` left.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerDamagedEvent {
    pub health: i32,
}

/// The player's health dropped to or below zero.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerDiedEvent {
    pub health: i32,
}

/// An enemy died and is about to be despawned.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyEliminatedEvent {
    pub entity: Entity,
}

pub fn observe_player_damaged(trigger: On<PlayerDamagedEvent>) {
    info!("Player hit, health left: {}", trigger.event().health);
}

pub fn observe_player_died(trigger: On<PlayerDiedEvent>) {
    warn!("Player died (health {})", trigger.event().health);
}

pub fn observe_enemy_eliminated(trigger: On<EnemyEliminatedEvent>) {
    info!("Enemy {:?} eliminated", trigger.event().entity);
}

/// Register the logging observers for every combat event.
pub fn add_combat_observers(world: &mut World) {
    world.add_observer(observe_player_damaged);
    world.add_observer(observe_player_died);
    world.add_observer(observe_enemy_eliminated);
}
