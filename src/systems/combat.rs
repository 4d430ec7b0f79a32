//! Melee and pointer combat.
//!
//! Runs once per tick after movement:
//!
//! 1. every [`Combat`] advances its timers;
//! 2. enemies are visited in [`EnemyRoster`] order. An enemy touching the
//!    player tries to attack it, and an enemy under a fresh pointer click
//!    within reach of the player takes the player's attack power as damage;
//! 3. dead enemies are despawned together and dropped from the roster.
//!
//! Outcomes are reported through the events in [`crate::events::combat`].
use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::combat::{Combat, Combatant};
use crate::components::enemy::Enemy;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::events::combat::{EnemyEliminatedEvent, PlayerDamagedEvent, PlayerDiedEvent};
use crate::resources::camera::Camera;
use crate::resources::input::InputState;
use crate::resources::level::Level;
use crate::resources::roster::EnemyRoster;
use crate::resources::tilemap::DEFAULT_TILE_SIZE;

/// Pointer attacks reach this many tile widths from the player's center.
pub const POINTER_ATTACK_RANGE_TILES: f32 = 5.0;

pub fn combat_system(
    mut commands: Commands,
    input: Res<InputState>,
    camera: Res<Camera>,
    level: Option<Res<Level>>,
    mut roster: ResMut<EnemyRoster>,
    mut player: Query<(&MapPosition, &BoxCollider, &mut Combat), (With<Player>, Without<Enemy>)>,
    mut enemies: Query<(&MapPosition, &BoxCollider, &mut Combat), (With<Enemy>, Without<Player>)>,
) {
    let Ok((player_pos, player_collider, mut player_combat)) = player.single_mut() else {
        return;
    };

    player_combat.update();
    for (_, _, mut combat) in enemies.iter_mut() {
        combat.update();
    }

    let player_bounds = player_collider.aabb(player_pos.x, player_pos.y);
    let (center_x, center_y) = player_bounds.center();
    let tile_size = level
        .as_deref()
        .map(Level::tile_size)
        .unwrap_or(DEFAULT_TILE_SIZE as f32);
    let reach = POINTER_ATTACK_RANGE_TILES * tile_size;
    let click = input
        .pointer
        .primary
        .just_pressed
        .then(|| camera.screen_to_world(input.pointer.x, input.pointer.y));

    for entity in roster.iter() {
        let Ok((pos, collider, mut enemy_combat)) = enemies.get_mut(entity) else {
            continue;
        };
        let bounds = collider.aabb(pos.x, pos.y);

        if player_bounds.overlaps(&bounds) && enemy_combat.attack() {
            player_combat.damage(enemy_combat.attack_power());
            let health = player_combat.health();
            commands.trigger(PlayerDamagedEvent { health });
            if health <= 0 {
                commands.trigger(PlayerDiedEvent { health });
            }
        }

        if let Some((wx, wy)) = click {
            let in_reach = (wx - center_x).hypot(wy - center_y) < reach;
            if bounds.contains_point(wx, wy) && in_reach {
                player_combat.attack();
                enemy_combat.damage(player_combat.attack_power());
            }
        }
    }

    let dead: Vec<Entity> = roster
        .iter()
        .filter(|e| enemies.get(*e).is_ok_and(|(_, _, combat)| combat.is_dead()))
        .collect();
    for entity in &dead {
        commands.trigger(EnemyEliminatedEvent { entity: *entity });
        commands.entity(*entity).despawn();
    }
    roster.prune(&dead);
}
