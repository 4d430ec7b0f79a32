//! Potion pickup.
use bevy_ecs::prelude::*;
use log::info;

use crate::components::boxcollider::BoxCollider;
use crate::components::combat::{Combat, Combatant};
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::potion::Potion;

/// Heal the player by every potion it touches and despawn those potions.
pub fn potion_pickup(
    mut commands: Commands,
    mut player: Query<(&MapPosition, &BoxCollider, &mut Combat), With<Player>>,
    potions: Query<(Entity, &MapPosition, &BoxCollider, &Potion), Without<Player>>,
) {
    let Ok((player_pos, player_collider, mut combat)) = player.single_mut() else {
        return;
    };
    let player_bounds = player_collider.aabb(player_pos.x, player_pos.y);

    for (entity, pos, collider, potion) in potions.iter() {
        if player_bounds.overlaps(&collider.aabb(pos.x, pos.y)) {
            combat.heal(potion.amount_heal);
            info!(
                "Picked up potion (+{}), health now {}",
                potion.amount_heal,
                combat.health()
            );
            commands.entity(entity).despawn();
        }
    }
}
