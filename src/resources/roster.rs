//! Ordered list of live enemies.
//!
//! Entity query order is not stable across despawns, so the Game scene keeps
//! its own roster: enemies are processed in the order they were spawned, and
//! dead ones are pruned as a single batch that keeps survivors in order.

use bevy_ecs::prelude::{Entity, Resource};

#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct EnemyRoster {
    enemies: Vec<Entity>,
}

impl EnemyRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entity: Entity) {
        self.enemies.push(entity);
    }

    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.enemies.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    /// Rebuild the roster without the given entities.
    pub fn prune(&mut self, dead: &[Entity]) {
        if dead.is_empty() {
            return;
        }
        self.enemies.retain(|e| !dead.contains(e));
    }

    pub fn as_slice(&self) -> &[Entity] {
        &self.enemies
    }
}
