//! Registry for dynamically addressable systems.
//!
//! Allows systems to be registered under string keys and looked up later to
//! run via their [`bevy_ecs::system::SystemId`]. Scene enter/exit hooks are
//! stored here under the names returned by
//! [`GameStates::enter_hook`](crate::resources::gamestate::GameStates::enter_hook)
//! and [`GameStates::exit_hook`](crate::resources::gamestate::GameStates::exit_hook).

use bevy_ecs::prelude::{Resource, World};
use bevy_ecs::system::{IntoSystem, SystemId};
use rustc_hash::FxHashMap;

/// Map of string names to system IDs.
#[derive(Resource, Debug, Default)]
pub struct SystemsStore {
    pub map: FxHashMap<String, SystemId>,
}

impl SystemsStore {
    /// Create an empty store.
    pub fn new() -> Self {
        SystemsStore {
            map: FxHashMap::default(),
        }
    }

    /// Insert a system ID under a human-readable name.
    pub fn insert(&mut self, name: impl Into<String>, id: SystemId) {
        self.map.insert(name.into(), id);
    }

    /// Register `system` in `world` and store its ID under `name`.
    pub fn register<M>(
        &mut self,
        world: &mut World,
        name: impl Into<String>,
        system: impl IntoSystem<(), (), M> + 'static,
    ) {
        let id = world.register_system(system);
        self.insert(name, id);
    }

    /// Retrieve a system ID by name, if present.
    pub fn get(&self, name: impl AsRef<str>) -> Option<&SystemId> {
        self.map.get(name.as_ref())
    }
}
