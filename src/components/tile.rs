use bevy_ecs::prelude::Component;

/// Background tile spawned from a tile map layer.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub layer: usize,
    /// Global tile id as stored in the map.
    pub gid: u32,
}
