//! Z-index component for render ordering.
//!
//! Tile layers use negative values (first layer lowest), sprites use zero or
//! above, so the renderer draws the background first and actors on top.

use bevy_ecs::prelude::Component;

/// Rendering order hint for 2D drawing.
///
/// Higher values are drawn later (on top). The renderer sorts by
/// `ZIndex` to achieve a painter's algorithm.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);

impl ZIndex {
    /// Z-index for tile layer `layer_index` out of `layer_count`: if N layers,
    /// first is -N, last is -1.
    pub fn for_layer(layer_index: usize, layer_count: usize) -> Self {
        ZIndex(layer_index as i32 - layer_count as i32)
    }
}
