//! Sprite sheet frame lookup.

use bevy_ecs::prelude::Component;

use crate::geometry::Rect;

/// Grid layout of a sprite sheet: frames are `tile_size` squares laid out
/// left-to-right, top-to-bottom, `width_in_tiles` per row.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpriteSheet {
    pub width_in_tiles: u32,
    pub height_in_tiles: u32,
    pub tile_size: u32,
}

impl SpriteSheet {
    pub fn new(width_in_tiles: u32, height_in_tiles: u32, tile_size: u32) -> Self {
        Self {
            width_in_tiles,
            height_in_tiles,
            tile_size,
        }
    }

    /// Source rectangle of frame `index`.
    pub fn rect(&self, index: usize) -> Rect {
        let columns = self.width_in_tiles.max(1) as usize;
        let size = self.tile_size as f32;
        let x = (index % columns) as f32 * size;
        let y = (index / columns) as f32 * size;
        Rect::new(x, y, size, size)
    }

    /// Number of frames in the sheet.
    pub fn frame_count(&self) -> usize {
        (self.width_in_tiles * self.height_in_tiles) as usize
    }
}
