use bevy_ecs::prelude::Component;

use crate::geometry::Rect;

/// Sprite is identified by a texture key, its size in pixels and an offset
/// into the texture when the texture is a sheet or atlas.
/// The offset selects the frame (or tile) region that gets drawn.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Sprite {
    /// Sprite drawing the top-left `width` x `height` region of a texture.
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    /// Sprite drawing an arbitrary source region of a texture.
    pub fn from_region(tex_key: impl Into<String>, src: Rect) -> Self {
        Self {
            tex_key: tex_key.into(),
            width: src.w,
            height: src.h,
            offset_x: src.x,
            offset_y: src.y,
        }
    }

    /// Source rectangle inside the texture.
    pub fn source(&self) -> Rect {
        Rect::new(self.offset_x, self.offset_y, self.width, self.height)
    }

    /// Point the sprite at another region of the same texture.
    pub fn set_region(&mut self, src: Rect) {
        self.offset_x = src.x;
        self.offset_y = src.y;
        self.width = src.w;
        self.height = src.h;
    }
}
