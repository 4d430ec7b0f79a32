//! Scrolling camera resource.
//!
//! The camera is a plain translation: every world-space draw call is shifted
//! by `(x, y)` to get its screen position. Each tick the Game scene centers it
//! on the player with [`Camera::follow_target`] and then keeps the view inside
//! the map with [`Camera::constrain`].

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct Camera {
    pub x: f32,
    pub y: f32,
}

impl Camera {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Center a `viewport_w` x `viewport_h` view on the target point.
    pub fn follow_target(&mut self, target_x: f32, target_y: f32, viewport_w: f32, viewport_h: f32) {
        self.x = viewport_w / 2.0 - target_x;
        self.y = viewport_h / 2.0 - target_y;
    }

    /// Keep the view inside `[0, map_w] x [0, map_h]`.
    ///
    /// On an axis where the map is smaller than the viewport the map is
    /// centered and does not scroll.
    pub fn constrain(&mut self, map_w: f32, map_h: f32, viewport_w: f32, viewport_h: f32) {
        self.x = constrain_axis(self.x, map_w, viewport_w);
        self.y = constrain_axis(self.y, map_h, viewport_h);
    }

    /// Screen position of a world point.
    pub fn world_to_screen(&self, wx: f32, wy: f32) -> (f32, f32) {
        (wx + self.x, wy + self.y)
    }

    /// World position of a screen point (inverse of [`Camera::world_to_screen`]).
    pub fn screen_to_world(&self, sx: f32, sy: f32) -> (f32, f32) {
        (sx - self.x, sy - self.y)
    }
}

fn constrain_axis(offset: f32, map: f32, viewport: f32) -> f32 {
    if map < viewport {
        (viewport - map) / 2.0
    } else {
        offset.min(0.0).max(viewport - map)
    }
}
