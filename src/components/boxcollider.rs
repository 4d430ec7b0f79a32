use bevy_ecs::prelude::Component;

use crate::geometry::Rect;

/// Axis-aligned collider, sized in pixels and placed relative to the
/// entity's [`MapPosition`](super::mapposition::MapPosition).
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub width: f32,
    pub height: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl BoxCollider {
    /// Create a BoxCollider with given size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    /// Square collider one tile wide.
    pub fn tile(tile_size: f32) -> Self {
        Self::new(tile_size, tile_size)
    }

    /// Modify BoxCollider with given offset
    pub fn with_offset(mut self, offset_x: f32, offset_y: f32) -> Self {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }

    /// World-space bounds for an entity placed at (`x`, `y`).
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, x: f32, y: f32) -> Rect {
        let x0 = x + self.offset_x;
        let y0 = y + self.offset_y;
        Rect::from_corners(x0, y0, x0 + self.width, y0 + self.height)
    }
}

/// Marker for static colliders that moving entities cannot pass through.
#[derive(Debug, Clone, Copy, Component)]
pub struct Solid;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_applies_offset() {
        let c = BoxCollider::new(16.0, 8.0).with_offset(2.0, 4.0);
        assert_eq!(c.aabb(10.0, 20.0), Rect::new(12.0, 24.0, 16.0, 8.0));
    }

    #[test]
    fn test_aabb_negative_size_normalized() {
        let c = BoxCollider::new(-16.0, -16.0);
        assert_eq!(c.aabb(16.0, 16.0), Rect::new(0.0, 0.0, 16.0, 16.0));
    }
}
