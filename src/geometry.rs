//! Axis-aligned rectangles in pixel space.
//!
//! Used for collider bounds, sprite sheet frames and tileset regions.

/// Axis-aligned rectangle given by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Build a rectangle from its min and max corners.
    pub fn from_corners(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            x: min_x.min(max_x),
            y: min_y.min(max_y),
            w: (max_x - min_x).abs(),
            h: (max_y - min_y).abs(),
        }
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.w
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    /// Strict overlap test: rectangles sharing only an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.max_x()
            && self.max_x() > other.x
            && self.y < other.max_y()
            && self.max_y() > other.y
    }

    /// Point containment, min edges exclusive and max edges inclusive.
    pub fn contains_point(&self, px: f32, py: f32) -> bool {
        px > self.x && px <= self.max_x() && py > self.y && py <= self.max_y()
    }
}
