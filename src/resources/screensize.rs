//! Screen size resource.
//!
//! Stores the current viewport dimensions in pixels. The driver refreshes it
//! every frame from the window, and the camera uses it to center the player
//! and clamp the view.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
