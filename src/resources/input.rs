//! Per-tick input snapshot.
//!
//! Captures the keys and pointer state the game cares about and exposes them
//! to systems via the [`InputState`] resource. The render backend fills it
//! once per frame (see `crate::systems::input`); the simulation never polls
//! hardware directly, which keeps it testable without a window.

use bevy_ecs::prelude::*;

/// Boolean button state for one logical action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoolState {
    /// Whether the button is currently held this frame.
    pub active: bool,
    /// Whether the button was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the button was just released this frame.
    pub just_released: bool,
}

impl BoolState {
    /// Derive this frame's state from whether the button is down now.
    pub fn update(&mut self, down: bool) {
        self.just_pressed = down && !self.active;
        self.just_released = !down && self.active;
        self.active = down;
    }
}

/// Pointer (mouse) position in screen pixels plus its primary button.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub primary: BoolState,
}

/// Resource capturing the per-frame input relevant to gameplay.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct InputState {
    pub up: BoolState,
    pub left: BoolState,
    pub down: BoolState,
    pub right: BoolState,
    /// Scene transitions (start, pause, resume).
    pub confirm: BoolState,
    pub quit: BoolState,
    pub mode_debug: BoolState,
    pub pointer: PointerState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputstate_default_all_inactive() {
        let input = InputState::default();
        assert!(!input.up.active);
        assert!(!input.down.active);
        assert!(!input.left.active);
        assert!(!input.right.active);
        assert!(!input.confirm.active);
        assert!(!input.quit.active);
        assert!(!input.pointer.primary.just_pressed);
    }

    #[test]
    fn test_boolstate_edges() {
        let mut bs = BoolState::default();
        bs.update(true);
        assert!(bs.active && bs.just_pressed && !bs.just_released);
        bs.update(true);
        assert!(bs.active && !bs.just_pressed);
        bs.update(false);
        assert!(!bs.active && bs.just_released && !bs.just_pressed);
        bs.update(false);
        assert!(!bs.just_released);
    }
}
