//! Tick-driven frame animation.
//!
//! [`Animation`] is a looping sequencer over sprite sheet frame indices. It
//! is advanced once per tick and never allocates after construction.
//! [`FacingAnimations`] picks one of them per [`Facing`] direction for
//! entities that walk in four directions.

use bevy_ecs::prelude::Component;
use rustc_hash::FxHashMap;

use crate::components::player::Facing;

/// Looping frame sequence `first, first + step, ...` up to `last`.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    /// First frame index (inclusive).
    pub first: usize,
    /// Last frame index (inclusive).
    pub last: usize,
    /// How many indices to move per frame.
    pub step: usize,
    /// How many ticks to hold each frame.
    pub speed_in_tps: f32,
    frame: usize,
    frame_counter: f32,
}

impl Animation {
    pub fn new(first: usize, last: usize, step: usize, speed_in_tps: f32) -> Self {
        Self {
            first,
            last,
            step,
            speed_in_tps,
            frame: first,
            frame_counter: speed_in_tps,
        }
    }

    /// Current frame index.
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Advance by one tick.
    pub fn update(&mut self) {
        self.frame_counter -= 1.0;
        if self.frame_counter < 0.0 {
            self.frame_counter = self.speed_in_tps;
            self.frame += self.step;
            if self.frame > self.last {
                self.frame = self.first;
            }
        }
    }

    /// Rewind to the first frame.
    pub fn reset(&mut self) {
        self.frame = self.first;
        self.frame_counter = self.speed_in_tps;
    }
}

/// Walk cycle plus the frame to show while standing still.
#[derive(Debug, Clone, PartialEq)]
pub struct FacingAnimation {
    pub idle_frame: usize,
    pub walk: Animation,
}

/// Per-direction animations for an entity that tracks a [`Facing`].
#[derive(Debug, Clone, Default, Component)]
pub struct FacingAnimations {
    pub animations: FxHashMap<Facing, FacingAnimation>,
}

impl FacingAnimations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, facing: Facing, idle_frame: usize, walk: Animation) -> Self {
        self.animations
            .insert(facing, FacingAnimation { idle_frame, walk });
        self
    }

    pub fn get(&self, facing: Facing) -> Option<&FacingAnimation> {
        self.animations.get(&facing)
    }

    pub fn get_mut(&mut self, facing: Facing) -> Option<&mut FacingAnimation> {
        self.animations.get_mut(&facing)
    }
}
