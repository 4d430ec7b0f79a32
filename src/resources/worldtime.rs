use bevy_ecs::prelude::Resource;

/// Wall-clock bookkeeping for the main loop.
///
/// Gameplay advances in whole ticks (one per frame); `ticks` counts them.
/// `elapsed` and `delta` are informational, shown by the debug overlay.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub ticks: u64,
}
