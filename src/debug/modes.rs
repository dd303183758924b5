#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
#[derive(Resource, Debug)]
pub struct DebugState {
    /// Collision outlines (F3).
    pub gizmos_visible: bool,
    pub log_interval: f32,
    pub time_accum: f32,
    pub frame_counter: u64,
}

#[cfg(feature = "debug")]
impl Default for DebugState {
    fn default() -> Self {
        Self {
            gizmos_visible: false,
            log_interval: 1.0,
            time_accum: 0.0,
            frame_counter: 0,
        }
    }
}

#[cfg(feature = "debug")]
#[derive(Resource, Debug, Default)]
pub struct DebugStats {
    pub fps: f32,
    pub frame_time_ms: f32,
    pub plasma_count: usize,
    pub particle_count: usize,
    /// Active level phase, e.g. `Charging` or `Minigame`.
    pub phase: String,
}
