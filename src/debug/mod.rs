//! Debug module: feature gated simulation stats logging and collision gizmos.
//! Built only when compiled with `--features debug` (on by default).

#[cfg(feature = "debug")]
mod gizmos;
#[cfg(feature = "debug")]
pub mod keys; // pub for testing
#[cfg(feature = "debug")]
mod logging;
#[cfg(feature = "debug")]
mod modes;
#[cfg(feature = "debug")]
mod stats;

#[cfg(feature = "debug")]
pub use modes::*;

#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use crate::core::system::PresentationSet;
#[cfg(feature = "debug")]
use crate::interaction::inputmap::InputActionUpdateSet;

#[cfg(feature = "debug")]
pub struct DebugPlugin;
#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        use gizmos::draw_collision_gizmos;
        use keys::debug_key_input_system;
        use logging::debug_logging_system;
        use stats::debug_stats_collect_system;

        app.init_resource::<DebugState>()
            .init_resource::<DebugStats>()
            .add_systems(PreUpdate, debug_key_input_system.after(InputActionUpdateSet))
            .add_systems(
                Update,
                (debug_stats_collect_system, debug_logging_system).chain(),
            )
            .add_systems(Update, draw_collision_gizmos.after(PresentationSet));
    }
}

/// No-op when the `debug` feature is off so callers need no cfg of their own.
#[cfg(not(feature = "debug"))]
pub struct DebugPlugin;
#[cfg(not(feature = "debug"))]
impl bevy::prelude::Plugin for DebugPlugin {
    fn build(&self, _app: &mut bevy::prelude::App) {}
}
