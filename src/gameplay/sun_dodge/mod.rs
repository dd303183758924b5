//! Sun Dodge: steer a growing sun, absorb falling plasma until it flares.

pub mod components;
pub mod session;
pub mod systems;
pub mod view;

use bevy::prelude::*;

use crate::app::state::{AppState, LevelCompleted};
use crate::core::rng::GameRng;
use crate::core::system::LevelSimSet;
use crate::interaction::inputmap::PlayerIntent;

pub use components::{DodgeScoped, Plasma, Sun};
pub use session::{DodgePhase, DodgeSession};
pub use view::SunDodgeViewPlugin;

/// Simulation only; runs headless. Pair with `SunDodgeViewPlugin` to draw it.
pub struct SunDodgePlugin;

impl Plugin for SunDodgePlugin {
    fn build(&self, app: &mut App) {
        use systems::*;
        app.init_resource::<GameRng>()
            .init_resource::<PlayerIntent>()
            .add_event::<LevelCompleted>()
            .configure_sets(FixedUpdate, LevelSimSet)
            .add_systems(OnEnter(AppState::SunDodge), setup_dodge)
            .add_systems(OnExit(AppState::SunDodge), teardown_dodge)
            .add_systems(
                FixedUpdate,
                (
                    handle_dodge_restart,
                    ramp_difficulty,
                    steer_sun,
                    spawn_plasma,
                    fall_and_absorb,
                    advance_flare_sequence,
                )
                    .chain()
                    .in_set(LevelSimSet)
                    .run_if(in_state(AppState::SunDodge)),
            );
    }
}
