//! Satellite Repair: fly between drifting solar particles and fix every panel.

pub mod components;
pub mod session;
pub mod systems;
pub mod view;

use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::rng::GameRng;
use crate::core::system::LevelSimSet;
use crate::interaction::inputmap::PlayerIntent;

pub use components::{Astronaut, DamagedPanel, ParticleMask, RepairScoped, SatelliteBody, SolarParticle};
pub use session::{MaskLibrary, MissionOutcome, RepairPhase, RepairSession, RetryMission};
pub use view::SatelliteRepairViewPlugin;

/// Simulation only; runs headless. Pair with `SatelliteRepairViewPlugin` to draw it.
pub struct SatelliteRepairPlugin;

impl Plugin for SatelliteRepairPlugin {
    fn build(&self, app: &mut App) {
        use systems::*;
        app.init_resource::<GameRng>()
            .init_resource::<PlayerIntent>()
            .add_event::<RetryMission>()
            .configure_sets(FixedUpdate, LevelSimSet)
            .add_systems(OnEnter(AppState::SatelliteRepair), setup_repair)
            .add_systems(OnExit(AppState::SatelliteRepair), teardown_repair)
            .add_systems(
                FixedUpdate,
                (
                    handle_retry,
                    mash_repair,
                    thrust,
                    spawn_particles,
                    integrate_astronaut,
                    drift_particles,
                    collide_particles,
                    touch_panels,
                    check_all_repaired,
                )
                    .chain()
                    .in_set(LevelSimSet)
                    .run_if(in_state(AppState::SatelliteRepair)),
            );
    }
}
