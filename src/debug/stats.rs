#[cfg(feature = "debug")]
use super::modes::{DebugState, DebugStats};
#[cfg(feature = "debug")]
use crate::gameplay::satellite_repair::{RepairSession, SolarParticle};
#[cfg(feature = "debug")]
use crate::gameplay::sun_dodge::{DodgeSession, Plasma};
#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
pub fn debug_stats_collect_system(
    time: Res<Time>,
    mut state: ResMut<DebugState>,
    mut stats: ResMut<DebugStats>,
    dodge: Option<Res<DodgeSession>>,
    repair: Option<Res<RepairSession>>,
    q_plasma: Query<(), With<Plasma>>,
    q_particles: Query<(), With<SolarParticle>>,
) {
    state.frame_counter += 1;
    let dt = time.delta_secs().max(1e-6);
    let inst_fps = 1.0 / dt;
    if stats.fps == 0.0 {
        stats.fps = inst_fps;
    } else {
        stats.fps = stats.fps * 0.9 + inst_fps * 0.1;
    }
    let inst_ms = dt * 1000.0;
    if stats.frame_time_ms == 0.0 {
        stats.frame_time_ms = inst_ms;
    } else {
        stats.frame_time_ms = stats.frame_time_ms * 0.9 + inst_ms * 0.1;
    }
    stats.plasma_count = q_plasma.iter().count();
    stats.particle_count = q_particles.iter().count();
    stats.phase = match (dodge, repair) {
        (Some(d), _) => format!("{:?}", d.phase),
        (_, Some(r)) => format!("{:?}", r.phase),
        _ => "-".into(),
    };
}
