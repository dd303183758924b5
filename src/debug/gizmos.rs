#[cfg(feature = "debug")]
use super::modes::DebugState;
#[cfg(feature = "debug")]
use crate::core::config::GameConfig;
#[cfg(feature = "debug")]
use crate::core::playfield::{FieldPos, Playfield};
#[cfg(feature = "debug")]
use crate::gameplay::satellite_repair::{Astronaut, DamagedPanel, SolarParticle};
#[cfg(feature = "debug")]
use crate::gameplay::sun_dodge::{Plasma, Sun};
#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
const HIT_COLOR: Color = Color::srgb(0.2, 1.0, 0.4);
#[cfg(feature = "debug")]
const HAZARD_COLOR: Color = Color::srgb(1.0, 0.3, 0.3);

/// Outline every collision shape in world space.
#[cfg(feature = "debug")]
#[allow(clippy::too_many_arguments)]
pub fn draw_collision_gizmos(
    state: Res<DebugState>,
    cfg: Res<GameConfig>,
    playfield: Res<Playfield>,
    mut gizmos: Gizmos,
    q_sun: Query<(&Sun, &FieldPos)>,
    q_plasma: Query<(&Plasma, &FieldPos)>,
    q_astronaut: Query<&FieldPos, With<Astronaut>>,
    q_particles: Query<(&SolarParticle, &FieldPos)>,
    q_panels: Query<&FieldPos, With<DamagedPanel>>,
) {
    if !state.gizmos_visible {
        return;
    }
    for (sun, pos) in &q_sun {
        gizmos.circle_2d(playfield.to_world(pos.0), sun.radius(&cfg.sun_dodge.sun), HIT_COLOR);
    }
    for (plasma, pos) in &q_plasma {
        gizmos.circle_2d(playfield.to_world(pos.0), plasma.radius, HAZARD_COLOR);
    }
    let astronaut = Vec2::splat(cfg.satellite_repair.astronaut.size);
    for pos in &q_astronaut {
        gizmos.rect_2d(playfield.to_world(pos.0), astronaut, HIT_COLOR);
    }
    for (particle, pos) in &q_particles {
        gizmos.rect_2d(playfield.to_world(pos.0), Vec2::splat(particle.size), HAZARD_COLOR);
    }
    let panel = Vec2::splat(cfg.satellite_repair.panels.size);
    for pos in &q_panels {
        gizmos.rect_2d(playfield.to_world(pos.0), panel, Color::WHITE);
    }
}
