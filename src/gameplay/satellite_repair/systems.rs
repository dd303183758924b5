// This file is part of HELIOS.
// Copyright (C) 2025 HELIOS contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fixed-tick Satellite Repair simulation. Chained order: retry, mash, thrust,
//! spawn, integrate, drift, hazard collision, panel contact, win check.

use bevy::prelude::*;
use rand::Rng;

use super::components::{Astronaut, DamagedPanel, ParticleMask, RepairScoped, SatelliteBody, SolarParticle};
use super::session::{MaskLibrary, MissionOutcome, RepairPhase, RepairSession, RetryMission};
use crate::core::collision::{clamp_center_within, masks_collide, PixelRect};
use crate::core::components::{Layer, Velocity};
use crate::core::config::GameConfig;
use crate::core::playfield::{FieldPos, Playfield};
use crate::core::rng::GameRng;
use crate::interaction::inputmap::PlayerIntent;

pub fn setup_repair(mut commands: Commands, cfg: Res<GameConfig>, masks: Option<Res<MaskLibrary>>) {
    let sr = &cfg.satellite_repair;
    commands.insert_resource(Playfield::new(sr.window.size()));
    commands.insert_resource(RepairSession::default());
    if masks.is_none() {
        commands.insert_resource(MaskLibrary::load(sr.astronaut.size.round() as u32));
    }

    let sat_size = Vec2::from(sr.satellite.size);
    commands.spawn((
        RepairScoped,
        SatelliteBody { size: sat_size },
        FieldPos(Vec2::from(sr.satellite.top_left) + sat_size * 0.5),
        Layer::SCENERY,
        Transform::default(),
        Visibility::default(),
    ));
    for p in &sr.panels.positions {
        commands.spawn((
            RepairScoped,
            DamagedPanel::default(),
            FieldPos(Vec2::from(*p)),
            Layer::PROPS,
            Transform::default(),
            Visibility::default(),
        ));
    }
    commands.spawn((
        RepairScoped,
        Astronaut::new(sr.astronaut.lives),
        Velocity::default(),
        FieldPos(Vec2::from(sr.astronaut.start)),
        Layer::PLAYER,
        Transform::default(),
        Visibility::default(),
    ));
    info!(target: "satellite_repair", "Mission start: {} panels to repair", sr.panels.positions.len());
}

pub fn teardown_repair(mut commands: Commands, q: Query<Entity, With<RepairScoped>>) {
    for e in &q {
        commands.entity(e).despawn();
    }
    commands.remove_resource::<RepairSession>();
}

/// "Try Again": full lives at the respawn point, panels damaged, sky cleared.
pub fn handle_retry(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    mut retries: EventReader<RetryMission>,
    mut session: ResMut<RepairSession>,
    mut q_astronaut: Query<(&mut Astronaut, &mut FieldPos, &mut Velocity)>,
    mut q_panels: Query<&mut DamagedPanel>,
    q_particles: Query<Entity, With<SolarParticle>>,
) {
    if retries.read().count() == 0 || !session.is_over() {
        return;
    }
    let ac = &cfg.satellite_repair.astronaut;
    for (mut astronaut, mut pos, mut vel) in &mut q_astronaut {
        *astronaut = Astronaut::new(ac.lives);
        pos.0 = Vec2::from(ac.respawn);
        vel.0 = Vec2::ZERO;
    }
    for mut panel in &mut q_panels {
        panel.repaired = false;
    }
    for e in &q_particles {
        commands.entity(e).despawn();
    }
    session.phase = RepairPhase::Flying;
    info!(target: "satellite_repair", "Mission restarted");
}

/// Drains this tick's presses; in the minigame each one advances the repair.
pub fn mash_repair(
    cfg: Res<GameConfig>,
    mut intent: ResMut<PlayerIntent>,
    mut session: ResMut<RepairSession>,
    mut q_panels: Query<&mut DamagedPanel>,
) {
    let _ = intent.take_restart();
    let presses = intent.take_mash();
    let RepairPhase::Minigame { panel, progress } = session.phase else { return; };
    let mg = &cfg.satellite_repair.minigame;
    let progress = progress + presses * mg.progress_per_press;
    if progress < mg.target {
        session.phase = RepairPhase::Minigame { panel, progress };
        return;
    }
    if let Ok(mut p) = q_panels.get_mut(panel) {
        p.repaired = true;
    }
    session.phase = RepairPhase::Flying;
    info!(target: "satellite_repair", "Panel {panel} repaired");
}

pub fn thrust(
    cfg: Res<GameConfig>,
    intent: Res<PlayerIntent>,
    session: Res<RepairSession>,
    mut q: Query<&mut Velocity, With<Astronaut>>,
) {
    if !session.is_flying() {
        return;
    }
    let t = cfg.satellite_repair.astronaut.thrust;
    for mut vel in &mut q {
        vel.0 += intent.axis * t;
    }
}

pub fn spawn_particles(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    playfield: Res<Playfield>,
    masks: Res<MaskLibrary>,
    mut rng: ResMut<GameRng>,
    mut session: ResMut<RepairSession>,
) {
    if !session.is_flying() {
        return;
    }
    let pc = &cfg.satellite_repair.particles;
    session.particle_timer += 1;
    if session.particle_timer <= pc.spawn_after_ticks {
        return;
    }
    session.particle_timer = 0;

    let variant = rng.gen_range(0..masks.variants().max(1));
    let size = rng.gen_range(pc.size.min..=pc.size.max.max(pc.size.min));
    let sizef = size as f32;
    let left = playfield.width + rng.gen_range(pc.entry_offset.min..=pc.entry_offset.max.max(pc.entry_offset.min)) as f32;
    let top = rng.gen_range(0..=(playfield.height - sizef).max(0.0) as u32) as f32;
    let vx = rng.gen_range(pc.speed_x.min..=pc.speed_x.max.max(pc.speed_x.min)) as f32;
    let vy = rng.gen_range(pc.speed_y.min..=pc.speed_y.max.max(pc.speed_y.min));
    commands.spawn((
        RepairScoped,
        SolarParticle { size: sizef, variant },
        ParticleMask(masks.particle_mask(variant, size)),
        FieldPos(Vec2::new(left, top) + Vec2::splat(sizef * 0.5)),
        Velocity(Vec2::new(vx, vy)),
        Layer::HAZARDS,
        Transform::default(),
        Visibility::default(),
    ));
}

pub fn integrate_astronaut(
    cfg: Res<GameConfig>,
    playfield: Res<Playfield>,
    session: Res<RepairSession>,
    mut q: Query<(&mut Astronaut, &mut FieldPos, &mut Velocity)>,
) {
    if !session.is_flying() {
        return;
    }
    let ac = &cfg.satellite_repair.astronaut;
    for (mut astronaut, mut pos, mut vel) in &mut q {
        vel.0 *= ac.friction;
        pos.0 = clamp_center_within(pos.0 + vel.0, Vec2::splat(ac.size), playfield.size());
        astronaut.damage_timer = astronaut.damage_timer.saturating_sub(1);
    }
}

pub fn drift_particles(
    mut commands: Commands,
    session: Res<RepairSession>,
    mut q: Query<(Entity, &SolarParticle, &mut FieldPos, &Velocity)>,
) {
    if !session.is_flying() {
        return;
    }
    for (e, particle, mut pos, vel) in &mut q {
        pos.0 += vel.0;
        if pos.x + particle.size * 0.5 < 0.0 {
            commands.entity(e).despawn();
        }
    }
}

/// Every particle whose opaque pixels touch the astronaut is destroyed; any
/// contact costs exactly one life.
pub fn collide_particles(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    masks: Res<MaskLibrary>,
    mut session: ResMut<RepairSession>,
    mut q_astronaut: Query<(&mut Astronaut, &FieldPos)>,
    q_particles: Query<(Entity, &SolarParticle, &ParticleMask, &FieldPos), Without<Astronaut>>,
) {
    if !session.is_flying() {
        return;
    }
    let ac = &cfg.satellite_repair.astronaut;
    let Ok((mut astronaut, pos)) = q_astronaut.single_mut() else { return; };
    let a_rect = PixelRect::from_center(pos.0, Vec2::splat(ac.size));
    let mut hits = 0;
    for (e, particle, mask, p_pos) in &q_particles {
        let p_rect = PixelRect::from_center(p_pos.0, Vec2::splat(particle.size));
        if masks_collide(&a_rect, &masks.astronaut, &p_rect, &mask.0) {
            commands.entity(e).despawn();
            hits += 1;
        }
    }
    if hits == 0 {
        return;
    }
    astronaut.lives = astronaut.lives.saturating_sub(1);
    astronaut.damage_timer = ac.damage_flash_ticks;
    info!(target: "satellite_repair", "Hit by {hits} particle(s); {} lives left", astronaut.lives);
    if astronaut.lives == 0 {
        session.phase = RepairPhase::GameOver(MissionOutcome::Failed);
        info!(target: "satellite_repair", "MISSION FAILED");
    }
}

pub fn touch_panels(
    cfg: Res<GameConfig>,
    mut session: ResMut<RepairSession>,
    q_astronaut: Query<&FieldPos, With<Astronaut>>,
    q_panels: Query<(Entity, &DamagedPanel, &FieldPos), Without<Astronaut>>,
) {
    if !session.is_flying() {
        return;
    }
    let sr = &cfg.satellite_repair;
    let Ok(pos) = q_astronaut.single() else { return; };
    let a_rect = PixelRect::from_center(pos.0, Vec2::splat(sr.astronaut.size));
    let touched = q_panels.iter().find(|(_, panel, p_pos)| {
        !panel.repaired && a_rect.intersects(&PixelRect::from_center(p_pos.0, Vec2::splat(sr.panels.size)))
    });
    if let Some((panel, _, _)) = touched {
        session.phase = RepairPhase::Minigame { panel, progress: 0 };
        info!(target: "satellite_repair", "Repairing panel {panel}");
    }
}

pub fn check_all_repaired(mut session: ResMut<RepairSession>, q_panels: Query<&DamagedPanel>) {
    if session.is_over() {
        return;
    }
    if q_panels.iter().all(|p| p.repaired) {
        session.phase = RepairPhase::GameOver(MissionOutcome::Accomplished);
        info!(target: "satellite_repair", "MISSION ACCOMPLISHED");
    }
}
