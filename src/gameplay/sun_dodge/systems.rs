// This file is part of HELIOS.
// Copyright (C) 2025 HELIOS contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fixed-tick Sun Dodge simulation. Systems run chained in this order:
//! restart, ramp, steer, spawn, fall & absorb, flare sequence.

use bevy::prelude::*;
use rand::Rng;

use super::components::{DodgeScoped, Plasma, Sun};
use super::session::{DodgePhase, DodgeSession};
use crate::app::state::{AppState, LevelCompleted};
use crate::core::collision::circles_overlap;
use crate::core::components::Layer;
use crate::core::config::{GameConfig, SunDodgeConfig};
use crate::core::playfield::{FieldPos, Playfield};
use crate::core::rng::GameRng;
use crate::interaction::inputmap::PlayerIntent;

pub fn spawn_sun(commands: &mut Commands, playfield: &Playfield, cfg: &SunDodgeConfig) -> Entity {
    commands
        .spawn((
            DodgeScoped,
            Sun::default(),
            FieldPos::new(
                (playfield.width / 2.0).floor(),
                playfield.height - cfg.sun.bottom_margin,
            ),
            Layer::PLAYER_OVER_HAZARDS,
            Transform::default(),
            Visibility::default(),
        ))
        .id()
}

pub fn setup_dodge(mut commands: Commands, cfg: Res<GameConfig>) {
    let sd = &cfg.sun_dodge;
    let playfield = Playfield::new(sd.window.size());
    commands.insert_resource(playfield);
    commands.insert_resource(DodgeSession::new(sd));
    spawn_sun(&mut commands, &playfield, sd);
    info!(target: "sun_dodge", "Sun Dodge started; flare radius {:.0}", sd.flare_radius());
}

pub fn teardown_dodge(mut commands: Commands, q: Query<Entity, With<DodgeScoped>>) {
    for e in &q {
        commands.entity(e).despawn();
    }
    commands.remove_resource::<DodgeSession>();
}

/// Drains this tick's discrete presses. Restart only acts on the summary screen.
pub fn handle_dodge_restart(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    playfield: Res<Playfield>,
    mut intent: ResMut<PlayerIntent>,
    mut session: ResMut<DodgeSession>,
    q_level: Query<Entity, Or<(With<Sun>, With<Plasma>)>>,
) {
    intent.take_mash();
    let restart = intent.take_restart();
    if !restart || !matches!(session.phase, DodgePhase::GameOver { .. }) {
        return;
    }
    for e in &q_level {
        commands.entity(e).despawn();
    }
    *session = DodgeSession::new(&cfg.sun_dodge);
    spawn_sun(&mut commands, &playfield, &cfg.sun_dodge);
    info!(target: "sun_dodge", "Restarted");
}

pub fn ramp_difficulty(cfg: Res<GameConfig>, mut session: ResMut<DodgeSession>) {
    if !session.is_charging() {
        return;
    }
    session.game_ticks += 1;
    let every = cfg.sun_dodge.difficulty.ramp_every_ticks;
    if every > 0 && session.game_ticks % every == 0 {
        session.ramp(&cfg.sun_dodge);
        info!(
            target: "sun_dodge",
            "Difficulty up: speed +{:.1}, spawn interval {}",
            session.speed_bonus, session.spawn_interval
        );
    }
}

pub fn steer_sun(
    cfg: Res<GameConfig>,
    playfield: Res<Playfield>,
    intent: Res<PlayerIntent>,
    session: Res<DodgeSession>,
    mut q_sun: Query<(&Sun, &mut FieldPos)>,
) {
    if !session.is_charging() || intent.axis.x == 0.0 {
        return;
    }
    for (sun, mut pos) in &mut q_sun {
        if sun.flaring {
            continue;
        }
        pos.x = (pos.x + intent.axis.x * sun.speed(&cfg.sun_dodge.sun)).clamp(0.0, playfield.width);
    }
}

pub fn spawn_plasma(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    playfield: Res<Playfield>,
    mut rng: ResMut<GameRng>,
    mut session: ResMut<DodgeSession>,
) {
    if !session.is_charging() {
        return;
    }
    session.spawn_meter += cfg.sun_dodge.spawn.meter_step;
    if session.spawn_meter < session.spawn_interval {
        return;
    }
    session.spawn_meter = 0;
    let pc = &cfg.sun_dodge.plasma;
    let radius = rng.gen_range(pc.radius.min..=pc.radius.max.max(pc.radius.min)) as f32;
    let x = rng.gen_range(0..=playfield.width.max(0.0) as u32) as f32;
    let speed = rng.gen_range(pc.base_speed..=pc.base_speed + pc.speed_jitter.max(0.0)) + session.speed_bonus;
    commands.spawn((
        DodgeScoped,
        Plasma { radius, speed },
        FieldPos::new(x, -radius),
        Layer::HAZARDS,
        Transform::default(),
        Visibility::default(),
    ));
}

/// Move plasmas down, absorb the ones touching the sun and release the flare
/// once the sun reaches the threshold radius. Plasmas still falling when the
/// flare is released are not absorbed.
pub fn fall_and_absorb(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    playfield: Res<Playfield>,
    mut session: ResMut<DodgeSession>,
    mut q_sun: Query<(&mut Sun, &FieldPos)>,
    mut q_plasma: Query<(Entity, &Plasma, &mut FieldPos), Without<Sun>>,
) {
    if !session.is_charging() {
        return;
    }
    let Ok((mut sun, sun_pos)) = q_sun.single_mut() else { return; };
    let sd = &cfg.sun_dodge;
    let flare_radius = sd.flare_radius();
    for (e, plasma, mut pos) in &mut q_plasma {
        pos.y += plasma.speed;
        let absorbable = session.is_charging();
        if absorbable && circles_overlap(sun_pos.0, sun.radius(&sd.sun), pos.0, plasma.radius) {
            commands.entity(e).despawn();
            sun.charge += sd.plasma.charge_value;
            if sun.radius(&sd.sun) >= flare_radius {
                session.flare_cycles += 1;
                sun.charge = 0;
                sun.flaring = true;
                session.phase = DodgePhase::Flare { ticks: 0 };
                info!(target: "sun_dodge", "SOLAR FLARE! cycles completed: {}", session.flare_cycles);
            }
        } else if pos.y > playfield.height + plasma.radius {
            commands.entity(e).despawn();
        }
    }
}

/// Flare -> GameOver after the flare duration; the level completes once the
/// summary has been shown for `game_over_ticks` (at least one tick).
pub fn advance_flare_sequence(
    cfg: Res<GameConfig>,
    mut session: ResMut<DodgeSession>,
    mut completed: EventWriter<LevelCompleted>,
) {
    let fc = &cfg.sun_dodge.flare;
    match session.phase {
        DodgePhase::Charging => {}
        DodgePhase::Flare { ticks } => {
            let ticks = ticks + 1;
            session.phase = if ticks >= fc.duration_ticks {
                info!(target: "sun_dodge", "Flare complete; survived {}s", session.elapsed_secs(cfg.tick_hz));
                DodgePhase::GameOver { ticks: 0 }
            } else {
                DodgePhase::Flare { ticks }
            };
        }
        DodgePhase::GameOver { ticks } => {
            let ticks = ticks + 1;
            session.phase = DodgePhase::GameOver { ticks };
            if ticks == fc.game_over_ticks.max(1) {
                completed.write(LevelCompleted { level: AppState::SunDodge });
            }
        }
    }
}
