// This file is part of HELIOS.
// Copyright (C) 2025 HELIOS contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "HELIOS: The Space Weather Game".into(),
            width: 800.0,
            height: 600.0,
        }
    }
}
impl WindowConfig {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SpawnRange<T> {
    pub min: T,
    pub max: T,
}
impl<T: Default> Default for SpawnRange<T> {
    fn default() -> Self {
        Self {
            min: Default::default(),
            max: Default::default(),
        }
    }
}

// ----------------------------- Intro -----------------------------

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct IntroConfig {
    pub window: WindowConfig,
    pub button_size: [f32; 2],
    /// Vertical offset of the start button centre below the window centre.
    pub button_offset_y: f32,
}
impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            button_size: [200.0, 50.0],
            button_offset_y: 150.0,
        }
    }
}

// ----------------------------- Sun Dodge -----------------------------

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SunConfig {
    pub base_radius: f32,
    pub growth_per_charge: f32,
    /// Horizontal speed in playfield pixels per tick before the charge boost.
    pub base_speed: f32,
    /// Distance between the sun centre and the bottom edge at spawn.
    pub bottom_margin: f32,
    /// Upper bound of the charge speed boost, in percent.
    pub max_speed_boost: f32,
}
impl Default for SunConfig {
    fn default() -> Self {
        Self {
            base_radius: 30.0,
            growth_per_charge: 2.0,
            base_speed: 7.0,
            bottom_margin: 60.0,
            max_speed_boost: 100.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlasmaConfig {
    pub radius: SpawnRange<u32>,
    pub base_speed: f32,
    /// Width of the uniform speed band above `base_speed`.
    pub speed_jitter: f32,
    pub charge_value: u32,
}
impl Default for PlasmaConfig {
    fn default() -> Self {
        Self {
            radius: SpawnRange { min: 20, max: 35 },
            base_speed: 5.0,
            speed_jitter: 2.0,
            charge_value: 6,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlasmaSpawnConfig {
    /// Amount added to the spawn meter every tick.
    pub meter_step: u32,
    pub base_interval: u32,
    pub min_interval: u32,
}
impl Default for PlasmaSpawnConfig {
    fn default() -> Self {
        Self {
            meter_step: 4,
            base_interval: 60,
            min_interval: 15,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DifficultyConfig {
    pub ramp_every_ticks: u32,
    pub speed_step: f32,
    pub interval_step: u32,
}
impl Default for DifficultyConfig {
    fn default() -> Self {
        Self {
            ramp_every_ticks: 600,
            speed_step: 0.8,
            interval_step: 2,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FlareConfig {
    /// Fraction of half the shorter playfield side the sun radius must reach.
    pub threshold_fraction: f32,
    pub duration_ticks: u32,
    /// Ticks the game-over screen stays up before the level completes.
    pub game_over_ticks: u32,
}
impl Default for FlareConfig {
    fn default() -> Self {
        Self {
            threshold_fraction: 0.9,
            duration_ticks: 180,
            game_over_ticks: 300,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SunDodgeConfig {
    pub window: WindowConfig,
    pub sun: SunConfig,
    pub plasma: PlasmaConfig,
    pub spawn: PlasmaSpawnConfig,
    pub difficulty: DifficultyConfig,
    pub flare: FlareConfig,
}
impl Default for SunDodgeConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig {
                title: "Sun Dodge: The Solar Flare Protocol".into(),
                width: 700.0,
                height: 900.0,
            },
            sun: Default::default(),
            plasma: Default::default(),
            spawn: Default::default(),
            difficulty: Default::default(),
            flare: Default::default(),
        }
    }
}
impl SunDodgeConfig {
    /// Radius at which the sun releases a flare.
    pub fn flare_radius(&self) -> f32 {
        let half_short_side = (self.window.width.min(self.window.height) / 2.0).floor();
        half_short_side * self.flare.threshold_fraction
    }
}

// ----------------------------- Satellite Repair -----------------------------

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AstronautConfig {
    pub size: f32,
    /// Centre at level start.
    pub start: [f32; 2],
    /// Centre after "Try Again".
    pub respawn: [f32; 2],
    /// Velocity added per tick while a direction is held.
    pub thrust: f32,
    pub friction: f32,
    pub lives: u32,
    pub damage_flash_ticks: u32,
}
impl Default for AstronautConfig {
    fn default() -> Self {
        Self {
            size: 60.0,
            start: [100.0, 300.0],
            respawn: [266.0, 300.0],
            thrust: 0.5,
            friction: 0.98,
            lives: 3,
            damage_flash_ticks: 30,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ParticleConfig {
    /// A particle spawns once the spawn timer exceeds this many ticks.
    pub spawn_after_ticks: u32,
    pub size: SpawnRange<u32>,
    /// Horizontal distance beyond the right edge where particles appear.
    pub entry_offset: SpawnRange<u32>,
    pub speed_x: SpawnRange<i32>,
    pub speed_y: SpawnRange<f32>,
}
impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            spawn_after_ticks: 30,
            size: SpawnRange { min: 30, max: 50 },
            entry_offset: SpawnRange { min: 20, max: 100 },
            speed_x: SpawnRange { min: -5, max: -2 },
            speed_y: SpawnRange { min: -1.0, max: 1.0 },
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PanelConfig {
    pub size: f32,
    pub positions: Vec<[f32; 2]>,
}
impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            size: 30.0,
            positions: vec![[200.0, 300.0], [600.0, 300.0], [200.0, 500.0], [600.0, 500.0]],
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MinigameConfig {
    pub target: u32,
    pub progress_per_press: u32,
    pub bar: [f32; 4],
}
impl Default for MinigameConfig {
    fn default() -> Self {
        Self {
            target: 100,
            progress_per_press: 5,
            bar: [200.0, 280.0, 400.0, 40.0],
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SatelliteConfig {
    pub top_left: [f32; 2],
    pub size: [f32; 2],
}
impl Default for SatelliteConfig {
    fn default() -> Self {
        Self {
            top_left: [10.0, 250.0],
            size: [800.0, 400.0],
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SatelliteRepairConfig {
    pub window: WindowConfig,
    pub astronaut: AstronautConfig,
    pub particles: ParticleConfig,
    pub panels: PanelConfig,
    pub minigame: MinigameConfig,
    pub satellite: SatelliteConfig,
}
impl Default for SatelliteRepairConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig {
                title: "Level 3: Repair the Satellite".into(),
                width: 800.0,
                height: 600.0,
            },
            astronaut: Default::default(),
            particles: Default::default(),
            panels: Default::default(),
            minigame: Default::default(),
            satellite: Default::default(),
        }
    }
}

// ----------------------------- Root -----------------------------

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed gameplay tick rate.
    pub tick_hz: f64,
    /// RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
    pub music: String,
    pub intro: IntroConfig,
    pub sun_dodge: SunDodgeConfig,
    pub satellite_repair: SatelliteRepairConfig,
}
impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_hz: 60.0,
            seed: None,
            music: "sounds/space_ambience.ogg".into(),
            intro: Default::default(),
            sun_dodge: Default::default(),
            satellite_repair: Default::default(),
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    /// Merge every readable RON file in order (later files override earlier keys) and
    /// deserialize the result. Returns the config, the files used and any problems met.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut Value, overlay: Value) {
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let mut incoming = Some(v);
                        for (ek, ev) in bm.iter_mut() {
                            if *ek == k {
                                if let Some(val) = incoming.take() {
                                    merge_value(ev, val);
                                }
                                break;
                            }
                        }
                        if let Some(val) = incoming {
                            bm.insert(k, val);
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.display().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        match merged {
            Some(val) => match val.into_rust::<GameConfig>() {
                Ok(cfg) => (cfg, used, errors),
                Err(e) => {
                    errors.push(format!(
                        "failed to deserialize merged config; using defaults: {e}"
                    ));
                    (GameConfig::default(), used, errors)
                }
            },
            None => (GameConfig::default(), used, errors),
        }
    }

    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if !(10.0..=480.0).contains(&self.tick_hz) {
            w.push(format!("tick_hz {} outside 10..480; gameplay speed will look wrong", self.tick_hz));
        }
        fn check_window(w: &mut Vec<String>, label: &str, win: &WindowConfig) {
            if win.width <= 0.0 || win.height <= 0.0 {
                w.push(format!("{label}.window dimensions must be > 0"));
            }
        }
        fn check_range<T: PartialOrd + std::fmt::Debug>(w: &mut Vec<String>, label: &str, r: &SpawnRange<T>) {
            if r.min > r.max {
                w.push(format!("{label} min ({:?}) greater than max ({:?})", r.min, r.max));
            }
        }
        check_window(&mut w, "intro", &self.intro.window);

        let sd = &self.sun_dodge;
        check_window(&mut w, "sun_dodge", &sd.window);
        check_range(&mut w, "sun_dodge.plasma.radius", &sd.plasma.radius);
        if sd.plasma.radius.min == 0 {
            w.push("sun_dodge.plasma.radius.min must be > 0".into());
        }
        if sd.spawn.meter_step == 0 {
            w.push("sun_dodge.spawn.meter_step is 0; no plasma will ever spawn".into());
        }
        if sd.spawn.min_interval > sd.spawn.base_interval {
            w.push(format!(
                "sun_dodge.spawn.min_interval ({}) above base_interval ({})",
                sd.spawn.min_interval, sd.spawn.base_interval
            ));
        }
        if sd.difficulty.ramp_every_ticks == 0 {
            w.push("sun_dodge.difficulty.ramp_every_ticks is 0; difficulty ramp disabled".into());
        }
        if sd.sun.base_radius >= sd.flare_radius() {
            w.push(format!(
                "sun_dodge.sun.base_radius {} already at flare radius {}",
                sd.sun.base_radius,
                sd.flare_radius()
            ));
        }
        if sd.plasma.charge_value == 0 || sd.sun.growth_per_charge <= 0.0 {
            w.push("sun_dodge: sun cannot grow (charge_value or growth_per_charge is zero)".into());
        }

        let sr = &self.satellite_repair;
        check_window(&mut w, "satellite_repair", &sr.window);
        if !(0.0..=1.0).contains(&sr.astronaut.friction) {
            w.push(format!(
                "satellite_repair.astronaut.friction {} outside 0..1 -> velocity grows",
                sr.astronaut.friction
            ));
        }
        if sr.astronaut.lives == 0 {
            w.push("satellite_repair.astronaut.lives is 0; mission fails on first hit".into());
        }
        check_range(&mut w, "satellite_repair.particles.size", &sr.particles.size);
        check_range(&mut w, "satellite_repair.particles.entry_offset", &sr.particles.entry_offset);
        check_range(&mut w, "satellite_repair.particles.speed_x", &sr.particles.speed_x);
        check_range(&mut w, "satellite_repair.particles.speed_y", &sr.particles.speed_y);
        if sr.particles.speed_x.max >= 0 {
            w.push("satellite_repair.particles.speed_x.max >= 0; particles may never leave".into());
        }
        if sr.particles.size.max as f32 > sr.window.height {
            w.push("satellite_repair.particles.size.max taller than the playfield".into());
        }
        if sr.panels.positions.is_empty() {
            w.push("satellite_repair.panels.positions empty; mission is won immediately".into());
        }
        if sr.minigame.progress_per_press == 0 {
            w.push("satellite_repair.minigame.progress_per_press is 0; panels cannot be repaired".into());
        }
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate_clean() {
        let cfg = GameConfig::default();
        assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
    }

    #[test]
    fn flare_radius_uses_half_short_side() {
        let cfg = SunDodgeConfig::default();
        // min(700, 900) / 2 = 350, 90% of it
        assert!((cfg.flare_radius() - 315.0).abs() < 1e-4);
    }

    #[test]
    fn validate_flags_inverted_ranges() {
        let mut cfg = GameConfig::default();
        cfg.satellite_repair.particles.size = SpawnRange { min: 60, max: 30 };
        let warns = cfg.validate();
        assert!(warns.iter().any(|w| w.contains("particles.size")), "{warns:?}");
    }

    #[test]
    fn partial_ron_keeps_defaults() {
        let cfg: GameConfig = ron::from_str("(sun_dodge: (sun: (base_speed: 9.0)))").unwrap();
        assert_eq!(cfg.sun_dodge.sun.base_speed, 9.0);
        assert_eq!(cfg.sun_dodge.sun.base_radius, 30.0);
        assert_eq!(cfg.satellite_repair.panels.positions.len(), 4);
    }
}
