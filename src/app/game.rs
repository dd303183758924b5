// This file is part of HELIOS.
// Copyright (C) 2025 HELIOS contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use std::path::PathBuf;

use super::cli::CommonArgs;
use super::intro::IntroPlugin;
use super::music::MusicPlugin;
use super::state::{AppState, Campaign, CampaignPlugin};
use crate::core::config::GameConfig;
use crate::core::playfield::Playfield;
use crate::core::rng::GameRng;
use crate::debug::DebugPlugin;
use crate::gameplay::satellite_repair::{SatelliteRepairPlugin, SatelliteRepairViewPlugin};
use crate::gameplay::sun_dodge::{SunDodgePlugin, SunDodgeViewPlugin};
use crate::interaction::inputmap::InputActionsPlugin;
use crate::rendering::RenderingPlugin;

pub const BASE_CONFIG: &str = "assets/config/game.ron";
pub const LOCAL_CONFIG: &str = "assets/config/game.local.ron";

/// What the binary plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Launch {
    /// Intro screen, then every level in order.
    Campaign,
    /// One level, exit when it completes.
    Level(AppState),
}

impl Launch {
    pub fn initial_state(self) -> AppState {
        match self {
            Launch::Campaign => AppState::Intro,
            Launch::Level(l) => l,
        }
    }

    pub fn campaign(self) -> Campaign {
        match self {
            Launch::Campaign => Campaign::default(),
            Launch::Level(l) => Campaign::single(l),
        }
    }
}

/// Whole game on top of `DefaultPlugins`. Expects `GameConfig` to be inserted.
pub struct HeliosPlugin {
    pub launch: Launch,
}

impl Plugin for HeliosPlugin {
    fn build(&self, app: &mut App) {
        let (tick_hz, seed) = app
            .world()
            .get_resource::<GameConfig>()
            .map_or((60.0, None), |c| (c.tick_hz, c.seed));
        app.insert_resource(Time::<Fixed>::from_hz(tick_hz))
            .insert_resource(GameRng::from_seed_option(seed))
            .insert_resource(self.launch.campaign())
            .init_resource::<Playfield>()
            .insert_state(self.launch.initial_state())
            .add_plugins((
                CampaignPlugin,
                InputActionsPlugin,
                RenderingPlugin,
                MusicPlugin,
                IntroPlugin,
                SunDodgePlugin,
                SunDodgeViewPlugin,
                SatelliteRepairPlugin,
                SatelliteRepairViewPlugin,
                DebugPlugin,
            ));
    }
}

/// Outcome of config loading, logged once logging is up.
#[derive(Resource, Debug, Default)]
struct ConfigReport {
    used: Vec<String>,
    errors: Vec<String>,
    warnings: Vec<String>,
}

/// Config layers in merge order: base, optional local overlay, optional `--config`.
pub fn config_layers(extra: Option<PathBuf>) -> Vec<PathBuf> {
    let mut layers = vec![PathBuf::from(BASE_CONFIG)];
    let local = PathBuf::from(LOCAL_CONFIG);
    if local.exists() {
        layers.push(local);
    }
    layers.extend(extra);
    layers
}

/// Load the layered config, apply command line overrides and run until exit.
pub fn run(launch: Launch, args: CommonArgs) -> AppExit {
    let (mut cfg, used, errors) = GameConfig::load_layered(config_layers(args.config));
    if let Some(seed) = args.seed {
        cfg.seed = Some(seed);
    }
    let warnings = cfg.validate();
    let window = launch.initial_state().window(&cfg).clone();

    App::new()
        .insert_resource(cfg)
        .insert_resource(ConfigReport { used, errors, warnings })
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: window.title,
                resolution: (window.width, window.height).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(HeliosPlugin { launch })
        .add_systems(Startup, log_config_report)
        .run()
}

fn log_config_report(mut commands: Commands, report: Res<ConfigReport>) {
    if report.used.is_empty() {
        warn!(target: "config", "No config file loaded; using built-in defaults");
    } else {
        info!(target: "config", "Config layers: {}", report.used.join(" -> "));
    }
    for e in &report.errors {
        error!(target: "config", "{e}");
    }
    for w in &report.warnings {
        warn!(target: "config", "{w}");
    }
    commands.remove_resource::<ConfigReport>();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_picks_start_state_and_campaign() {
        assert_eq!(Launch::Campaign.initial_state(), AppState::Intro);
        assert_eq!(Launch::Campaign.campaign(), Campaign::default());
        let level = Launch::Level(AppState::SatelliteRepair);
        assert_eq!(level.initial_state(), AppState::SatelliteRepair);
        assert_eq!(level.campaign().levels, vec![AppState::SatelliteRepair]);
    }

    #[test]
    fn extra_config_is_merged_last() {
        let layers = config_layers(Some(PathBuf::from("override.ron")));
        assert_eq!(layers.first(), Some(&PathBuf::from(BASE_CONFIG)));
        assert_eq!(layers.last(), Some(&PathBuf::from("override.ron")));
    }
}
