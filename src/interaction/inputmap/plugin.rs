// This file is part of HELIOS.
// Copyright (C) 2025 HELIOS contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::input::InputSystem;
use bevy::prelude::*;

use super::parse::parse_input_toml;
use super::systems::system_collect_intent;
use super::types::{InputMap, PlayerIntent};

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct InputActionUpdateSet;

pub struct InputActionsPlugin;
impl Plugin for InputActionsPlugin { fn build(&self, app: &mut App) { app
        .init_resource::<InputMap>()
        .init_resource::<PlayerIntent>()
        .configure_sets(PreUpdate, InputActionUpdateSet.after(InputSystem))
        .add_systems(PreStartup, load_initial_input_map)
        .add_systems(PreUpdate, system_collect_intent.in_set(InputActionUpdateSet)); } }

fn load_initial_input_map(mut commands: Commands) {
    let path = std::env::var("INPUT_CONFIG_PATH").unwrap_or_else(|_| "assets/config/input.toml".into());
    let raw = match std::fs::read_to_string(&path) { Ok(raw) => raw, Err(e) => { warn!(target: "input", "Input map {path} unreadable ({e}); using built-in bindings"); return; } };
    let parsed = parse_input_toml(&raw);
    if !parsed.errors.is_empty() { for e in parsed.errors { error!(target: "input", "INPUT MAP ERROR: {e}"); } } else { info!(target: "input", "Input map loaded from {path}"); }
    commands.insert_resource(parsed.input_map); }
