// This file is part of HELIOS.
// Copyright (C) 2025 HELIOS contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

/// Velocity in playfield pixels per tick.
#[derive(Component, Debug, Clone, Copy, Deref, DerefMut, PartialEq, Default)]
pub struct Velocity(pub Vec2);

/// Draw order hint; copied into `Transform::translation.z` by the render sync.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Layer(pub f32);

impl Layer {
    pub const BACKDROP: Layer = Layer(0.0);
    pub const SCENERY: Layer = Layer(1.0);
    pub const PLAYER: Layer = Layer(2.0);
    pub const PROPS: Layer = Layer(3.0);
    pub const HAZARDS: Layer = Layer(4.0);
    /// Player that must stay visible over the hazards it collects (the sun).
    pub const PLAYER_OVER_HAZARDS: Layer = Layer(4.5);
    pub const EFFECTS: Layer = Layer(5.0);
    pub const HUD: Layer = Layer(10.0);
}
