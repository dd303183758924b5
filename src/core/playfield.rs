// This file is part of HELIOS.
// Copyright (C) 2025 HELIOS contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Playfield coordinates: origin at the window's top-left corner, `+y` down.
//! Gameplay runs entirely in these units; rendering converts to world space.

use bevy::prelude::*;

/// Size of the active level's playfield (matches the window's logical size).
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl Playfield {
    pub fn new(size: Vec2) -> Self {
        Self {
            width: size.x,
            height: size.y,
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Convert a playfield point into camera-centred, y-up world coordinates.
    pub fn to_world(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x - self.width * 0.5, self.height * 0.5 - p.y)
    }
}

/// Centre of an entity in playfield pixels.
#[derive(Component, Debug, Clone, Copy, Deref, DerefMut, PartialEq, Default)]
pub struct FieldPos(pub Vec2);

impl FieldPos {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_world_edges() {
        let pf = Playfield::new(Vec2::new(700.0, 900.0));
        assert_eq!(pf.to_world(Vec2::ZERO), Vec2::new(-350.0, 450.0));
        assert_eq!(pf.to_world(Vec2::new(700.0, 900.0)), Vec2::new(350.0, -450.0));
        assert_eq!(pf.to_world(Vec2::new(350.0, 450.0)), Vec2::ZERO);
    }
}
