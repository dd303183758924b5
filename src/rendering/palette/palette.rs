// This file is part of HELIOS.
// Copyright (C) 2025 HELIOS contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

// Shared
pub const TEXT: Color = Color::WHITE;
pub const TEXT_DIM: Color = Color::srgb(0.588, 0.588, 0.588); // 150 grey
pub const OVERLAY: Color = Color::srgba(0.0, 0.0, 0.0, 0.706); // black @ 180/255
pub const PLACEHOLDER: Color = Color::srgb(1.0, 0.0, 1.0); // magenta stand-in for missing art

// Intro
pub const INTRO_BACKDROP: Color = Color::BLACK;
pub const START_BUTTON: Color = Color::srgb(0.784, 0.784, 0.784); // 200 grey
pub const START_TEXT: Color = Color::BLACK;

// Sun Dodge
pub const DODGE_BACKDROP: Color = Color::srgb(0.0, 0.0, 0.078); // deep navy (0,0,20)
pub const PLASMA_OUTER: Color = Color::srgb(1.0, 0.196, 0.0); // (255,50,0)
pub const PLASMA_INNER: Color = Color::srgb(1.0, 0.392, 0.196); // (255,100,50)
pub const FLARE: Color = Color::srgb(1.0, 0.392, 0.0); // (255,100,0)
pub const FLARE_TITLE: Color = Color::srgb(1.0, 0.0, 0.0);
pub const FLARE_AFTERMATH: Color = Color::srgb(0.196, 0.0, 0.0); // (50,0,0)

/// Sun body colour by charge band, hottest last.
pub const SUN_BANDS: [(u32, Color); 3] = [
    (10, Color::srgb(1.0, 1.0, 0.588)),   // pale yellow
    (20, Color::srgb(1.0, 0.784, 0.0)),   // gold
    (30, Color::srgb(1.0, 0.588, 0.0)),   // orange
];
pub const SUN_HOTTEST: Color = Color::srgb(1.0, 0.392, 0.0); // deep orange

// Satellite Repair
pub const REPAIR_BACKDROP: Color = Color::BLACK;
pub const PANEL_DAMAGED: Color = Color::srgb(1.0, 0.0, 0.0);
pub const PANEL_REPAIRED: Color = Color::srgb(0.0, 1.0, 0.0);
pub const DAMAGE_TINT: Color = Color::srgb(1.0, 0.0, 0.0); // multiplies sprite colour -> red channel only
pub const BAR_BACKGROUND: Color = Color::srgb(0.314, 0.314, 0.314); // (80,80,80)
pub const BAR_PROGRESS: Color = Color::srgb(0.392, 0.784, 1.0); // (100,200,255)
pub const RETRY_BUTTON: Color = Color::srgb(0.314, 0.314, 0.588); // (80,80,150)
pub const RETRY_BUTTON_HOVER: Color = Color::srgb(0.431, 0.431, 0.706); // (110,110,180)

#[inline]
pub fn sun_color(charge: u32) -> Color {
    SUN_BANDS
        .iter()
        .find(|(limit, _)| charge < *limit)
        .map(|(_, c)| *c)
        .unwrap_or(SUN_HOTTEST)
}

/// Darker rim drawn around the fallback sun disc (each channel minus 50, floored at 0).
#[inline]
pub fn sun_rim_color(charge: u32) -> Color {
    let c = sun_color(charge).to_srgba();
    let d = 50.0 / 255.0;
    Color::srgb((c.red - d).max(0.0), (c.green - d).max(0.0), (c.blue - d).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sun_bands_follow_charge() {
        assert_eq!(sun_color(0), SUN_BANDS[0].1);
        assert_eq!(sun_color(9), SUN_BANDS[0].1);
        assert_eq!(sun_color(10), SUN_BANDS[1].1);
        assert_eq!(sun_color(29), SUN_BANDS[2].1);
        assert_eq!(sun_color(30), SUN_HOTTEST);
        assert_eq!(sun_color(144), SUN_HOTTEST);
    }

    #[test]
    fn rim_is_darker() {
        let body = sun_color(0).to_srgba();
        let rim = sun_rim_color(0).to_srgba();
        assert!(rim.red < body.red && rim.green < body.green && rim.blue < body.blue);
    }
}
