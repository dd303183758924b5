// This file is part of HELIOS.
// Copyright (C) 2025 HELIOS contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-pixel collision masks built from sprite alpha on the CPU.

use anyhow::{Context, Result};
use bevy::prelude::*;
use image::{imageops::FilterType, RgbaImage};
use std::path::{Path, PathBuf};

/// Pixels with alpha strictly above this value are solid.
pub const ALPHA_THRESHOLD: u8 = 127;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionMask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl CollisionMask {
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![false; (width * height) as usize],
        }
    }

    /// Fully solid mask, used for placeholder art.
    pub fn solid(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![true; (width * height) as usize],
        }
    }

    pub fn from_rgba(img: &RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let bits = img.pixels().map(|p| p.0[3] > ALPHA_THRESHOLD).collect();
        Self { width, height, bits }
    }

    /// Resize `src` to `width`×`height` and take its alpha mask.
    pub fn from_image_scaled(src: &RgbaImage, width: u32, height: u32) -> Self {
        if src.dimensions() == (width, height) {
            return Self::from_rgba(src);
        }
        let scaled = image::imageops::resize(src, width, height, FilterType::Nearest);
        Self::from_rgba(&scaled)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.bits[(y * self.width + x) as usize]
    }

    pub fn set(&mut self, x: u32, y: u32, value: bool) {
        if x < self.width && y < self.height {
            self.bits[(y * self.width + x) as usize] = value;
        }
    }

    /// True if any solid pixel of `other`, placed with its origin at `offset`
    /// relative to this mask's origin, coincides with a solid pixel here.
    pub fn overlaps(&self, other: &CollisionMask, offset: IVec2) -> bool {
        let x0 = offset.x.max(0);
        let y0 = offset.y.max(0);
        let x1 = (offset.x + other.width as i32).min(self.width as i32);
        let y1 = (offset.y + other.height as i32).min(self.height as i32);
        if x0 >= x1 || y0 >= y1 {
            return false;
        }
        for y in y0..y1 {
            for x in x0..x1 {
                if self.get(x as u32, y as u32) && other.get((x - offset.x) as u32, (y - offset.y) as u32) {
                    return true;
                }
            }
        }
        false
    }
}

/// Directory the asset server reads from: `BEVY_ASSET_ROOT`, else the cargo
/// manifest dir, else the executable's directory; joined with `assets`.
pub fn asset_root() -> PathBuf {
    let base = std::env::var_os("BEVY_ASSET_ROOT")
        .or_else(|| std::env::var_os("CARGO_MANIFEST_DIR"))
        .map(PathBuf::from)
        .or_else(|| {
            std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(Path::to_path_buf))
        })
        .unwrap_or_default();
    base.join("assets")
}

/// Decode an image under the asset root into RGBA8.
pub fn load_rgba(relative: &str) -> Result<RgbaImage> {
    let path = asset_root().join(relative);
    let img = image::open(&path).with_context(|| format!("decode mask source {}", path.display()))?;
    Ok(img.to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn alpha_threshold_is_exclusive() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([255, 0, 0, 127]));
        img.put_pixel(1, 0, Rgba([255, 0, 0, 128]));
        let m = CollisionMask::from_rgba(&img);
        assert!(!m.get(0, 0));
        assert!(m.get(1, 0));
    }

    #[test]
    fn scaled_mask_matches_requested_size() {
        let img = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 255]));
        let m = CollisionMask::from_image_scaled(&img, 37, 37);
        assert_eq!((m.width(), m.height()), (37, 37));
        assert!(m.get(0, 0) && m.get(36, 36));
        assert!(!m.get(37, 0));
    }

    #[test]
    fn overlap_respects_offset() {
        let a = CollisionMask::solid(4, 4);
        let b = CollisionMask::solid(2, 2);
        assert!(a.overlaps(&b, IVec2::new(3, 3)));
        assert!(!a.overlaps(&b, IVec2::new(4, 0)));
        assert!(a.overlaps(&b, IVec2::new(-1, -1)));
        assert!(!a.overlaps(&b, IVec2::new(-2, 0)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_rgba("images/definitely_missing.png").unwrap_err();
        assert!(format!("{err:#}").contains("definitely_missing.png"));
    }
}
