// This file is part of HELIOS.
// Copyright (C) 2025 HELIOS contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Circle and integer-rectangle collision primitives shared by the levels.

use bevy::prelude::*;

use super::mask::CollisionMask;

/// True when two circles overlap (touching edges do not count).
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    a.distance(b) < ra + rb
}

/// Axis-aligned rectangle in whole playfield pixels (top-left origin).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of `size` centred on `center`, snapped to whole pixels.
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let top_left = (center - size * 0.5).round();
        Self::new(
            top_left.x as i32,
            top_left.y as i32,
            size.x.round() as i32,
            size.y.round() as i32,
        )
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Positive-area overlap test; rectangles sharing only an edge do not intersect.
    pub fn intersects(&self, other: &PixelRect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

}

/// Clamp the centre of a `size` box so the whole box stays inside `bounds`.
pub fn clamp_center_within(center: Vec2, size: Vec2, bounds: Vec2) -> Vec2 {
    let half = size * 0.5;
    Vec2::new(
        center.x.clamp(half.x, (bounds.x - half.x).max(half.x)),
        center.y.clamp(half.y, (bounds.y - half.y).max(half.y)),
    )
}

/// Bounding rectangles first, then per-pixel overlap of the two masks.
pub fn masks_collide(a_rect: &PixelRect, a_mask: &CollisionMask, b_rect: &PixelRect, b_mask: &CollisionMask) -> bool {
    if !a_rect.intersects(b_rect) {
        return false;
    }
    a_mask.overlaps(b_mask, IVec2::new(b_rect.x - a_rect.x, b_rect.y - a_rect.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circles_touching_do_not_overlap() {
        assert!(!circles_overlap(Vec2::ZERO, 10.0, Vec2::new(20.0, 0.0), 10.0));
        assert!(circles_overlap(Vec2::ZERO, 10.0, Vec2::new(19.9, 0.0), 10.0));
    }

    #[test]
    fn circle_overlap_is_euclidean() {
        // 3-4-5 triangle: distance 50
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(30.0, 40.0);
        assert!(circles_overlap(a, 25.0, b, 25.1));
        assert!(!circles_overlap(a, 25.0, b, 25.0));
    }

    #[test]
    fn rect_edges_do_not_intersect() {
        let a = PixelRect::new(0, 0, 10, 10);
        assert!(!a.intersects(&PixelRect::new(10, 0, 10, 10)));
        assert!(a.intersects(&PixelRect::new(9, 9, 10, 10)));
    }

    #[test]
    fn from_center_snaps_to_whole_pixels() {
        let r = PixelRect::from_center(Vec2::new(100.49, 299.51), Vec2::splat(60.0));
        assert_eq!(r, PixelRect::new(70, 270, 60, 60));
        assert_eq!((r.right(), r.bottom()), (130, 330));
    }

    #[test]
    fn clamp_keeps_box_inside() {
        let c = clamp_center_within(Vec2::new(-40.0, 700.0), Vec2::splat(60.0), Vec2::new(800.0, 600.0));
        assert_eq!(c, Vec2::new(30.0, 570.0));
    }

    #[test]
    fn masks_collide_requires_opaque_overlap() {
        let a_rect = PixelRect::new(0, 0, 4, 4);
        let b_rect = PixelRect::new(2, 2, 4, 4);
        let solid = CollisionMask::solid(4, 4);
        assert!(masks_collide(&a_rect, &solid, &b_rect, &solid));

        // Only the top-left pixel of `b` is set; it lands on a's (2,2).
        let mut corner = CollisionMask::empty(4, 4);
        corner.set(0, 0, true);
        let mut far = CollisionMask::empty(4, 4);
        far.set(0, 0, true);
        assert!(!masks_collide(&a_rect, &far, &b_rect, &corner));
        assert!(masks_collide(&a_rect, &solid, &b_rect, &corner));
    }
}
