// This file is part of HELIOS.
// Copyright (C) 2025 HELIOS contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Image-or-shape visuals. Every drawable owns an `ArtSlot`: a sprite child that
//! shows once its image is loaded and a fallback child built from primitive
//! meshes that stays up while the image is pending or after it failed.

use bevy::asset::LoadState;
use bevy::prelude::*;
use std::collections::HashSet;

use crate::core::system::PresentationSet;

/// Asset-relative image and sound paths.
pub mod paths {
    pub const INTRO_BACKGROUND: &str = "images/helioss.png";
    pub const DODGE_BACKGROUND: &str = "images/lvl1.png";
    pub const SUN: &str = "images/sun.png";
    pub const PLASMA: &str = "images/plasma_ball.png";
    pub const REPAIR_BACKGROUND: &str = "images/background.png";
    pub const ASTRONAUT: &str = "images/astronaut.png";
    pub const SATELLITE: &str = "images/satellite.png";
    pub const HEART: &str = "images/heart.png";
    pub const PARTICLES: [&str; 3] = ["images/particle1.png", "images/particle2.png", "images/particle3.png"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArtStatus {
    #[default]
    Pending,
    Ready,
    Missing,
}

#[derive(Component, Debug, Clone)]
pub struct ArtSlot {
    pub image: Handle<Image>,
    pub status: ArtStatus,
    pub sprite: Entity,
    pub fallback: Entity,
    /// Width / height of the decoded image, known once `Ready`.
    pub aspect: Option<f32>,
}

#[derive(Component)]
pub struct ArtSprite;

#[derive(Component)]
pub struct ArtFallback;

/// Unit primitives shared by every fallback shape; scale sets the size.
#[derive(Resource, Clone)]
pub struct ShapeMeshes {
    /// Circle of radius 1.
    pub circle: Handle<Mesh>,
    /// Square with side 1.
    pub square: Handle<Mesh>,
}

impl FromWorld for ShapeMeshes {
    fn from_world(world: &mut World) -> Self {
        let mut meshes = world.resource_mut::<Assets<Mesh>>();
        Self {
            circle: meshes.add(Circle::new(1.0)),
            square: meshes.add(Rectangle::new(1.0, 1.0)),
        }
    }
}

pub struct ArtPlugin;

impl Plugin for ArtPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ShapeMeshes>()
            .add_systems(Update, resolve_art_slots.before(PresentationSet));
    }
}

/// Attach an image sprite of `size` plus an empty fallback root under `owner`.
/// Returns the fallback root so callers can hang their primitive shapes on it.
pub fn spawn_art_slot(
    commands: &mut Commands,
    asset_server: &AssetServer,
    owner: Entity,
    path: &'static str,
    size: Vec2,
) -> Entity {
    let image: Handle<Image> = asset_server.load(path);
    let sprite = commands
        .spawn((
            ArtSprite,
            Sprite {
                image: image.clone(),
                custom_size: Some(size),
                ..default()
            },
            Transform::default(),
            Visibility::Hidden,
        ))
        .id();
    let fallback = commands
        .spawn((ArtFallback, Transform::default(), Visibility::Inherited))
        .id();
    commands
        .entity(owner)
        .add_children(&[sprite, fallback])
        .insert(ArtSlot {
            image,
            status: ArtStatus::Pending,
            sprite,
            fallback,
            aspect: None,
        });
    fallback
}

/// Swap pending slots to their sprite once loaded, or settle on the fallback
/// when the load failed. Each failing image is reported once.
pub fn resolve_art_slots(
    asset_server: Res<AssetServer>,
    images: Res<Assets<Image>>,
    mut slots: Query<&mut ArtSlot>,
    mut visibility: Query<&mut Visibility>,
    mut reported: Local<HashSet<AssetId<Image>>>,
) {
    for mut slot in &mut slots {
        if slot.status != ArtStatus::Pending {
            continue;
        }
        match asset_server.load_state(slot.image.id()) {
            LoadState::Loaded => {
                slot.aspect = images.get(&slot.image).map(|img| {
                    let s = img.size_f32();
                    if s.y > 0.0 { s.x / s.y } else { 1.0 }
                });
                slot.status = ArtStatus::Ready;
                if let Ok(mut v) = visibility.get_mut(slot.sprite) {
                    *v = Visibility::Inherited;
                }
                if let Ok(mut v) = visibility.get_mut(slot.fallback) {
                    *v = Visibility::Hidden;
                }
            }
            LoadState::Failed(err) => {
                if reported.insert(slot.image.id()) {
                    let path = slot
                        .image
                        .path()
                        .map(|p| p.to_string())
                        .unwrap_or_else(|| "<unnamed>".into());
                    warn!(target: "art", "{path} unavailable ({err}); drawing fallback shapes");
                }
                slot.status = ArtStatus::Missing;
            }
            _ => {}
        }
    }
}

/// Fit an image with `aspect` (w / h) inside a square of side `extent`,
/// the larger side matching `extent`.
pub fn contain_size(aspect: Option<f32>, extent: f32) -> Vec2 {
    match aspect {
        Some(a) if a >= 1.0 => Vec2::new(extent, extent / a),
        Some(a) if a > 0.0 => Vec2::new(extent * a, extent),
        _ => Vec2::splat(extent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contain_keeps_larger_side() {
        assert_eq!(contain_size(Some(2.0), 100.0), Vec2::new(100.0, 50.0));
        assert_eq!(contain_size(Some(0.5), 100.0), Vec2::new(50.0, 100.0));
        assert_eq!(contain_size(None, 60.0), Vec2::splat(60.0));
    }
}
