// This file is part of HELIOS.
// Copyright (C) 2025 HELIOS contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Playfield positions -> world transforms.

use bevy::prelude::*;
use bevy::transform::TransformSystem;

use crate::core::components::Layer;
use crate::core::playfield::{FieldPos, Playfield};
use crate::core::system::PresentationSet;

pub struct FieldSyncPlugin;

impl Plugin for FieldSyncPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(PostUpdate, PresentationSet.before(TransformSystem::TransformPropagate))
            .add_systems(PostUpdate, sync_field_transforms.in_set(PresentationSet));
    }
}

pub fn sync_field_transforms(playfield: Res<Playfield>, mut q: Query<(&FieldPos, Option<&Layer>, &mut Transform)>) {
    for (pos, layer, mut tf) in &mut q {
        let world = playfield.to_world(pos.0);
        let z = layer.map_or(0.0, |l| l.0);
        let target = world.extend(z);
        if tf.translation != target {
            tf.translation = target;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_pos_drives_translation() {
        let mut app = App::new();
        app.insert_resource(Playfield::new(Vec2::new(800.0, 600.0)));
        app.add_systems(Update, sync_field_transforms);
        let e = app
            .world_mut()
            .spawn((FieldPos::new(0.0, 0.0), Layer::HAZARDS, Transform::default()))
            .id();
        app.update();
        let tf = app.world().get::<Transform>(e).copied().unwrap_or_default();
        assert_eq!(tf.translation, Vec3::new(-400.0, 300.0, Layer::HAZARDS.0));
    }
}
