pub mod art;
pub mod camera;
pub mod palette;
pub mod sync;
pub mod ui;

use bevy::prelude::*;

/// Everything needed to draw a level: camera, art fallback resolution, transform sync.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(Update, crate::core::system::PresentationSet)
            .add_plugins((camera::CameraPlugin, art::ArtPlugin, sync::FieldSyncPlugin));
    }
}
