use bevy::prelude::*;

use crate::core::config::GameConfig;

/// Ambient loop for the whole session.
pub struct MusicPlugin;

impl Plugin for MusicPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, start_music);
    }
}

fn start_music(mut commands: Commands, asset_server: Res<AssetServer>, cfg: Res<GameConfig>) {
    if cfg.music.is_empty() {
        info!(target: "config", "music disabled");
        return;
    }
    // A missing file is reported by the asset server; the game stays silent.
    commands.spawn((
        AudioPlayer::new(asset_server.load(cfg.music.clone())),
        PlaybackSettings::LOOP,
    ));
}
