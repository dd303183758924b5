use bevy::prelude::*;

use crate::app::state::AppState;
use crate::rendering::palette;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(palette::INTRO_BACKDROP))
            .add_systems(Startup, setup_camera)
            .add_systems(OnEnter(AppState::Intro), clear_to(palette::INTRO_BACKDROP))
            .add_systems(OnEnter(AppState::SunDodge), clear_to(palette::DODGE_BACKDROP))
            .add_systems(OnEnter(AppState::SatelliteRepair), clear_to(palette::REPAIR_BACKDROP));
    }
}

#[derive(Component)]
pub struct GameCamera;

fn setup_camera(mut commands: Commands) {
    // Camera2d pulls in its own Camera / Projection via required components.
    commands.spawn((GameCamera, Camera2d));
}

fn clear_to(color: Color) -> impl Fn(ResMut<ClearColor>) {
    move |mut clear: ResMut<ClearColor>| clear.0 = color
}
