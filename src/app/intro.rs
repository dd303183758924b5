//! Launcher screen: background art and a "Click to Start" button.

use bevy::prelude::*;

use super::state::{despawn_scoped, AppState, Campaign};
use crate::core::collision::PixelRect;
use crate::core::components::Layer;
use crate::core::config::{GameConfig, IntroConfig};
use crate::core::playfield::FieldPos;
use crate::rendering::art::{paths, spawn_art_slot};
use crate::rendering::palette;
use crate::rendering::ui::{rect_node, FONT_BODY};

pub struct IntroPlugin;

impl Plugin for IntroPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Intro), spawn_intro)
            .add_systems(Update, handle_start_button.run_if(in_state(AppState::Intro)))
            .add_systems(OnExit(AppState::Intro), despawn_scoped::<IntroScoped>);
    }
}

#[derive(Component, Default)]
pub struct IntroScoped;

#[derive(Component)]
pub struct StartButton;

/// Start button rectangle: `button_size`, centred `button_offset_y` below the window centre.
pub fn start_button_rect(cfg: &IntroConfig) -> PixelRect {
    let center = cfg.window.size() * 0.5 + Vec2::new(0.0, cfg.button_offset_y);
    PixelRect::from_center(center, Vec2::from(cfg.button_size))
}

fn spawn_intro(mut commands: Commands, asset_server: Res<AssetServer>, cfg: Res<GameConfig>) {
    let size = cfg.intro.window.size();
    let backdrop = commands
        .spawn((
            IntroScoped,
            FieldPos(size * 0.5),
            Layer::BACKDROP,
            Transform::default(),
            Visibility::default(),
        ))
        .id();
    spawn_art_slot(&mut commands, &asset_server, backdrop, paths::INTRO_BACKGROUND, size);

    let r = start_button_rect(&cfg.intro);
    commands
        .spawn((
            IntroScoped,
            StartButton,
            Button,
            Node {
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..rect_node(r.x as f32, r.y as f32, r.w as f32, r.h as f32)
            },
            BackgroundColor(palette::START_BUTTON),
        ))
        .with_children(|b| {
            b.spawn((
                Text::new("Click to Start"),
                TextFont {
                    font_size: FONT_BODY,
                    ..default()
                },
                TextColor(palette::START_TEXT),
            ));
        });
    info!(target: "campaign", "Intro ready; click the button to start");
}

pub fn handle_start_button(
    q: Query<&Interaction, (Changed<Interaction>, With<StartButton>)>,
    campaign: Res<Campaign>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if !q.iter().any(|i| *i == Interaction::Pressed) {
        return;
    }
    if let Some(first) = campaign.first() {
        info!(target: "campaign", "Starting campaign at {first:?}");
        next_state.set(first);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_button_sits_below_centre() {
        let r = start_button_rect(&IntroConfig::default());
        assert_eq!(r, PixelRect::new(300, 425, 200, 50));
    }
}
