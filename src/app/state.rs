use bevy::app::AppExit;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::core::config::{GameConfig, WindowConfig};

/// High-level app lifecycle state.
/// Intro -> SunDodge -> SatelliteRepair -> (exit)
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AppState {
    /// Launcher screen with the start button.
    #[default]
    Intro,
    SunDodge,
    SatelliteRepair,
}

impl AppState {
    pub fn window<'a>(&self, cfg: &'a GameConfig) -> &'a WindowConfig {
        match self {
            AppState::Intro => &cfg.intro.window,
            AppState::SunDodge => &cfg.sun_dodge.window,
            AppState::SatelliteRepair => &cfg.satellite_repair.window,
        }
    }
}

/// Sent by a level once it is finished.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelCompleted {
    pub level: AppState,
}

/// Level order played after the intro (or by a single-level binary).
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct Campaign {
    pub levels: Vec<AppState>,
}

impl Default for Campaign {
    fn default() -> Self {
        Self {
            levels: vec![AppState::SunDodge, AppState::SatelliteRepair],
        }
    }
}

impl Campaign {
    pub fn single(level: AppState) -> Self {
        Self { levels: vec![level] }
    }

    pub fn first(&self) -> Option<AppState> {
        self.levels.first().copied()
    }

    /// Level following `current`, `None` once the campaign is over.
    pub fn next_after(&self, current: AppState) -> Option<AppState> {
        let idx = self.levels.iter().position(|l| *l == current)?;
        self.levels.get(idx + 1).copied()
    }
}

pub struct CampaignPlugin;

impl Plugin for CampaignPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Campaign>()
            .add_event::<LevelCompleted>()
            .add_systems(Update, advance_campaign)
            .add_systems(OnEnter(AppState::Intro), fit_window_to(AppState::Intro))
            .add_systems(OnEnter(AppState::SunDodge), fit_window_to(AppState::SunDodge))
            .add_systems(OnEnter(AppState::SatelliteRepair), fit_window_to(AppState::SatelliteRepair));
    }
}

pub fn advance_campaign(
    mut completed: EventReader<LevelCompleted>,
    campaign: Res<Campaign>,
    mut next_state: ResMut<NextState<AppState>>,
    mut exit: EventWriter<AppExit>,
) {
    // Only the first completion of a frame counts; the level is gone afterwards.
    let Some(done) = completed.read().next().copied() else { return; };
    completed.clear();
    match campaign.next_after(done.level) {
        Some(next) => {
            info!(target: "campaign", "{:?} complete -> {:?}", done.level, next);
            next_state.set(next);
        }
        None => {
            info!(target: "campaign", "{:?} complete; campaign finished", done.level);
            exit.write(AppExit::Success);
        }
    }
}

/// Resize and retitle the primary window for `state`.
fn fit_window_to(state: AppState) -> impl Fn(Res<GameConfig>, Query<&mut Window, With<PrimaryWindow>>) {
    move |cfg: Res<GameConfig>, mut windows: Query<&mut Window, With<PrimaryWindow>>| {
        let Ok(mut window) = windows.single_mut() else { return; };
        let wc = state.window(&cfg);
        window.resolution.set(wc.width, wc.height);
        window.title = wc.title.clone();
    }
}

/// Despawn every entity tagged with `T` (used on state exit).
pub fn despawn_scoped<T: Component>(mut commands: Commands, q: Query<Entity, With<T>>) {
    for e in &q {
        commands.entity(e).despawn();
    }
}
