use bevy::app::AppExit;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use helios::app::state::{AppState, Campaign, CampaignPlugin, LevelCompleted};
use helios::core::config::GameConfig;

fn campaign_app(start: AppState, campaign: Campaign) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.insert_resource(GameConfig::default());
    app.insert_resource(campaign);
    app.insert_state(start);
    app.add_plugins(CampaignPlugin);
    app.update();
    app
}

fn state(app: &App) -> AppState {
    *app.world().resource::<State<AppState>>().get()
}

#[test]
fn completing_sun_dodge_moves_on_to_repair() {
    let mut app = campaign_app(AppState::SunDodge, Campaign::default());
    app.world_mut().send_event(LevelCompleted { level: AppState::SunDodge });
    app.update();
    app.update();
    assert_eq!(state(&app), AppState::SatelliteRepair);
    assert!(app.world().resource::<Events<AppExit>>().is_empty());
}

#[test]
fn last_level_exits_the_app() {
    let mut app = campaign_app(AppState::SunDodge, Campaign::single(AppState::SunDodge));
    app.world_mut().send_event(LevelCompleted { level: AppState::SunDodge });
    app.update();
    let exits: Vec<_> = app
        .world()
        .resource::<Events<AppExit>>()
        .iter_current_update_events()
        .cloned()
        .collect();
    assert_eq!(exits, vec![AppExit::Success]);
}
