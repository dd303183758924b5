use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use helios::app::state::{AppState, LevelCompleted};
use helios::core::components::Layer;
use helios::core::config::GameConfig;
use helios::core::playfield::FieldPos;
use helios::core::rng::GameRng;
use helios::gameplay::sun_dodge::{DodgePhase, DodgeSession, Plasma, Sun, SunDodgePlugin};
use helios::interaction::inputmap::PlayerIntent;

fn dodge_app(modify: impl FnOnce(&mut GameConfig)) -> App {
    let mut cfg = GameConfig::default();
    modify(&mut cfg);
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.insert_resource(cfg);
    app.insert_resource(GameRng::seeded(7));
    app.insert_state(AppState::SunDodge);
    app.add_plugins(SunDodgePlugin);
    // First update runs OnEnter(SunDodge).
    app.update();
    app
}

/// Same level with plasma spawning switched off.
fn quiet_app() -> App {
    dodge_app(|c| c.sun_dodge.spawn.meter_step = 0)
}

fn tick(app: &mut App, n: u32) {
    for _ in 0..n {
        app.world_mut().run_schedule(FixedUpdate);
    }
}

fn sun(app: &mut App) -> (Sun, Vec2) {
    let world = app.world_mut();
    let mut q = world.query::<(&Sun, &FieldPos)>();
    let (s, p) = q.single(world).expect("exactly one sun");
    (s.clone(), p.0)
}

fn plasmas(app: &mut App) -> Vec<(Plasma, Vec2)> {
    let world = app.world_mut();
    let mut q = world.query::<(&Plasma, &FieldPos)>();
    q.iter(world).map(|(p, pos)| (*p, pos.0)).collect()
}

fn session(app: &App) -> DodgeSession {
    app.world().resource::<DodgeSession>().clone()
}

fn completions(app: &App) -> usize {
    app.world()
        .resource::<Events<LevelCompleted>>()
        .iter_current_update_events()
        .count()
}

fn set_axis(app: &mut App, x: f32) {
    app.world_mut().resource_mut::<PlayerIntent>().axis = Vec2::new(x, 0.0);
}

/// Drop a plasma right onto the sun so the next tick absorbs it.
fn feed_sun(app: &mut App) {
    let (_, pos) = sun(app);
    app.world_mut().spawn((Plasma { radius: 20.0, speed: 0.0 }, FieldPos(pos)));
}

fn set_charge(app: &mut App, charge: u32) {
    let world = app.world_mut();
    let mut q = world.query::<&mut Sun>();
    q.single_mut(world).expect("sun").charge = charge;
}

#[test]
fn sun_starts_at_bottom_centre() {
    let mut app = quiet_app();
    let (s, pos) = sun(&mut app);
    assert_eq!(pos, Vec2::new(350.0, 840.0));
    assert_eq!(s.charge, 0);
    assert!(session(&app).is_charging());
}

#[test]
fn steering_moves_at_base_speed_and_clamps() {
    let mut app = quiet_app();
    set_axis(&mut app, 1.0);
    tick(&mut app, 1);
    assert_eq!(sun(&mut app).1.x, 357.0);
    tick(&mut app, 100);
    assert_eq!(sun(&mut app).1.x, 700.0);
    set_axis(&mut app, -1.0);
    tick(&mut app, 200);
    assert_eq!(sun(&mut app).1.x, 0.0);
}

#[test]
fn plasma_spawns_when_meter_fills() {
    let mut app = dodge_app(|_| {});
    // 4 per tick against an interval of 60: the 15th tick spawns.
    tick(&mut app, 14);
    assert!(plasmas(&mut app).is_empty());
    tick(&mut app, 1);
    let spawned = plasmas(&mut app);
    assert_eq!(spawned.len(), 1);
    let (p, pos) = spawned[0];
    assert!((20.0..=35.0).contains(&p.radius));
    assert!((5.0..=7.0).contains(&p.speed));
    assert!((0.0..=700.0).contains(&pos.x));
    // Spawned at y = -radius and already fell once.
    assert!((pos.y - (-p.radius + p.speed)).abs() < 1e-4);
    assert_eq!(session(&app).spawn_meter, 0);
}

#[test]
fn difficulty_ramps_every_600_ticks() {
    let mut app = quiet_app();
    tick(&mut app, 599);
    assert_eq!(session(&app).spawn_interval, 60);
    tick(&mut app, 1);
    let s = session(&app);
    assert_eq!(s.game_ticks, 600);
    assert_eq!(s.spawn_interval, 58);
    assert!((s.speed_bonus - 0.8).abs() < 1e-6);
    assert_eq!(s.elapsed_secs(60.0), 10);
}

#[test]
fn absorbing_plasma_grows_the_sun() {
    let mut app = quiet_app();
    feed_sun(&mut app);
    tick(&mut app, 1);
    assert!(plasmas(&mut app).is_empty());
    let (s, _) = sun(&mut app);
    assert_eq!(s.charge, 6);
    assert_eq!(s.radius(&GameConfig::default().sun_dodge.sun), 42.0);
}

#[test]
fn missed_plasma_leaves_below_the_playfield() {
    let mut app = quiet_app();
    app.world_mut().spawn((Plasma { radius: 20.0, speed: 10.0 }, FieldPos::new(20.0, 915.0)));
    tick(&mut app, 1);
    assert!(plasmas(&mut app).is_empty());
    assert_eq!(sun(&mut app).0.charge, 0);
}

#[test]
fn flare_then_summary_then_level_complete() {
    let mut app = quiet_app();
    // 138 + 6 = 144 charge -> radius 318, past the 315 threshold.
    set_charge(&mut app, 138);
    feed_sun(&mut app);
    tick(&mut app, 1);
    let (s, pos_before) = sun(&mut app);
    assert!(s.flaring);
    assert_eq!(s.charge, 0);
    let sess = session(&app);
    assert_eq!(sess.flare_cycles, 1);
    assert!(matches!(sess.phase, DodgePhase::Flare { .. }));

    // Frozen during the flare.
    set_axis(&mut app, 1.0);
    tick(&mut app, 178);
    assert!(matches!(session(&app).phase, DodgePhase::Flare { .. }));
    assert_eq!(sun(&mut app).1, pos_before);
    tick(&mut app, 1);
    assert_eq!(session(&app).phase, DodgePhase::GameOver { ticks: 0 });

    tick(&mut app, 299);
    assert_eq!(completions(&app), 0);
    tick(&mut app, 1);
    assert_eq!(completions(&app), 1);
    tick(&mut app, 30);
    assert_eq!(completions(&app), 1, "completion is sent once");
}

#[test]
fn restart_only_from_summary_screen() {
    let mut app = quiet_app();
    app.world_mut().resource_mut::<PlayerIntent>().restart_presses = 1;
    set_charge(&mut app, 12);
    tick(&mut app, 1);
    assert_eq!(sun(&mut app).0.charge, 12, "restart ignored while charging");
    assert_eq!(app.world().resource::<PlayerIntent>().restart_presses, 0);

    set_charge(&mut app, 138);
    feed_sun(&mut app);
    tick(&mut app, 180);
    assert!(matches!(session(&app).phase, DodgePhase::GameOver { .. }));
    app.world_mut().spawn((Plasma { radius: 20.0, speed: 1.0 }, FieldPos::new(10.0, 10.0)));

    app.world_mut().resource_mut::<PlayerIntent>().restart_presses = 1;
    tick(&mut app, 1);
    let s = session(&app);
    assert!(s.is_charging());
    assert_eq!(s.flare_cycles, 0);
    assert_eq!(s.game_ticks, 1);
    let (sun_now, pos) = sun(&mut app);
    assert_eq!(sun_now, Sun::default());
    assert_eq!(pos, Vec2::new(350.0, 840.0));
    assert!(plasmas(&mut app).is_empty());
}

#[test]
fn zero_summary_hold_still_completes() {
    let mut app = dodge_app(|c| {
        c.sun_dodge.spawn.meter_step = 0;
        c.sun_dodge.flare.game_over_ticks = 0;
    });
    set_charge(&mut app, 138);
    feed_sun(&mut app);
    tick(&mut app, 180);
    assert_eq!(session(&app).phase, DodgePhase::GameOver { ticks: 0 });
    assert_eq!(completions(&app), 0);
    tick(&mut app, 1);
    assert_eq!(completions(&app), 1);
    tick(&mut app, 10);
    assert_eq!(completions(&app), 1);
}

#[test]
fn sun_draws_over_plasmas() {
    let mut app = dodge_app(|_| {});
    tick(&mut app, 15);
    let world = app.world_mut();
    let sun_layer = world.query_filtered::<&Layer, With<Sun>>().single(world).expect("sun").0;
    let plasma_layer = world.query_filtered::<&Layer, With<Plasma>>().single(world).expect("one plasma").0;
    assert!(sun_layer > plasma_layer);
}
