use std::fs;

use helios::core::config::GameConfig;
use tempfile::tempdir;

#[test]
fn shipped_game_ron_matches_builtin_defaults() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/config/game.ron");
    let cfg = GameConfig::load_from_file(&path).expect("shipped config parses");
    assert_eq!(cfg, GameConfig::default());
    assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
}

#[test]
fn later_layers_override_earlier_keys() {
    let dir = tempdir().unwrap();
    let base = dir.path().join("game.ron");
    let local = dir.path().join("game.local.ron");
    fs::write(&base, "(seed: Some(3), sun_dodge: (sun: (base_speed: 9.0, base_radius: 25.0)))").unwrap();
    fs::write(&local, "(sun_dodge: (sun: (base_speed: 11.0)), satellite_repair: (astronaut: (lives: 5)))").unwrap();

    let (cfg, used, errors) = GameConfig::load_layered([&base, &local]);
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(used.len(), 2);
    assert_eq!(cfg.seed, Some(3));
    assert_eq!(cfg.sun_dodge.sun.base_speed, 11.0);
    // Sibling key from the base layer survives the overlay.
    assert_eq!(cfg.sun_dodge.sun.base_radius, 25.0);
    assert_eq!(cfg.satellite_repair.astronaut.lives, 5);
    assert_eq!(cfg.satellite_repair.astronaut.thrust, 0.5);
}

#[test]
fn broken_and_missing_layers_are_reported_not_fatal() {
    let dir = tempdir().unwrap();
    let good = dir.path().join("good.ron");
    let bad = dir.path().join("bad.ron");
    let missing = dir.path().join("missing.ron");
    fs::write(&good, "(tick_hz: 30.0)").unwrap();
    fs::write(&bad, "(tick_hz: ").unwrap();

    let (cfg, used, errors) = GameConfig::load_layered([&good, &bad, &missing]);
    assert_eq!(used, vec![good.display().to_string()]);
    assert_eq!(errors.len(), 2, "{errors:?}");
    assert!(errors.iter().any(|e| e.contains("parse error")));
    assert!(errors.iter().any(|e| e.contains("read error")));
    assert_eq!(cfg.tick_hz, 30.0);
}

#[test]
fn no_layers_means_defaults() {
    let dir = tempdir().unwrap();
    let (cfg, used, errors) = GameConfig::load_layered([dir.path().join("nope.ron")]);
    assert!(used.is_empty());
    assert_eq!(errors.len(), 1);
    assert_eq!(cfg, GameConfig::default());
}

#[test]
fn validate_reports_unusable_values() {
    let mut cfg = GameConfig::default();
    cfg.satellite_repair.astronaut.friction = 1.5;
    cfg.sun_dodge.spawn.min_interval = 90;
    cfg.satellite_repair.panels.positions.clear();
    let warnings = cfg.validate();
    assert!(warnings.iter().any(|w| w.contains("friction")), "{warnings:?}");
    assert!(warnings.iter().any(|w| w.contains("min_interval")), "{warnings:?}");
    assert!(warnings.iter().any(|w| w.contains("positions empty")), "{warnings:?}");
}
