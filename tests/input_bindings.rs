use bevy::prelude::*;
use helios::interaction::inputmap::parse::parse_input_toml;
use helios::interaction::inputmap::types::{Action, InputMap, RawBindingToken};

#[test]
fn shipped_input_toml_binds_every_action() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/config/input.toml");
    let raw = std::fs::read_to_string(path).expect("input.toml present");
    let parsed = parse_input_toml(&raw);
    assert!(parsed.errors.is_empty(), "{:?}", parsed.errors);
    for action in Action::ALL {
        assert!(!parsed.input_map.tokens(action).is_empty(), "{} unbound", action.name());
        assert!(parsed.input_map.descriptions.contains_key(&action), "{} undocumented", action.name());
    }
    assert_eq!(parsed.input_map.tokens(Action::Mash), &[RawBindingToken::Key(KeyCode::Space)]);
}

#[test]
fn mouse_binding_counts_as_press() {
    let parsed = parse_input_toml("[bindings]\nMash = [\"Mouse:Left\", \"Key:J\"]\n");
    assert!(parsed.errors.is_empty(), "{:?}", parsed.errors);
    let map: InputMap = parsed.input_map;
    let keys = ButtonInput::<KeyCode>::default();
    let mut mouse = ButtonInput::<MouseButton>::default();
    assert!(!map.just_pressed(Action::Mash, &keys, &mouse));
    mouse.press(MouseButton::Left);
    assert!(map.just_pressed(Action::Mash, &keys, &mouse));
    assert!(map.pressed(Action::Mash, &keys, &mouse));
    // Space is no longer a Mash key once rebound.
    let mut keys = ButtonInput::<KeyCode>::default();
    keys.press(KeyCode::Space);
    let idle = ButtonInput::<MouseButton>::default();
    assert!(!map.just_pressed(Action::Mash, &keys, &idle));
    assert!(map.just_pressed(Action::Restart, &keys, &idle));
}
