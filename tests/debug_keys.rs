#![cfg(feature = "debug")]
use bevy::prelude::*;
use helios::debug::keys::debug_key_input_system;
use helios::debug::DebugState;
use helios::interaction::inputmap::InputMap;

#[test]
fn f3_toggles_collision_gizmos() {
    let mut app = App::new();
    // Insert only the resources we need.
    app.insert_resource(ButtonInput::<KeyCode>::default());
    app.insert_resource(ButtonInput::<MouseButton>::default());
    app.init_resource::<InputMap>();
    app.init_resource::<DebugState>();
    app.add_systems(Update, debug_key_input_system);

    assert!(!app.world().resource::<DebugState>().gizmos_visible);
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().press(KeyCode::F3);
    app.update();
    assert!(app.world().resource::<DebugState>().gizmos_visible);

    // Held key is not a new press.
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().clear();
    app.update();
    assert!(app.world().resource::<DebugState>().gizmos_visible);

    {
        let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keys.release(KeyCode::F3);
        keys.clear();
        keys.press(KeyCode::F3);
    }
    app.update();
    assert!(!app.world().resource::<DebugState>().gizmos_visible);
}
