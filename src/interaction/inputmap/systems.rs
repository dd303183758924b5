// This file is part of HELIOS.
// Copyright (C) 2025 HELIOS contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Device state -> `PlayerIntent`.
use bevy::prelude::*;
use super::types::*;

pub fn system_collect_intent(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    input_map: Res<InputMap>,
    mut intent: ResMut<PlayerIntent>,
) {
    let held = |a: Action| if input_map.pressed(a, &keyboard, &mouse_buttons) { 1.0 } else { 0.0 };
    intent.axis = Vec2::new(held(Action::MoveRight) - held(Action::MoveLeft), held(Action::MoveDown) - held(Action::MoveUp));
    if input_map.just_pressed(Action::Mash, &keyboard, &mouse_buttons) { intent.mash_presses += 1; }
    if input_map.just_pressed(Action::Restart, &keyboard, &mouse_buttons) { intent.restart_presses += 1; }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let mut app = App::new();
        app.init_resource::<ButtonInput<KeyCode>>();
        app.init_resource::<ButtonInput<MouseButton>>();
        app.init_resource::<InputMap>();
        app.init_resource::<PlayerIntent>();
        app.add_systems(Update, system_collect_intent);
        app
    }

    #[test]
    fn opposite_directions_cancel() {
        let mut app = app();
        {
            let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
            keys.press(KeyCode::ArrowLeft);
            keys.press(KeyCode::ArrowRight);
            keys.press(KeyCode::ArrowUp);
        }
        app.update();
        assert_eq!(app.world().resource::<PlayerIntent>().axis, Vec2::new(0.0, -1.0));
    }

    #[test]
    fn presses_accumulate_until_taken() {
        let mut app = app();
        for _ in 0..3 {
            {
                let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
                keys.release(KeyCode::Space);
                keys.clear();
                keys.press(KeyCode::Space);
            }
            app.update();
        }
        let mut intent = app.world_mut().resource_mut::<PlayerIntent>();
        assert_eq!(intent.take_mash(), 3);
        assert_eq!(intent.take_mash(), 0);
        assert!(intent.take_restart());
        assert!(!intent.take_restart());
    }
}
