#[cfg(feature = "debug")]
use super::modes::DebugState;
#[cfg(feature = "debug")]
use crate::interaction::inputmap::{Action, InputMap};
#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
pub fn debug_key_input_system(
    input_map: Option<Res<InputMap>>,
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mouse: Option<Res<ButtonInput<MouseButton>>>,
    mut state: ResMut<DebugState>,
) {
    let (Some(input_map), Some(keys), Some(mouse)) = (input_map, keys, mouse) else {
        return;
    };
    if input_map.just_pressed(Action::ToggleGizmos, &keys, &mouse) {
        state.gizmos_visible = !state.gizmos_visible;
        info!(
            "GIZMOS {} frame={}",
            if state.gizmos_visible { "on" } else { "off" },
            state.frame_counter
        );
    }
}
