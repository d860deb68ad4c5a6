use super::stats::DebugState;
use bevy::prelude::*;

pub const TOGGLE_OVERLAY: KeyCode = KeyCode::F3;

pub fn debug_key_input_system(keys: Option<Res<ButtonInput<KeyCode>>>, mut state: ResMut<DebugState>) {
    let Some(keys) = keys else {
        return;
    };
    if keys.just_pressed(TOGGLE_OVERLAY) {
        state.overlay_visible = !state.overlay_visible;
        debug!(target: "debug", "overlay visible={}", state.overlay_visible);
    }
}
