#![cfg(feature = "debug")]
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::input::{ButtonState, InputPlugin};
use bevy::prelude::*;

use cleardrop::debug::keys::{debug_key_input_system, TOGGLE_OVERLAY};
use cleardrop::debug::DebugState;

#[test]
fn f3_toggles_the_overlay() {
    let mut app = App::new();
    // Insert only what the key system needs.
    app.add_plugins(InputPlugin);
    app.init_resource::<DebugState>();
    app.add_systems(Update, debug_key_input_system);
    assert!(!app.world().resource::<DebugState>().overlay_visible);

    let send = |app: &mut App, state| {
        app.world_mut().send_event(KeyboardInput {
            key_code: TOGGLE_OVERLAY,
            logical_key: Key::F3,
            state,
            text: None,
            repeat: false,
            window: Entity::PLACEHOLDER,
        });
        app.update();
    };
    send(&mut app, ButtonState::Pressed);
    assert!(app.world().resource::<DebugState>().overlay_visible);
    send(&mut app, ButtonState::Released);
    assert!(app.world().resource::<DebugState>().overlay_visible, "release does not toggle");
    send(&mut app, ButtonState::Pressed);
    assert!(!app.world().resource::<DebugState>().overlay_visible);
}
