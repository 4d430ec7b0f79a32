//! Input system.
//!
//! [`update_input_state`] reads hardware input from Raylib each frame and
//! writes the results into [`crate::resources::input::InputState`]. The F11
//! key also emits [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent).
use bevy_ecs::prelude::*;
use raylib::RaylibHandle;
use raylib::ffi::{KeyboardKey, MouseButton};

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::InputState;

/// Poll Raylib for keyboard and mouse input and update the `InputState`
/// resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<RaylibHandle>,
    mut commands: Commands,
) {
    let is_key_down = |key: KeyboardKey| rl.is_key_down(key);

    input.up.update(is_key_down(KeyboardKey::KEY_W));
    input.left.update(is_key_down(KeyboardKey::KEY_A));
    input.down.update(is_key_down(KeyboardKey::KEY_S));
    input.right.update(is_key_down(KeyboardKey::KEY_D));
    input.confirm.update(is_key_down(KeyboardKey::KEY_ENTER));
    input.quit.update(is_key_down(KeyboardKey::KEY_Q));
    input.mode_debug.update(is_key_down(KeyboardKey::KEY_F11));

    let mouse = rl.get_mouse_position();
    input.pointer.x = mouse.x;
    input.pointer.y = mouse.y;
    input
        .pointer
        .primary
        .update(rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT));

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
}
