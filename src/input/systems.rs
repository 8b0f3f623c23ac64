//! Input domain: sampling physical devices into the control frame.

use bevy::prelude::*;

use crate::input::{ControlFrame, ControlId, InputActivation};

/// Rebuild the control frame from every keyboard key, mouse button and
/// gamepad button currently held. The frame stays empty until input is active.
pub(crate) fn sample_controls(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    gamepads: Query<&Gamepad>,
    mut activation: ResMut<InputActivation>,
    mut frame: ResMut<ControlFrame>,
) {
    let was_active = activation.is_active();
    activation.tick(time.delta());
    frame.clear();

    if !activation.is_active() {
        return;
    }
    if !was_active {
        debug!("Custom input active");
    }

    for key in keyboard.get_pressed() {
        frame.record(ControlId::Key(*key), keyboard.just_pressed(*key));
    }
    for button in mouse.get_pressed() {
        frame.record(ControlId::Mouse(*button), mouse.just_pressed(*button));
    }
    for gamepad in &gamepads {
        for button in gamepad.get_pressed() {
            frame.record(ControlId::Gamepad(*button), gamepad.just_pressed(*button));
        }
    }
}
