//! Input domain: physical control identifiers and per-frame control snapshots.

use bevy::prelude::*;

/// A physical control that a limb can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    Key(KeyCode),
    Mouse(MouseButton),
    Gamepad(GamepadButton),
}

impl std::fmt::Display for ControlId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ControlId::Key(key) => write!(f, "key {:?}", key),
            ControlId::Mouse(button) => write!(f, "mouse {:?}", button),
            ControlId::Gamepad(button) => write!(f, "pad {:?}", button),
        }
    }
}

/// Starts the binding sequence when facing a wall.
pub const START_BINDING_KEY: KeyCode = KeyCode::Space;
/// Reloads the scene.
pub const RESET_KEY: KeyCode = KeyCode::Escape;
pub const WALK_LEFT_KEY: KeyCode = KeyCode::ArrowLeft;
pub const WALK_RIGHT_KEY: KeyCode = KeyCode::ArrowRight;
/// Toggles the debug overlay in dev builds.
pub const DEBUG_TOGGLE_KEY: KeyCode = KeyCode::F3;
/// Saves the primary window to disk.
pub const SCREENSHOT_KEY: KeyCode = KeyCode::F12;

/// Controls owned by the game itself; never offered to a limb.
pub const RESERVED_CONTROLS: [ControlId; 6] = [
    ControlId::Key(START_BINDING_KEY),
    ControlId::Key(RESET_KEY),
    ControlId::Key(WALK_LEFT_KEY),
    ControlId::Key(WALK_RIGHT_KEY),
    ControlId::Key(DEBUG_TOGGLE_KEY),
    ControlId::Key(SCREENSHOT_KEY),
];

/// Whether a control belongs to a device class that may be captured.
/// Pointer devices and the unidentified catch-all key never qualify.
pub fn qualifies(control: ControlId) -> bool {
    match control {
        ControlId::Mouse(_) => false,
        ControlId::Key(KeyCode::Unidentified(_)) => false,
        _ => !RESERVED_CONTROLS.contains(&control),
    }
}

/// Snapshot of every held control for the current tick.
/// Insertion order is kept so capture picks candidates deterministically.
#[derive(Resource, Debug, Default, Clone)]
pub struct ControlFrame {
    pressed: Vec<ControlId>,
    just_pressed: Vec<ControlId>,
}

impl ControlFrame {
    pub fn clear(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
    }

    /// Record a held control, flagging it when it went down this tick.
    pub fn record(&mut self, control: ControlId, just_pressed: bool) {
        if !self.pressed.contains(&control) {
            self.pressed.push(control);
        }
        if just_pressed && !self.just_pressed.contains(&control) {
            self.just_pressed.push(control);
        }
    }

    pub fn is_pressed(&self, control: ControlId) -> bool {
        self.pressed.contains(&control)
    }

    pub fn just_pressed(&self, control: ControlId) -> bool {
        self.just_pressed.contains(&control)
    }

    pub fn pressed(&self) -> impl Iterator<Item = ControlId> + '_ {
        self.pressed.iter().copied()
    }

    pub fn just_pressed_controls(&self) -> impl Iterator<Item = ControlId> + '_ {
        self.just_pressed.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.pressed.is_empty()
    }
}
