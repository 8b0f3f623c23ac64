//! Movement domain: input sampling for walking.

use bevy::prelude::*;

use crate::input::{ControlFrame, ControlId, WALK_LEFT_KEY, WALK_RIGHT_KEY};
use crate::movement::WalkInput;

/// Reads the sampled frame so walking also waits out the input activation delay.
pub(crate) fn read_walk_input(frame: Res<ControlFrame>, mut input: ResMut<WalkInput>) {
    let mut x = 0.0;
    if frame.is_pressed(ControlId::Key(WALK_LEFT_KEY)) {
        x -= 1.0;
    }
    if frame.is_pressed(ControlId::Key(WALK_RIGHT_KEY)) {
        x += 1.0;
    }
    input.axis = x;
}
