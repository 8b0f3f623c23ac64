//! Input domain: physical controls, start-up deferral and per-frame sampling.

mod activation;
mod control;
mod systems;

pub use activation::InputActivation;
pub use control::{
    ControlFrame, ControlId, DEBUG_TOGGLE_KEY, RESET_KEY, SCREENSHOT_KEY, START_BINDING_KEY,
    WALK_LEFT_KEY, WALK_RIGHT_KEY, qualifies,
};
pub(crate) use systems::sample_controls;

use bevy::prelude::*;

use crate::content::ClimbConfig;
use crate::core::FrameSet;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControlFrame>()
            .init_resource::<InputActivation>()
            .add_systems(Startup, arm_input_activation)
            .add_systems(Update, sample_controls.in_set(FrameSet::Sample));
    }
}

/// Size the activation delay from the loaded config.
fn arm_input_activation(config: Res<ClimbConfig>, mut activation: ResMut<InputActivation>) {
    activation.rearm(config.input_activation_secs);
}
