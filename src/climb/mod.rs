//! Climb domain: binding sequence, climb state machine and the climber tick.

mod events;
mod fsm;
mod player;
mod probe;
mod sequencer;
mod systems;

pub use events::ClimbStateChanged;
pub use fsm::ClimbState;
pub use player::Climber;

use bevy::prelude::*;

use crate::climb::systems::{
    apply_climb_transitions, follow_anchored_limbs, read_back_limb_bodies, run_climb_tick,
    sync_limb_bodies,
};
use crate::core::FrameSet;

pub struct ClimbPlugin;

impl Plugin for ClimbPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ClimbStateChanged>().add_systems(
            Update,
            (
                read_back_limb_bodies,
                run_climb_tick,
                apply_climb_transitions,
                follow_anchored_limbs,
                sync_limb_bodies,
            )
                .chain()
                .in_set(FrameSet::Climb),
        );
    }
}
