//! Movement domain: player body, limb bodies, physics layers and ground walking.

mod bootstrap;
mod components;
mod resources;
mod systems;
#[cfg(test)]
mod tests;

pub(crate) use bootstrap::spawn_player_rig;
pub use components::{
    Facing, GameLayer, Ground, LimbBody, Locomotion, Player, Wall, player_collision_layers,
};
pub use resources::WalkInput;

use bevy::prelude::*;

use crate::core::FrameSet;
use crate::movement::systems::{apply_walking, read_walk_input, update_facing};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WalkInput>()
            .add_systems(
                Update,
                read_walk_input
                    .after(crate::input::sample_controls)
                    .in_set(FrameSet::Sample),
            )
            .add_systems(
                Update,
                (update_facing, apply_walking)
                    .chain()
                    .in_set(FrameSet::Locomote),
            );
    }
}
