//! Core domain: frame ordering, camera, scene setup and reset.

mod events;
mod systems;

pub use events::ResetSceneEvent;

use bevy::prelude::*;

use crate::core::systems::{
    handle_reset, request_reset, setup_camera, spawn_player, spawn_scene, take_screenshot,
    track_player_camera,
};

/// Per-frame phases, run in this order.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Device sampling and scene commands (reset, screenshot).
    Sample,
    /// Climber tick, state side effects and limb body sync.
    Climb,
    /// Ground walking.
    Locomote,
    /// HUD and camera.
    Present,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ResetSceneEvent>()
            .configure_sets(
                Update,
                (
                    FrameSet::Sample,
                    FrameSet::Climb,
                    FrameSet::Locomote,
                    FrameSet::Present,
                )
                    .chain(),
            )
            .add_systems(Startup, (setup_camera, spawn_scene, spawn_player))
            .add_systems(
                Update,
                (request_reset, handle_reset)
                    .chain()
                    .after(crate::input::sample_controls)
                    .in_set(FrameSet::Sample),
            )
            .add_systems(
                Update,
                take_screenshot
                    .after(crate::input::sample_controls)
                    .in_set(FrameSet::Sample),
            )
            .add_systems(Update, track_player_camera.in_set(FrameSet::Present));
    }
}
