//! Debug overlay for climb tuning (dev-tools builds).
//!
//! F3 toggles a text overlay with the climb state, contact count, binding
//! phase and each limb's control and grip.

#[cfg(test)]
mod tests;
mod ui;

use bevy::prelude::*;

use crate::climb::Climber;
use crate::core::FrameSet;
use crate::debug::ui::{DebugInfoOverlay, describe_climber, spawn_debug_info_overlay};
use crate::input::{ControlFrame, ControlId, DEBUG_TOGGLE_KEY};
use crate::movement::Player;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the info overlay is shown
    pub show_info: bool,
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (toggle_debug_info, update_debug_info_overlay)
                .chain()
                .in_set(FrameSet::Present),
        );
    }
}

/// Toggle the info overlay with F3
fn toggle_debug_info(
    mut commands: Commands,
    frame: Res<ControlFrame>,
    mut debug_state: ResMut<DebugState>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !frame.just_pressed(ControlId::Key(DEBUG_TOGGLE_KEY)) {
        return;
    }

    debug_state.show_info = !debug_state.show_info;
    info!(
        "[DEBUG] Debug Info {}",
        if debug_state.show_info { "ON" } else { "OFF" }
    );

    if debug_state.show_info {
        spawn_debug_info_overlay(&mut commands);
    } else {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
    }
}

fn update_debug_info_overlay(
    debug_state: Res<DebugState>,
    player_query: Query<(&Climber, &Transform), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        return;
    }

    if let (Ok((climber, transform)), Ok(mut text)) =
        (player_query.single(), overlay_query.single_mut())
    {
        let wanted = describe_climber(climber, transform.translation.truncate());
        if text.as_str() != wanted {
            **text = wanted;
        }
    }
}
