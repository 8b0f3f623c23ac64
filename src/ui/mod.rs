//! UI domain: binding prompt and score HUD.

mod prompt;
mod score;
#[cfg(test)]
mod tests;

pub use prompt::{Prompt, edit_prompt};
pub use score::Score;

use bevy::prelude::*;

use crate::core::FrameSet;
use crate::ui::prompt::{spawn_prompt_ui, update_prompt_ui};
use crate::ui::score::{spawn_score_ui, tick_score, update_score_ui};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Prompt>()
            .init_resource::<Score>()
            .add_systems(Startup, (spawn_prompt_ui, spawn_score_ui))
            .add_systems(
                Update,
                (tick_score, update_prompt_ui, update_score_ui)
                    .chain()
                    .in_set(FrameSet::Present),
            );
    }
}
