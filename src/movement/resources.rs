//! Movement domain: per-frame walking input.

use bevy::prelude::*;

#[derive(Resource, Debug, Default)]
pub struct WalkInput {
    /// -1 walks left, 1 walks right.
    pub axis: f32,
}
