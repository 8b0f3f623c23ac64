//! Content domain: climbing tuning definitions deserialized from RON.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// What a freshly bound limb must do before the sequencer moves on to the next limb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum AdvanceGate {
    /// Pressing the newly bound control is enough.
    Press,
    /// The press must also land the limb on the wall.
    #[default]
    Grab,
}

impl AdvanceGate {
    /// Whether a limb needs a wall anchor to count as attached.
    pub fn requires_anchor(self) -> bool {
        matches!(self, AdvanceGate::Grab)
    }
}

/// Tuning for binding, climbing and ground locomotion.
/// Distances are world units, times are seconds.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClimbConfig {
    /// Reach of the viewpoint probe that admits the binding sequence.
    pub bind_start_range: f32,
    /// Reach of the forward probe cast from a limb when it grabs.
    pub limb_probe_range: f32,
    /// How far above the probed hold a limb lands when climbing higher.
    pub climb_step: f32,
    /// Reach of the downward probe that detects landing.
    pub floor_probe_range: f32,
    /// Number of limbs that may lose contact at once without falling.
    pub fall_tolerance: usize,
    /// Minimum continuous actuation for a control to be captured.
    pub capture_hold_secs: f32,
    /// Delay after scene start before custom input is considered active.
    pub input_activation_secs: f32,
    pub advance_gate: AdvanceGate,
    /// Exponential rate at which a limb eases towards its target.
    pub limb_follow_rate: f32,
    /// Maximum distance a dangling limb may drift from its rest point.
    pub limb_leash: f32,
    pub walk_speed: f32,
    pub walk_accel: f32,
}

impl Default for ClimbConfig {
    fn default() -> Self {
        Self {
            bind_start_range: 5.0,
            limb_probe_range: 1.5,
            climb_step: 1.0,
            floor_probe_range: 1.0,
            fall_tolerance: 1,
            capture_hold_secs: 0.1,
            input_activation_secs: 0.1,
            advance_gate: AdvanceGate::Grab,
            limb_follow_rate: 12.0,
            limb_leash: 1.2,
            walk_speed: 3.0,
            walk_accel: 20.0,
        }
    }
}
