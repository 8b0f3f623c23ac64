//! Input domain: start-up deferral before custom input is honoured.

use bevy::prelude::*;
use std::time::Duration;

/// Holds custom input off for a short time after the scene starts so that
/// keys still down from launching or resetting are not read as intent.
#[derive(Resource, Debug)]
pub struct InputActivation {
    pub timer: Timer,
}

impl Default for InputActivation {
    fn default() -> Self {
        Self::new(0.1)
    }
}

impl InputActivation {
    pub fn new(delay_secs: f32) -> Self {
        Self {
            timer: Timer::from_seconds(delay_secs, TimerMode::Once),
        }
    }

    pub fn tick(&mut self, delta: Duration) {
        self.timer.tick(delta);
    }

    pub fn is_active(&self) -> bool {
        self.timer.remaining_secs() == 0.0
    }

    /// Re-arm the delay, e.g. after a scene reset.
    pub fn rearm(&mut self, delay_secs: f32) {
        *self = Self::new(delay_secs);
    }
}
