//! Climb domain: messages emitted by the climber tick.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::climb::ClimbState;

/// Fired once per climb state transition, in the order they happened.
#[derive(Debug, Clone, Copy)]
pub struct ClimbStateChanged {
    pub entity: Entity,
    pub from: ClimbState,
    pub to: ClimbState,
}

impl Message for ClimbStateChanged {}
