//! Core domain: scene flow events.

use bevy::ecs::message::Message;

/// Event fired to tear the climber down and respawn it from scratch
#[derive(Debug, Default)]
pub struct ResetSceneEvent;

impl Message for ResetSceneEvent {}
