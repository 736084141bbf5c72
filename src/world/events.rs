//! World domain: checkpoint events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Fired when a checkpoint becomes the active respawn anchor.
#[derive(Debug)]
pub struct CheckpointActivatedEvent {
    pub checkpoint: Entity,
}

impl Message for CheckpointActivatedEvent {}
