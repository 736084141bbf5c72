//! Respawn domain: life-cycle events.

use bevy::ecs::message::Message;

/// Fired by anything lethal: hazard contact, scripted kills, debug tools.
#[derive(Debug)]
pub struct PlayerDiedEvent;

impl Message for PlayerDiedEvent {}

/// Fired once the player is back under control at the anchor.
#[derive(Debug)]
pub struct PlayerRespawnedEvent;

impl Message for PlayerRespawnedEvent {}
