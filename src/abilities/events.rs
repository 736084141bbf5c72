//! Abilities domain: unlock and selection events.

use bevy::ecs::message::Message;

use crate::abilities::resources::AbilityKind;

/// Request to unlock an ability by string key. Unknown keys are logged and
/// dropped, never fatal.
#[derive(Debug)]
pub struct AbilityUnlockRequested {
    pub key: String,
}

impl Message for AbilityUnlockRequested {}

/// Fired when an ability transitions to unlocked for the first time.
#[derive(Debug)]
pub struct AbilityUnlockedEvent {
    pub kind: AbilityKind,
}

impl Message for AbilityUnlockedEvent {}

/// Fired when the player confirms an ability in the select overlay.
#[derive(Debug)]
pub struct AbilitySelectedEvent {
    pub kind: AbilityKind,
}

impl Message for AbilitySelectedEvent {}
