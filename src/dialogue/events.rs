//! Dialogue domain: conversation events.

use bevy::ecs::message::Message;

/// Request to open the conversation with the given script id.
#[derive(Debug)]
pub struct StartDialogueEvent {
    pub script_id: String,
}

impl Message for StartDialogueEvent {}

/// Fired when a conversation closes.
#[derive(Debug)]
pub struct DialogueClosedEvent {
    pub script_id: String,
}

impl Message for DialogueClosedEvent {}

/// One typing blip. The audio layer picks the clip; pitch varies so long
/// lines do not drone.
#[derive(Debug)]
pub struct TypingBlipEvent {
    pub pitch: f32,
}

impl Message for TypingBlipEvent {}
