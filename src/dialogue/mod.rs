//! Dialogue domain: conversation plugin wiring and public exports.

mod events;
mod loader;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use events::{DialogueClosedEvent, StartDialogueEvent, TypingBlipEvent};
pub use resources::{ActiveDialogue, DialogueRegistry, DialogueScript, DialogueState, TypewriterConfig};

use bevy::prelude::*;

use crate::core::GameState;
use crate::dialogue::loader::setup_dialogue_registry;
use crate::dialogue::systems::{advance_dialogue, start_dialogue, tick_typewriter};

pub struct DialoguePlugin;

impl Plugin for DialoguePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DialogueRegistry>()
            .init_resource::<DialogueState>()
            .init_resource::<TypewriterConfig>()
            .add_message::<StartDialogueEvent>()
            .add_message::<DialogueClosedEvent>()
            .add_message::<TypingBlipEvent>()
            .add_systems(Startup, setup_dialogue_registry)
            .add_systems(
                Update,
                (start_dialogue, tick_typewriter, advance_dialogue)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
