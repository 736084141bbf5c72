//! Dialogue domain: conversation flow and reveal driving.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use rand::Rng;

use crate::abilities::AbilityUnlockRequested;
use crate::core::TimeFreeze;
use crate::dialogue::events::{DialogueClosedEvent, StartDialogueEvent, TypingBlipEvent};
use crate::dialogue::resources::{ActiveDialogue, DialogueRegistry, DialogueState, TypewriterConfig};
use crate::movement::ControlInput;

const FREEZE_SOURCE: &str = "dialogue";

/// Open requested conversations. A request while one is already on
/// screen is dropped; unknown script ids are warned and dropped.
pub(crate) fn start_dialogue(
    mut requests: MessageReader<StartDialogueEvent>,
    registry: Res<DialogueRegistry>,
    mut state: ResMut<DialogueState>,
    mut freeze: ResMut<TimeFreeze>,
) {
    for request in requests.read() {
        if state.has_active_dialogue() {
            debug!(
                "[DIALOGUE] Ignoring '{}', a conversation is already active",
                request.script_id
            );
            continue;
        }
        let Some(script) = registry.scripts.get(&request.script_id) else {
            warn!("[DIALOGUE] Unknown script id '{}'", request.script_id);
            continue;
        };

        state.active = Some(ActiveDialogue::from_script(script));
        freeze.freeze(FREEZE_SOURCE);
        info!("[DIALOGUE] Started '{}'", request.script_id);
    }
}

/// Reveal the current line on the real clock, so typing keeps moving
/// while game time is frozen.
pub(crate) fn tick_typewriter(
    real_time: Res<Time<Real>>,
    config: Res<TypewriterConfig>,
    mut state: ResMut<DialogueState>,
    mut blip_events: MessageWriter<TypingBlipEvent>,
) {
    let Some(active) = state.active.as_mut() else {
        return;
    };

    let tick = active
        .typewriter
        .advance(real_time.delta_secs(), &config.timing);
    for _ in 0..tick.blips {
        blip_events.write(TypingBlipEvent {
            pitch: rand::rng().random_range(0.9..1.1),
        });
    }
}

/// Advance input: skip the reveal while it is running, otherwise move to
/// the next line or close the conversation.
pub(crate) fn advance_dialogue(
    input: Res<ControlInput>,
    mut state: ResMut<DialogueState>,
    mut freeze: ResMut<TimeFreeze>,
    mut closed_events: MessageWriter<DialogueClosedEvent>,
    mut unlock_events: MessageWriter<AbilityUnlockRequested>,
) {
    if !input.advance_just_pressed {
        return;
    }
    let Some(active) = state.active.as_mut() else {
        return;
    };

    if !active.typewriter.is_complete() {
        active.typewriter.skip_to_end();
        return;
    }

    if active.advance_line() {
        return;
    }

    // Conversation over.
    let Some(finished) = state.active.take() else {
        return;
    };
    freeze.thaw(FREEZE_SOURCE);
    if let Some(key) = finished.unlock_on_end {
        unlock_events.write(AbilityUnlockRequested { key });
    }
    closed_events.write(DialogueClosedEvent {
        script_id: finished.script_id.clone(),
    });
    info!("[DIALOGUE] Closed '{}'", finished.script_id);
}
