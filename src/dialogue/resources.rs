//! Dialogue domain: script registry and active-conversation state.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::sequencer::{Typewriter, TypewriterTiming};

/// One authored conversation, loaded from RON.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DialogueScript {
    pub id: String,
    pub lines: Vec<String>,
    /// Ability key granted when the conversation closes.
    pub unlock_on_end: Option<String>,
}

/// All scripts known to the session, keyed by id.
#[derive(Resource, Debug, Default)]
pub struct DialogueRegistry {
    pub scripts: HashMap<String, DialogueScript>,
}

/// Reveal pacing, tunable without touching the typewriter itself.
#[derive(Resource, Debug, Default)]
pub struct TypewriterConfig {
    pub timing: TypewriterTiming,
}

/// The conversation currently on screen, if any.
#[derive(Debug)]
pub struct ActiveDialogue {
    pub script_id: String,
    pub lines: Vec<String>,
    pub line_index: usize,
    pub typewriter: Typewriter,
    pub unlock_on_end: Option<String>,
}

impl ActiveDialogue {
    pub fn from_script(script: &DialogueScript) -> Self {
        let first_line = script.lines.first().map(String::as_str).unwrap_or("");
        Self {
            script_id: script.id.clone(),
            lines: script.lines.clone(),
            line_index: 0,
            typewriter: Typewriter::new(first_line),
            unlock_on_end: script.unlock_on_end.clone(),
        }
    }

    /// Move to the next line, resetting the reveal. Returns false when the
    /// conversation has no lines left.
    pub fn advance_line(&mut self) -> bool {
        if self.line_index + 1 >= self.lines.len() {
            return false;
        }
        self.line_index += 1;
        self.typewriter = Typewriter::new(&self.lines[self.line_index]);
        true
    }
}

/// Single place every blocker asks about dialogue, whatever component is
/// presenting it.
#[derive(Resource, Debug, Default)]
pub struct DialogueState {
    pub active: Option<ActiveDialogue>,
}

impl DialogueState {
    pub fn has_active_dialogue(&self) -> bool {
        self.active.is_some()
    }
}
