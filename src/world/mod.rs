//! World domain: level content plugin wiring and public exports.

mod components;
mod events;
mod spawn;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{
    AbilityShrine, Checkpoint, CheckpointFlag, CutsceneTrigger, FlagState, Ground, RecomposeZone,
    Wall,
};
pub use events::CheckpointActivatedEvent;

use bevy::prelude::*;

use crate::core::GameState;
use crate::world::spawn::spawn_level;
use crate::world::systems::{
    activate_checkpoints, animate_checkpoint_flags, detect_recompose_zones,
    fire_cutscene_triggers, grant_shrine_abilities,
};

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<CheckpointActivatedEvent>()
            .add_systems(Startup, spawn_level)
            .add_systems(
                Update,
                (
                    activate_checkpoints,
                    animate_checkpoint_flags,
                    fire_cutscene_triggers,
                    grant_shrine_abilities,
                    detect_recompose_zones,
                )
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
