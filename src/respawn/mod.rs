//! Respawn domain: death flow plugin wiring and public exports.

mod components;
mod events;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::DeathZone;
pub use events::{PlayerDiedEvent, PlayerRespawnedEvent};
pub use resources::{DyingPhase, RespawnConfig, RespawnSequence};

use bevy::prelude::*;

use crate::core::GameState;
use crate::respawn::systems::{
    begin_death_sequence, detect_death_zone_contact, tick_death_sequence,
};

pub struct RespawnPlugin;

impl Plugin for RespawnPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RespawnSequence>()
            .init_resource::<RespawnConfig>()
            .add_message::<PlayerDiedEvent>()
            .add_message::<PlayerRespawnedEvent>()
            .add_systems(
                Update,
                (
                    detect_death_zone_contact.run_if(in_state(GameState::Playing)),
                    begin_death_sequence.run_if(in_state(GameState::Playing)),
                    tick_death_sequence,
                )
                    .chain(),
            );
    }
}
