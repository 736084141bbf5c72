//! Abilities domain: unlock flow and select-overlay plugin wiring.

mod events;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use events::{AbilitySelectedEvent, AbilityUnlockRequested, AbilityUnlockedEvent};
pub use resources::{AbilityKind, AbilityMenu, AbilityState, ArmedAbility};

use bevy::prelude::*;

use crate::abilities::systems::{
    close_ability_menu, confirm_ability_selection, navigate_ability_menu, open_ability_menu,
    process_unlock_requests,
};
use crate::core::GameState;

pub struct AbilitiesPlugin;

impl Plugin for AbilitiesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AbilityState>()
            .init_resource::<ArmedAbility>()
            .init_resource::<AbilityMenu>()
            .add_message::<AbilityUnlockRequested>()
            .add_message::<AbilityUnlockedEvent>()
            .add_message::<AbilitySelectedEvent>()
            .add_systems(
                Update,
                (
                    process_unlock_requests,
                    open_ability_menu,
                    navigate_ability_menu,
                    confirm_ability_selection,
                    close_ability_menu,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
