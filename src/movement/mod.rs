//! Movement domain: player control plugin wiring and public exports.

mod bootstrap;
mod components;
mod events;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{
    AnimationParams, BodyProxy, CollisionFocus, ControlMode, Facing, GameLayer, GravityOrientation,
    HeadProxy, MoveState, Player,
};
pub use events::{DismemberRequested, RecomposeRequested};
pub use resources::{ControlInput, MovementTuning, ProxyRig};

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    apply_gravity, apply_head_gravity, apply_hop, apply_horizontal_movement,
    enforce_movement_lock, freeze_during_dialogue, handle_dismember, handle_recompose,
    probe_ground, read_input, sync_animation_params, sync_visual_orientation,
    trigger_armed_action, update_facing, update_timers,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<ControlInput>()
            .init_resource::<ProxyRig>()
            .add_message::<DismemberRequested>()
            .add_message::<RecomposeRequested>()
            .add_systems(Startup, spawn_player)
            .add_systems(PreUpdate, read_input)
            .add_systems(
                Update,
                (
                    update_timers,
                    probe_ground,
                    apply_horizontal_movement,
                    apply_hop,
                    trigger_armed_action,
                    handle_dismember,
                    handle_recompose,
                    apply_gravity,
                    apply_head_gravity,
                    enforce_movement_lock,
                    update_facing,
                    sync_visual_orientation,
                    sync_animation_params,
                    freeze_during_dialogue,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
