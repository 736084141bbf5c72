//! Core domain: game states, time flow, and camera plugin wiring.

mod resources;
mod state;
mod systems;

#[cfg(test)]
mod tests;

pub use resources::{CameraFollow, RespawnAnchor, TimeFreeze};
pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::{camera_follow, setup_camera, sync_time_freeze};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<TimeFreeze>()
            .init_resource::<CameraFollow>()
            .init_resource::<RespawnAnchor>()
            .add_systems(Startup, setup_camera)
            .add_systems(PreUpdate, sync_time_freeze)
            .add_systems(Update, camera_follow);
    }
}
