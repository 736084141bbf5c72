//! Projectiles domain: pooled shot plugin wiring and public exports.

mod components;
mod events;
mod pool;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::Projectile;
pub use events::FireProjectileEvent;
pub use pool::{ObjectPool, ProjectilePool};
pub use resources::ProjectileTuning;

use bevy::prelude::*;

use crate::projectiles::systems::{
    handle_fire_requests, preallocate_projectiles, reclaim_on_impact, tick_flight_times,
};

pub struct ProjectilesPlugin;

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ProjectilePool>()
            .init_resource::<ProjectileTuning>()
            .add_message::<FireProjectileEvent>()
            .add_systems(Startup, preallocate_projectiles)
            .add_systems(
                Update,
                (handle_fire_requests, tick_flight_times, reclaim_on_impact).chain(),
            );
    }
}
