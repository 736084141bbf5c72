//! Projectiles domain: tuning resource.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct ProjectileTuning {
    pub speed: f32,
    /// Fire-point offset from the shooter's center, mirrored by facing.
    pub fire_offset: Vec2,
    pub lifetime: f32,
    pub radius: f32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            speed: 520.0,
            fire_offset: Vec2::new(16.0, 6.0),
            lifetime: 1.5,
            radius: 5.0,
        }
    }
}
