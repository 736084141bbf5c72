//! Projectiles domain: events for shot requests.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Request to fire one projectile from the given origin toward the given
/// horizontal direction (+1 right, -1 left).
#[derive(Debug)]
pub struct FireProjectileEvent {
    pub origin: Vec2,
    pub direction: f32,
}

impl Message for FireProjectileEvent {}
