//! Projectiles domain: components for pooled shots.

use bevy::prelude::*;

/// Marker for a pooled projectile entity.
#[derive(Component, Debug)]
pub struct Projectile;

/// Remaining flight time for an active projectile. Expiry returns the
/// instance to the pool even if it never hit anything.
#[derive(Component, Debug, Default)]
pub struct FlightTime(pub f32);
