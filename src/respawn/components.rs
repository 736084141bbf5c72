//! Respawn domain: lethal zone marker.

use bevy::prelude::*;

/// Contact with one of these kills the player (spike pits, fall zones).
#[derive(Component, Debug)]
pub struct DeathZone;
