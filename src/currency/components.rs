//! Currency domain: pickup components.

use bevy::prelude::*;

/// A collectible coin zone. Despawned on pickup.
#[derive(Component, Debug)]
pub struct CoinPickup {
    pub value: u32,
}
