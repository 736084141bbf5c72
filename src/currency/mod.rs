//! Currency domain: coin ledger plugin wiring and public exports.

mod components;
mod events;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::CoinPickup;
pub use events::{CoinCollectedEvent, CoinsLostEvent};
pub use resources::{CoinCounter, CoinHudBounce, CurrencyTuning, Wallet};

use bevy::prelude::*;

use crate::core::GameState;
use crate::currency::systems::{
    bounce_on_loss, collect_coin_pickups, tick_coin_counter, tick_hud_bounce,
};

pub struct CurrencyPlugin;

impl Plugin for CurrencyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Wallet>()
            .init_resource::<CoinCounter>()
            .init_resource::<CoinHudBounce>()
            .init_resource::<CurrencyTuning>()
            .add_message::<CoinCollectedEvent>()
            .add_message::<CoinsLostEvent>()
            .add_systems(
                Update,
                (
                    collect_coin_pickups.run_if(in_state(GameState::Playing)),
                    bounce_on_loss,
                    tick_coin_counter,
                    tick_hud_bounce,
                )
                    .chain(),
            );
    }
}
