//! Currency domain: coin flow events.

use bevy::ecs::message::Message;

/// Fired when the player picks up coins.
#[derive(Debug)]
pub struct CoinCollectedEvent {
    pub amount: u32,
    pub total_after: u32,
}

impl Message for CoinCollectedEvent {}

/// Fired when a death penalty removes coins.
#[derive(Debug)]
pub struct CoinsLostEvent {
    pub amount: u32,
    pub total_after: u32,
}

impl Message for CoinsLostEvent {}
