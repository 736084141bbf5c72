//! Core domain: top-level game states.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    #[default]
    Playing,
    /// Terminal state reached when the player dies with nothing left to
    /// lose. No restoration runs after entering it.
    GameOver,
}
