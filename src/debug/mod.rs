//! Debug hotkeys for fast iteration.
//!
//! Ctrl+U unlocks every ability, Ctrl+C grants coins, Ctrl+K kills the
//! player to exercise the death flow.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::abilities::AbilityUnlockRequested;
use crate::currency::{CoinCounter, Wallet};
use crate::respawn::PlayerDiedEvent;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, handle_debug_hotkeys);
    }
}

fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut wallet: ResMut<Wallet>,
    mut counter: ResMut<CoinCounter>,
    mut unlock_events: MessageWriter<AbilityUnlockRequested>,
    mut died_events: MessageWriter<PlayerDiedEvent>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl {
        return;
    }

    // Ctrl+U: Unlock all abilities
    if keyboard.just_pressed(KeyCode::KeyU) {
        for key in ["gravity", "shoot", "dismember"] {
            unlock_events.write(AbilityUnlockRequested {
                key: key.to_string(),
            });
        }
        info!("[DEBUG] Unlocked all abilities");
    }

    // Ctrl+C: Grant 100 coins through the normal counter path
    if keyboard.just_pressed(KeyCode::KeyC) {
        wallet.add(100);
        counter.retarget(wallet.displayed, wallet.total, 0.6, false);
        info!("[DEBUG] Granted 100 coins, total {}", wallet.total);
    }

    // Ctrl+K: Kill the player
    if keyboard.just_pressed(KeyCode::KeyK) {
        died_events.write(PlayerDiedEvent);
        info!("[DEBUG] Death triggered");
    }
}
