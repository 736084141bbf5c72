//! Abilities domain: unlock processing and the select-overlay flow.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::abilities::events::{AbilitySelectedEvent, AbilityUnlockRequested, AbilityUnlockedEvent};
use crate::abilities::resources::{AbilityKind, AbilityMenu, AbilityState, ArmedAbility};
use crate::core::TimeFreeze;
use crate::dialogue::DialogueState;
use crate::movement::{ControlInput, ControlMode, DismemberRequested, Player};

const FREEZE_SOURCE: &str = "ability_menu";

/// Apply unlock requests from pickups and dialogue scripts.
pub(crate) fn process_unlock_requests(
    mut requests: MessageReader<AbilityUnlockRequested>,
    mut state: ResMut<AbilityState>,
    mut unlocked_events: MessageWriter<AbilityUnlockedEvent>,
) {
    for request in requests.read() {
        let Some(kind) = AbilityKind::from_key(&request.key) else {
            warn!("[ABILITY] Ignoring unknown ability key '{}'", request.key);
            continue;
        };

        if state.unlock(kind) {
            info!("[ABILITY] Unlocked {}", kind.label());
            unlocked_events.write(AbilityUnlockedEvent { kind });
        }
    }
}

/// Open the select overlay while the select key is held. Re-entry during
/// the same held press is latched out, and the overlay never opens over an
/// active dialogue or outside normal control.
pub(crate) fn open_ability_menu(
    input: Res<ControlInput>,
    state: Res<AbilityState>,
    dialogue: Res<DialogueState>,
    mut menu: ResMut<AbilityMenu>,
    mut freeze: ResMut<TimeFreeze>,
    mut player_query: Query<&mut ControlMode, With<Player>>,
) {
    if menu.open || menu.reopen_latch || !input.select_held {
        return;
    }
    if !state.any_unlocked() || dialogue.has_active_dialogue() {
        return;
    }
    let Ok(mut mode) = player_query.single_mut() else {
        return;
    };
    if *mode != ControlMode::Normal {
        return;
    }

    menu.open = true;
    menu.cursor = 0;
    *mode = ControlMode::SelectingAbility;
    freeze.freeze(FREEZE_SOURCE);
    debug!("[ABILITY] Select overlay opened");
}

/// Move the cursor across unlocked entries.
pub(crate) fn navigate_ability_menu(
    input: Res<ControlInput>,
    state: Res<AbilityState>,
    mut menu: ResMut<AbilityMenu>,
) {
    if !menu.open {
        return;
    }
    let count = state.unlocked().len();
    if count == 0 {
        return;
    }

    if input.cursor_right_just_pressed {
        menu.cursor = (menu.cursor + 1) % count;
    }
    if input.cursor_left_just_pressed {
        menu.cursor = (menu.cursor + count - 1) % count;
    }
}

/// Confirm the hovered ability: arm it (shoot, gravity flip) or perform it
/// immediately (dismember), then return control.
pub(crate) fn confirm_ability_selection(
    input: Res<ControlInput>,
    state: Res<AbilityState>,
    mut menu: ResMut<AbilityMenu>,
    mut armed: ResMut<ArmedAbility>,
    mut freeze: ResMut<TimeFreeze>,
    mut selected_events: MessageWriter<AbilitySelectedEvent>,
    mut dismember_events: MessageWriter<DismemberRequested>,
    mut player_query: Query<&mut ControlMode, With<Player>>,
) {
    if !menu.open || !input.confirm_just_pressed {
        return;
    }
    let unlocked = state.unlocked();
    let Some(kind) = unlocked.get(menu.cursor).copied() else {
        return;
    };

    match kind {
        AbilityKind::Shoot | AbilityKind::GravityFlip => {
            armed.0 = Some(kind);
            info!("[ABILITY] Armed {}", kind.label());
        }
        AbilityKind::Dismember => {
            dismember_events.write(DismemberRequested);
        }
    }
    selected_events.write(AbilitySelectedEvent { kind });

    menu.open = false;
    menu.reopen_latch = true;
    freeze.thaw(FREEZE_SOURCE);
    if let Ok(mut mode) = player_query.single_mut() {
        *mode = ControlMode::Normal;
    }
}

/// Close the overlay when the select key is released, and clear the
/// reopen latch once the key is fully up.
pub(crate) fn close_ability_menu(
    input: Res<ControlInput>,
    mut menu: ResMut<AbilityMenu>,
    mut freeze: ResMut<TimeFreeze>,
    mut player_query: Query<&mut ControlMode, With<Player>>,
) {
    if menu.open && !input.select_held {
        menu.open = false;
        freeze.thaw(FREEZE_SOURCE);
        if let Ok(mut mode) = player_query.single_mut()
            && *mode == ControlMode::SelectingAbility
        {
            *mode = ControlMode::Normal;
        }
        debug!("[ABILITY] Select overlay closed");
    }

    if !input.select_held {
        menu.reopen_latch = false;
    }
}
