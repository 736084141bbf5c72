//! Movement domain: gravity flips and armed-ability dispatch.

use std::f32::consts::PI;

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::abilities::{AbilityKind, AbilityState, ArmedAbility};
use crate::dialogue::DialogueState;
use crate::movement::{
    ControlInput, ControlMode, GravityOrientation, MoveState, MovementTuning, Player,
};
use crate::projectiles::{FireProjectileEvent, ProjectilePool};

/// The visual flip composes two half-turns about the transform's own
/// axes, turning the sprite upside down without altering the collider.
pub(crate) fn visual_rotation(orientation: GravityOrientation) -> Quat {
    match orientation {
        GravityOrientation::Normal => Quat::IDENTITY,
        GravityOrientation::Inverted => Quat::from_rotation_x(PI) * Quat::from_rotation_y(PI),
    }
}

/// Fire whichever ability is armed when the action key lands.
pub(crate) fn trigger_armed_action(
    input: Res<ControlInput>,
    armed: Res<ArmedAbility>,
    abilities: Res<AbilityState>,
    dialogue: Res<DialogueState>,
    tuning: Res<MovementTuning>,
    pool: Res<ProjectilePool>,
    mut fire_events: MessageWriter<FireProjectileEvent>,
    mut query: Query<
        (
            &Transform,
            &ControlMode,
            &mut GravityOrientation,
            &mut MoveState,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    if !input.action_just_pressed || dialogue.has_active_dialogue() {
        return;
    }
    let Some(kind) = armed.0 else {
        return;
    };

    for (transform, mode, mut orientation, mut state, mut velocity) in &mut query {
        if *mode != ControlMode::Normal {
            continue;
        }

        match kind {
            AbilityKind::Shoot => {
                if !abilities.shoot_unlocked || !state.can_shoot() {
                    continue;
                }
                if !pool.pool.can_acquire() {
                    debug!("[SHOOT] Pool at capacity, shot refused");
                    continue;
                }
                fire_events.write(FireProjectileEvent {
                    origin: transform.translation.truncate(),
                    direction: state.facing.sign(),
                });
                state.note_shot(tuning.shoot_cooldown);
            }
            AbilityKind::GravityFlip => {
                if !abilities.gravity_unlocked || !state.can_flip() {
                    continue;
                }

                let standing_still =
                    state.grounded && velocity.x.abs() < tuning.standstill_threshold;

                *orientation = orientation.flipped();
                velocity.y = 0.0;
                state.note_flip(tuning.gravity_flip_cooldown);

                // Contact normals are stale until the next probe runs
                // against the new down direction.
                if standing_still {
                    state.grounded = false;
                    state.pessimistic_unground = true;
                }

                info!("[GRAVITY] Flipped to {:?}", *orientation);
            }
            AbilityKind::Dismember => {}
        }
    }
}

/// Keep the sprite's rotation in line with the gravity orientation.
pub(crate) fn sync_visual_orientation(
    mut query: Query<(&GravityOrientation, &mut Transform), With<Player>>,
) {
    for (orientation, mut transform) in &mut query {
        transform.rotation = visual_rotation(*orientation);
    }
}
