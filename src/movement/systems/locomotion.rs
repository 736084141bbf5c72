//! Movement domain: locomotion systems for timers and velocity control.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::dialogue::DialogueState;
use crate::movement::{
    AnimationParams, ControlInput, ControlMode, Facing, GravityOrientation, MoveState,
    MovementTuning, Player,
};

pub(crate) fn update_timers(time: Res<Time>, mut query: Query<&mut MoveState, With<Player>>) {
    let dt = time.delta_secs();
    for mut state in &mut query {
        state.tick_cooldowns(dt);
    }
}

pub(crate) fn apply_horizontal_movement(
    time: Res<Time>,
    input: Res<ControlInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&ControlMode, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mode, mut velocity) in &mut query {
        if *mode != ControlMode::Normal {
            continue;
        }

        let target_vx = input.axis.x * tuning.max_speed;

        if input.axis.x.abs() > 0.1 {
            // Accelerate toward target
            let accel = tuning.accel * dt;
            if velocity.x < target_vx {
                velocity.x = (velocity.x + accel).min(target_vx);
            } else {
                velocity.x = (velocity.x - accel).max(target_vx);
            }
        } else {
            // Decelerate to zero
            let decel = tuning.decel * dt;
            if velocity.x > 0.0 {
                velocity.x = (velocity.x - decel).max(0.0);
            } else {
                velocity.x = (velocity.x + decel).min(0.0);
            }
        }
    }
}

pub(crate) fn apply_hop(
    input: Res<ControlInput>,
    dialogue: Res<DialogueState>,
    tuning: Res<MovementTuning>,
    mut query: Query<
        (
            &ControlMode,
            &GravityOrientation,
            &mut MoveState,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    if !input.jump_just_pressed || dialogue.has_active_dialogue() {
        return;
    }

    for (mode, orientation, mut state, mut velocity) in &mut query {
        if *mode != ControlMode::Normal || !state.grounded {
            continue;
        }

        velocity.y = orientation.sign() * tuning.hop_velocity;
        state.grounded = false;
        debug!("Hop: orientation={:?}", orientation);
    }
}

/// Manual gravity, pulled along the current orientation.
pub(crate) fn apply_gravity(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&ControlMode, &GravityOrientation, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mode, orientation, mut velocity) in &mut query {
        if *mode == ControlMode::Dismembered {
            continue;
        }
        velocity.y -= orientation.sign() * tuning.gravity * dt;
    }
}

/// Movement lock: no horizontal drift, falling still allowed.
pub(crate) fn enforce_movement_lock(
    mut query: Query<(&ControlMode, &mut LinearVelocity), With<Player>>,
) {
    for (mode, mut velocity) in &mut query {
        if *mode == ControlMode::MovementLocked {
            velocity.x = 0.0;
        }
    }
}

pub(crate) fn update_facing(
    input: Res<ControlInput>,
    mut query: Query<(&ControlMode, &mut MoveState), With<Player>>,
) {
    for (mode, mut state) in &mut query {
        if *mode != ControlMode::Normal {
            continue;
        }
        if input.axis.x > 0.1 {
            state.facing = Facing::Right;
        } else if input.axis.x < -0.1 {
            state.facing = Facing::Left;
        }
    }
}

/// Hand the frame's movement facts to the animation layer. Runs after
/// every velocity-mutating system so transitions taken this tick show up
/// in the same tick's parameters.
pub(crate) fn sync_animation_params(
    mut query: Query<
        (
            &MoveState,
            &GravityOrientation,
            &LinearVelocity,
            &mut AnimationParams,
        ),
        With<Player>,
    >,
) {
    for (state, orientation, velocity, mut params) in &mut query {
        params.speed = velocity.x.abs();
        params.grounded = state.grounded;
        params.vertical_speed = velocity.y * orientation.sign();

        // Ground contact is stale right after a standstill flip; report a
        // hint of falling until the probe confirms the new down direction.
        if state.pessimistic_unground && params.vertical_speed == 0.0 {
            params.vertical_speed = -0.01;
        }
    }
}

/// Dialogue blocks everything: velocity frozen, animation halted. Control
/// resumes from normal mode once the dialogue ends.
pub(crate) fn freeze_during_dialogue(
    dialogue: Res<DialogueState>,
    mut query: Query<(&mut LinearVelocity, &mut AnimationParams), With<Player>>,
) {
    if !dialogue.has_active_dialogue() {
        return;
    }
    for (mut velocity, mut params) in &mut query {
        velocity.0 = Vec2::ZERO;
        params.speed = 0.0;
    }
}
