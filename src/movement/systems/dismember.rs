//! Movement domain: head/body split and recomposition.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::dialogue::DialogueState;
use crate::movement::systems::gravity::visual_rotation;
use crate::movement::{
    BodyProxy, CollisionFocus, ControlInput, ControlMode, DismemberRequested, GravityOrientation,
    HeadProxy, MoveState, MovementTuning, Player, ProxyRig, RecomposeRequested,
};

/// Head rest offset from the body center: half the collider extent along
/// the gravity axis, which flips sign with the orientation.
pub(crate) fn head_offset(half_extent: f32, orientation: GravityOrientation) -> Vec2 {
    orientation.up() * half_extent
}

/// Split into proxies: the primary body vanishes, the head becomes the
/// live collision target and falls, the body rests where it stood.
pub(crate) fn handle_dismember(
    mut commands: Commands,
    mut requests: MessageReader<DismemberRequested>,
    rig: Res<ProxyRig>,
    tuning: Res<MovementTuning>,
    mut player_query: Query<
        (
            Entity,
            &Transform,
            &GravityOrientation,
            &mut ControlMode,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
    mut proxy_query: Query<
        (&mut Transform, Option<&mut LinearVelocity>),
        (Without<Player>, Or<(With<HeadProxy>, With<BodyProxy>)>),
    >,
) {
    if requests.read().count() == 0 {
        return;
    }

    let Ok((player_entity, transform, orientation, mut mode, mut velocity)) =
        player_query.single_mut()
    else {
        return;
    };
    if *mode != ControlMode::Normal {
        // Already split (or otherwise engaged); repeat requests are no-ops.
        return;
    }
    let (Some(head), Some(body)) = (rig.head, rig.body) else {
        warn!("[DISMEMBER] Proxy rig not wired, ignoring request");
        return;
    };

    let player_pos = transform.translation;
    let player_rot = transform.rotation;
    let offset = head_offset(tuning.player_size.y * 0.5, *orientation);

    if let Ok((mut head_transform, head_velocity)) = proxy_query.get_mut(head) {
        head_transform.translation = player_pos + offset.extend(0.0);
        head_transform.rotation = visual_rotation(*orientation);
        if let Some(mut v) = head_velocity {
            v.0 = Vec2::ZERO;
        }
    }
    if let Ok((mut body_transform, _)) = proxy_query.get_mut(body) {
        body_transform.translation = player_pos;
        body_transform.rotation = player_rot;
    }

    velocity.0 = Vec2::ZERO;
    *mode = ControlMode::Dismembered;

    commands
        .entity(player_entity)
        .insert((Visibility::Hidden, RigidBodyDisabled, ColliderDisabled))
        .remove::<CollisionFocus>();
    commands
        .entity(head)
        .insert((Visibility::Visible, CollisionFocus))
        .remove::<RigidBodyDisabled>()
        .remove::<ColliderDisabled>();
    commands
        .entity(body)
        .insert(Visibility::Visible)
        .remove::<RigidBodyDisabled>()
        .remove::<ColliderDisabled>();

    info!("[DISMEMBER] Split at {:?}", player_pos.truncate());
}

/// Reassemble at the body proxy's resting pose, by toggle key or by a
/// recompose zone touching the head.
pub(crate) fn handle_recompose(
    mut commands: Commands,
    input: Res<ControlInput>,
    dialogue: Res<DialogueState>,
    mut requests: MessageReader<RecomposeRequested>,
    rig: Res<ProxyRig>,
    mut player_query: Query<
        (
            Entity,
            &mut Transform,
            &mut ControlMode,
            &mut MoveState,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
    proxy_query: Query<&Transform, (Without<Player>, With<BodyProxy>)>,
) {
    // Drain zone requests even when they cannot apply, so stale ones
    // never fire a recompose later.
    let zone_requested = requests.read().count() > 0;
    if dialogue.has_active_dialogue() {
        return;
    }

    let Ok((player_entity, mut transform, mut mode, mut state, mut velocity)) =
        player_query.single_mut()
    else {
        return;
    };
    if *mode != ControlMode::Dismembered {
        return;
    }
    if !zone_requested && !input.toggle_just_pressed {
        return;
    }
    let (Some(head), Some(body)) = (rig.head, rig.body) else {
        warn!("[DISMEMBER] Proxy rig not wired, cannot recompose");
        return;
    };

    // The body proxy's resting pose becomes the player's pose again.
    if let Ok(body_transform) = proxy_query.get(body) {
        transform.translation = body_transform.translation;
        transform.rotation = body_transform.rotation;
    }

    velocity.0 = Vec2::ZERO;
    state.grounded = false;
    *mode = ControlMode::Normal;

    commands
        .entity(player_entity)
        .insert((Visibility::Visible, CollisionFocus))
        .remove::<RigidBodyDisabled>()
        .remove::<ColliderDisabled>();
    for proxy in [head, body] {
        commands
            .entity(proxy)
            .insert((Visibility::Hidden, RigidBodyDisabled, ColliderDisabled));
    }
    commands.entity(head).remove::<CollisionFocus>();

    info!("[DISMEMBER] Recomposed at {:?}", transform.translation.truncate());
}

/// The detached head falls along the current gravity orientation.
pub(crate) fn apply_head_gravity(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    player_query: Query<&GravityOrientation, With<Player>>,
    mut head_query: Query<&mut LinearVelocity, (With<HeadProxy>, Without<RigidBodyDisabled>)>,
) {
    let Ok(orientation) = player_query.single() else {
        return;
    };
    let dt = time.delta_secs();
    for mut velocity in &mut head_query {
        velocity.y -= orientation.sign() * tuning.gravity * dt;
    }
}
