//! Movement domain: player and proxy bootstrap.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::RespawnAnchor;
use crate::movement::{
    AnimationParams, BodyProxy, CollisionFocus, ControlMode, GameLayer, GravityOrientation,
    HeadProxy, MoveState, MovementTuning, Player, ProxyRig,
};

/// Spawn the player plus both dismemberment proxies. The proxies start
/// hidden with physics disabled and only ever toggle; they are never
/// respawned.
pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    anchor: Res<RespawnAnchor>,
    mut rig: ResMut<ProxyRig>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let body_layers = CollisionLayers::new(
        GameLayer::Player,
        [
            GameLayer::Ground,
            GameLayer::Wall,
            GameLayer::Sensor,
            GameLayer::Hazard,
        ],
    );

    commands.spawn((
        (
            Player,
            CollisionFocus,
            ControlMode::default(),
            MoveState::default(),
            GravityOrientation::default(),
            AnimationParams::default(),
        ),
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(tuning.player_size),
            ..default()
        },
        Transform::from_xyz(anchor.position.x, anchor.position.y, 0.0),
        (
            RigidBody::Dynamic,
            Collider::rectangle(tuning.player_size.x, tuning.player_size.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // Gravity is applied manually so flips stay cheap
            Friction::new(0.0),
            CollisionEventsEnabled,
            body_layers,
        ),
    ));

    let head = commands
        .spawn((
            HeadProxy,
            Sprite {
                color: Color::srgb(0.95, 0.85, 0.8),
                custom_size: Some(tuning.head_size),
                ..default()
            },
            Transform::default(),
            Visibility::Hidden,
            (
                RigidBody::Dynamic,
                Collider::rectangle(tuning.head_size.x, tuning.head_size.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(0.0),
                Friction::new(0.0),
                CollisionEventsEnabled,
                body_layers,
                RigidBodyDisabled,
                ColliderDisabled,
            ),
        ))
        .id();

    let headless_height = tuning.player_size.y - tuning.head_size.y;
    let body = commands
        .spawn((
            BodyProxy,
            Sprite {
                color: Color::srgb(0.75, 0.75, 0.8),
                custom_size: Some(Vec2::new(tuning.player_size.x, headless_height)),
                ..default()
            },
            Transform::default(),
            Visibility::Hidden,
            (
                RigidBody::Static,
                Collider::rectangle(tuning.player_size.x, headless_height),
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
                RigidBodyDisabled,
                ColliderDisabled,
            ),
        ))
        .id();

    rig.head = Some(head);
    rig.body = Some(body);
    info!("Spawned player at {:?} with proxy rig", anchor.position);
}
