//! World domain: test-chamber level bootstrap.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::currency::CoinPickup;
use crate::movement::GameLayer;
use crate::respawn::DeathZone;
use crate::world::components::{
    AbilityShrine, Checkpoint, CheckpointFlag, CutsceneTrigger, Ground, RecomposeZone, Wall,
};

/// Build the playable chamber: floor and ceiling for gravity flips, side
/// walls, a spike pit, a coin run, shrines for each ability, a checkpoint
/// and the intro cutscene zone.
pub(crate) fn spawn_level(mut commands: Commands) {
    let ground_color = Color::srgb(0.35, 0.4, 0.35);
    let wall_color = Color::srgb(0.25, 0.25, 0.35);
    let hazard_color = Color::srgb(0.6, 0.2, 0.2);
    let coin_color = Color::srgb(0.9, 0.75, 0.2);
    let shrine_color = Color::srgb(0.5, 0.4, 0.7);

    let ground_layers =
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Projectile]);
    let wall_layers =
        CollisionLayers::new(GameLayer::Wall, [GameLayer::Player, GameLayer::Projectile]);
    let sensor_layers = CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]);
    let hazard_layers = CollisionLayers::new(GameLayer::Hazard, [GameLayer::Player]);

    // Floor, split around the spike pit
    for (x, width) in [(-360.0, 720.0), (560.0, 480.0)] {
        commands.spawn((
            Ground,
            Sprite {
                color: ground_color,
                custom_size: Some(Vec2::new(width, 40.0)),
                ..default()
            },
            Transform::from_xyz(x, -160.0, 0.0),
            RigidBody::Static,
            Collider::rectangle(width, 40.0),
            ground_layers,
        ));
    }

    // Ceiling, walkable after a gravity flip
    commands.spawn((
        Ground,
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(1520.0, 40.0)),
            ..default()
        },
        Transform::from_xyz(40.0, 320.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(1520.0, 40.0),
        ground_layers,
    ));

    // Side walls
    for x in [-740.0, 820.0] {
        commands.spawn((
            Wall,
            Sprite {
                color: wall_color,
                custom_size: Some(Vec2::new(40.0, 520.0)),
                ..default()
            },
            Transform::from_xyz(x, 80.0, 0.0),
            RigidBody::Static,
            Collider::rectangle(40.0, 520.0),
            wall_layers,
        ));
    }

    // Spike pit between the floor slabs
    commands.spawn((
        DeathZone,
        Sprite {
            color: hazard_color,
            custom_size: Some(Vec2::new(240.0, 24.0)),
            ..default()
        },
        Transform::from_xyz(120.0, -188.0, 0.0),
        Collider::rectangle(240.0, 24.0),
        Sensor,
        CollisionEventsEnabled,
        hazard_layers,
    ));

    // Coin run along the floor
    for i in 0..5 {
        commands.spawn((
            CoinPickup { value: 10 },
            Sprite {
                color: coin_color,
                custom_size: Some(Vec2::splat(12.0)),
                ..default()
            },
            Transform::from_xyz(-480.0 + i as f32 * 60.0, -110.0, 0.0),
            Collider::circle(10.0),
            Sensor,
            CollisionEventsEnabled,
            sensor_layers,
        ));
    }

    // Checkpoint past the pit
    commands.spawn((
        Checkpoint {
            id: "chamber_mid".to_string(),
        },
        CheckpointFlag::default(),
        Sprite {
            color: Color::srgb(0.5, 0.5, 0.55),
            custom_size: Some(Vec2::new(12.0, 56.0)),
            ..default()
        },
        Transform::from_xyz(420.0, -112.0, 0.0),
        Collider::rectangle(36.0, 64.0),
        Sensor,
        CollisionEventsEnabled,
        sensor_layers,
    ));

    // Ability shrines
    for (x, key) in [(-600.0, "gravity"), (620.0, "shoot"), (760.0, "dismember")] {
        commands.spawn((
            AbilityShrine {
                key: key.to_string(),
            },
            Sprite {
                color: shrine_color,
                custom_size: Some(Vec2::new(28.0, 36.0)),
                ..default()
            },
            Transform::from_xyz(x, -122.0, 0.0),
            Collider::rectangle(36.0, 48.0),
            Sensor,
            CollisionEventsEnabled,
            sensor_layers,
        ));
    }

    // Intro conversation fires just ahead of the spawn point
    commands.spawn((
        CutsceneTrigger {
            script_id: "intro".to_string(),
            fired: false,
        },
        Transform::from_xyz(-80.0, -100.0, 0.0),
        Collider::rectangle(60.0, 120.0),
        Sensor,
        CollisionEventsEnabled,
        sensor_layers,
    ));

    // Recompose basin under the ceiling ledge
    commands.spawn((
        RecomposeZone,
        Sprite {
            color: Color::srgba(0.3, 0.7, 0.6, 0.4),
            custom_size: Some(Vec2::new(80.0, 30.0)),
            ..default()
        },
        Transform::from_xyz(260.0, -125.0, 0.0),
        Collider::rectangle(80.0, 30.0),
        Sensor,
        CollisionEventsEnabled,
        sensor_layers,
    ));

    info!("Spawned test chamber");
}
