//! Projectiles domain: pool preallocation, firing, and return paths.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::GameLayer;
use crate::projectiles::components::{FlightTime, Projectile};
use crate::projectiles::events::FireProjectileEvent;
use crate::projectiles::pool::ProjectilePool;
use crate::projectiles::resources::ProjectileTuning;

/// Parking spot for idle instances, far outside any playable area.
const POOL_SHELF: Vec3 = Vec3::new(-10_000.0, -10_000.0, 0.0);

/// Preallocate every projectile instance the session will ever use.
/// Instances start hidden with physics disabled and only toggle from then
/// on; nothing is spawned or despawned at fire time.
pub(crate) fn preallocate_projectiles(
    mut commands: Commands,
    tuning: Res<ProjectileTuning>,
    mut pool: ResMut<ProjectilePool>,
) {
    for _ in 0..ProjectilePool::CAPACITY {
        let entity = commands
            .spawn((
                Projectile,
                FlightTime::default(),
                Sprite {
                    color: Color::srgb(0.95, 0.9, 0.4),
                    custom_size: Some(Vec2::splat(tuning.radius * 2.0)),
                    ..default()
                },
                Transform::from_translation(POOL_SHELF),
                Visibility::Hidden,
                (
                    RigidBody::Dynamic,
                    Collider::circle(tuning.radius),
                    GravityScale(0.0),
                    LinearVelocity::default(),
                    LockedAxes::ROTATION_LOCKED,
                    CollisionEventsEnabled,
                    CollisionLayers::new(
                        GameLayer::Projectile,
                        [GameLayer::Ground, GameLayer::Wall],
                    ),
                    RigidBodyDisabled,
                    ColliderDisabled,
                ),
            ))
            .id();

        if !pool.pool.register(entity) {
            warn!("[POOL] Projectile pool already full, dropping extra instance");
            commands.entity(entity).despawn();
        }
    }
    info!(
        "[POOL] Preallocated {} projectile instances",
        pool.pool.capacity()
    );
}

/// Activate a pooled instance for each fire request. Requests arriving at
/// capacity are dropped; the shooter checks capacity before asking.
pub(crate) fn handle_fire_requests(
    mut commands: Commands,
    mut fire_events: MessageReader<FireProjectileEvent>,
    tuning: Res<ProjectileTuning>,
    mut pool: ResMut<ProjectilePool>,
    mut query: Query<(&mut Transform, &mut LinearVelocity, &mut FlightTime), With<Projectile>>,
) {
    for event in fire_events.read() {
        let Some(entity) = pool.pool.acquire() else {
            debug!("[POOL] Fire request dropped, pool at capacity");
            continue;
        };

        let Ok((mut transform, mut velocity, mut flight)) = query.get_mut(entity) else {
            // The instance vanished out from under the pool; forget it.
            warn!("[POOL] Acquired projectile {:?} no longer exists", entity);
            pool.pool.release(entity);
            continue;
        };

        let offset = Vec2::new(tuning.fire_offset.x * event.direction, tuning.fire_offset.y);
        transform.translation = (event.origin + offset).extend(0.5);
        velocity.0 = Vec2::new(event.direction * tuning.speed, 0.0);
        flight.0 = tuning.lifetime;

        commands
            .entity(entity)
            .insert(Visibility::Visible)
            .remove::<RigidBodyDisabled>()
            .remove::<ColliderDisabled>();
    }
}

/// Count down flight time on active instances and reclaim expired ones.
pub(crate) fn tick_flight_times(
    mut commands: Commands,
    time: Res<Time>,
    mut pool: ResMut<ProjectilePool>,
    mut query: Query<(Entity, &mut FlightTime), (With<Projectile>, Without<RigidBodyDisabled>)>,
) {
    let dt = time.delta_secs();
    for (entity, mut flight) in &mut query {
        flight.0 -= dt;
        if flight.0 <= 0.0 {
            park_projectile(&mut commands, &mut pool, entity);
        }
    }
}

/// Return projectiles to the pool when they strike level geometry.
pub(crate) fn reclaim_on_impact(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionStart>,
    mut pool: ResMut<ProjectilePool>,
    projectile_query: Query<Entity, With<Projectile>>,
) {
    for event in collision_events.read() {
        for entity in [event.collider1, event.collider2] {
            if projectile_query.get(entity).is_ok() {
                park_projectile(&mut commands, &mut pool, entity);
            }
        }
    }
}

/// Deactivate an instance and mark its slot idle. Safe to call twice for
/// the same entity in one frame; the second release is a no-op.
fn park_projectile(commands: &mut Commands, pool: &mut ProjectilePool, entity: Entity) {
    if !pool.pool.release(entity) {
        return;
    }
    commands.entity(entity).insert((
        Visibility::Hidden,
        Transform::from_translation(POOL_SHELF),
        LinearVelocity::default(),
        RigidBodyDisabled,
        ColliderDisabled,
    ));
}
