//! Movement domain: ground detection against the current gravity axis.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, GravityOrientation, MoveState, MovementTuning, Player};

/// A contact counts as ground only when its normal presses against the
/// current up direction, which flips with gravity.
pub(crate) fn normal_indicates_ground(normal: Vec2, up: Vec2) -> bool {
    normal.dot(up) > 0.5
}

/// Probe for ground with a short ray from the feet along the current down
/// direction. Never assumes a fixed world up: after a gravity flip the
/// probe immediately searches the other way.
pub(crate) fn probe_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &GravityOrientation, &mut MoveState), With<Player>>,
    tuning: Res<MovementTuning>,
) {
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, orientation, mut state) in &mut query {
        let was_grounded = state.grounded;
        let up = orientation.up();
        let half_height = tuning.player_size.y * 0.5;

        let ray_origin = transform.translation.truncate() - up * half_height;
        let ray_direction = match orientation {
            GravityOrientation::Normal => Dir2::NEG_Y,
            GravityOrientation::Inverted => Dir2::Y,
        };

        let hit = spatial_query.cast_ray(ray_origin, ray_direction, 4.0, true, &ground_filter);

        state.grounded = hit.is_some_and(|hit| normal_indicates_ground(hit.normal, up));

        if state.grounded {
            state.pessimistic_unground = false;
            if !was_grounded {
                state.touched_ground_once = true;
                debug!("Landed against {:?} surface", orientation);
            }
        }
    }
}
