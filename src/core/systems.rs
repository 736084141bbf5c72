//! Core domain: camera and time-flow systems.

use bevy::prelude::*;

use crate::core::resources::{CameraFollow, TimeFreeze};
use crate::movement::Player;

const CAMERA_FOLLOW_RATE: f32 = 5.0;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Pause or resume the virtual clock to match the freeze ledger. Physics
/// and every scaled timer halt together; real-time sequences keep going.
pub(crate) fn sync_time_freeze(freeze: Res<TimeFreeze>, mut time: ResMut<Time<Virtual>>) {
    if freeze.is_frozen() {
        if !time.is_paused() {
            time.pause();
        }
    } else if time.is_paused() {
        time.unpause();
    }
}

/// Ease the camera toward the player. Runs on the real clock so the view
/// still settles while gameplay is frozen for dialogue or menus.
pub(crate) fn camera_follow(
    time: Res<Time<Real>>,
    follow: Res<CameraFollow>,
    player_query: Query<&Transform, With<Player>>,
    mut camera_query: Query<&mut Transform, (With<Camera2d>, Without<Player>)>,
) {
    if !follow.enabled {
        return;
    }
    let Ok(player_transform) = player_query.single() else {
        return;
    };

    let target = player_transform.translation.truncate().extend(0.0);
    let t = (CAMERA_FOLLOW_RATE * time.delta_secs()).min(1.0);
    for mut camera_transform in &mut camera_query {
        let z = camera_transform.translation.z;
        camera_transform.translation = camera_transform.translation.lerp(target, t).with_z(z);
    }
}
