//! Movement domain: tuning, sampled input, and proxy wiring.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub max_speed: f32,
    pub accel: f32,
    pub decel: f32,
    pub hop_velocity: f32,
    pub gravity: f32,
    /// Minimum interval between gravity flips.
    pub gravity_flip_cooldown: f32,
    pub shoot_cooldown: f32,
    /// Below this horizontal speed a grounded flip pessimistically clears
    /// the grounded flag until the next probe confirms contact.
    pub standstill_threshold: f32,
    pub player_size: Vec2,
    pub head_size: Vec2,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            max_speed: 320.0,
            accel: 3000.0,
            decel: 2600.0,
            hop_velocity: 560.0,
            gravity: 1800.0,
            gravity_flip_cooldown: 1.0,
            shoot_cooldown: 0.35,
            standstill_threshold: 10.0,
            player_size: Vec2::new(24.0, 48.0),
            head_size: Vec2::new(20.0, 20.0),
        }
    }
}

/// Logical actions sampled once per frame from the input layer.
#[derive(Resource, Debug, Default)]
pub struct ControlInput {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub jump_held: bool,
    /// Fires the currently armed ability.
    pub action_just_pressed: bool,
    /// Dismember recompose toggle.
    pub toggle_just_pressed: bool,
    /// Hold to open the ability-select overlay.
    pub select_held: bool,
    pub confirm_just_pressed: bool,
    pub cursor_left_just_pressed: bool,
    pub cursor_right_just_pressed: bool,
    /// Advance or skip dialogue.
    pub advance_just_pressed: bool,
}

/// Handles to the preallocated dismemberment proxies. Left unset when
/// bootstrap never ran; consumers warn and no-op in that case.
#[derive(Resource, Debug, Default)]
pub struct ProxyRig {
    pub head: Option<Entity>,
    pub body: Option<Entity>,
}
