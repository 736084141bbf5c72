//! Movement domain: unit tests for control-state helpers.

use bevy::prelude::{Quat, Vec2, Vec3};

use super::components::{ControlMode, Facing, GravityOrientation, MoveState};
use super::systems::dismember::head_offset;
use super::systems::gravity::visual_rotation;
use super::systems::grounded::normal_indicates_ground;

// -----------------------------------------------------------------------------
// Cooldown gating
// -----------------------------------------------------------------------------

#[test]
fn test_flip_refused_before_first_ground_contact() {
    let state = MoveState::default();
    assert!(!state.can_flip());

    let grounded_once = MoveState {
        touched_ground_once: true,
        ..Default::default()
    };
    assert!(grounded_once.can_flip());
}

#[test]
fn test_flip_cooldown_allows_exactly_one_flip_per_window() {
    let mut state = MoveState {
        touched_ground_once: true,
        ..Default::default()
    };

    // First attempt flips and starts the cooldown.
    assert!(state.can_flip());
    state.note_flip(1.0);

    // Second attempt inside the window is refused.
    state.tick_cooldowns(0.5);
    assert!(!state.can_flip());

    // Third attempt after the window succeeds.
    state.tick_cooldowns(0.6);
    assert!(state.can_flip());
}

#[test]
fn test_flip_blocked_while_shot_cooldown_runs() {
    let mut state = MoveState {
        touched_ground_once: true,
        ..Default::default()
    };
    state.note_shot(0.35);
    assert!(!state.can_flip());

    state.tick_cooldowns(0.4);
    assert!(state.can_flip());
}

#[test]
fn test_shot_cooldown() {
    let mut state = MoveState::default();
    assert!(state.can_shoot());
    state.note_shot(0.35);
    assert!(!state.can_shoot());
    state.tick_cooldowns(0.35);
    assert!(state.can_shoot());
}

// -----------------------------------------------------------------------------
// Orientation helpers
// -----------------------------------------------------------------------------

#[test]
fn test_orientation_sign_and_up() {
    assert_eq!(GravityOrientation::Normal.sign(), 1.0);
    assert_eq!(GravityOrientation::Normal.up(), Vec2::Y);
    assert_eq!(GravityOrientation::Inverted.sign(), -1.0);
    assert_eq!(GravityOrientation::Inverted.up(), Vec2::NEG_Y);
    assert_eq!(
        GravityOrientation::Normal.flipped().flipped(),
        GravityOrientation::Normal
    );
}

#[test]
fn test_visual_rotation_composes_two_half_turns() {
    assert_eq!(visual_rotation(GravityOrientation::Normal), Quat::IDENTITY);

    // The composed half-turns flip the sprite upside down: a local up
    // vector must map to world down.
    let flipped = visual_rotation(GravityOrientation::Inverted);
    let up = flipped * Vec3::Y;
    assert!((up - Vec3::NEG_Y).length() < 1e-5);
}

#[test]
fn test_head_offset_follows_gravity_axis() {
    assert_eq!(
        head_offset(24.0, GravityOrientation::Normal),
        Vec2::new(0.0, 24.0)
    );
    assert_eq!(
        head_offset(24.0, GravityOrientation::Inverted),
        Vec2::new(0.0, -24.0)
    );
}

// -----------------------------------------------------------------------------
// Ground normals
// -----------------------------------------------------------------------------

#[test]
fn test_ground_normal_evaluated_against_current_up() {
    // A floor normal counts as ground only under normal gravity.
    assert!(normal_indicates_ground(Vec2::Y, Vec2::Y));
    assert!(!normal_indicates_ground(Vec2::Y, Vec2::NEG_Y));

    // A ceiling normal counts as ground only while inverted.
    assert!(normal_indicates_ground(Vec2::NEG_Y, Vec2::NEG_Y));
    assert!(!normal_indicates_ground(Vec2::NEG_Y, Vec2::Y));

    // Walls never count, whichever way gravity points.
    assert!(!normal_indicates_ground(Vec2::X, Vec2::Y));
    assert!(!normal_indicates_ground(Vec2::X, Vec2::NEG_Y));

    // Steep slopes fall below the 0.5 dot threshold.
    let steep = Vec2::new(0.9, 0.435).normalize();
    assert!(!normal_indicates_ground(steep, Vec2::Y));
}

// -----------------------------------------------------------------------------
// Misc
// -----------------------------------------------------------------------------

#[test]
fn test_facing_sign() {
    assert_eq!(Facing::Right.sign(), 1.0);
    assert_eq!(Facing::Left.sign(), -1.0);
}

#[test]
fn test_default_mode_is_normal() {
    assert_eq!(ControlMode::default(), ControlMode::Normal);
}
