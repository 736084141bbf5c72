//! Core domain: unit tests for the freeze ledger and camera switch.

use bevy::prelude::Vec3;

use super::resources::{CameraFollow, TimeFreeze};

#[test]
fn test_freeze_holds_while_any_source_remains() {
    let mut freeze = TimeFreeze::default();
    assert!(!freeze.is_frozen());

    freeze.freeze("dialogue");
    freeze.freeze("ability_menu");
    assert!(freeze.is_frozen());

    freeze.thaw("dialogue");
    assert!(freeze.is_frozen());
    freeze.thaw("ability_menu");
    assert!(!freeze.is_frozen());
}

#[test]
fn test_freeze_same_source_twice_thaws_once() {
    let mut freeze = TimeFreeze::default();
    freeze.freeze("death");
    freeze.freeze("death");
    freeze.thaw("death");
    assert!(!freeze.is_frozen());
}

#[test]
fn test_thaw_unknown_source_is_noop() {
    let mut freeze = TimeFreeze::default();
    freeze.freeze("dialogue");
    freeze.thaw("never_frozen");
    assert!(freeze.is_frozen());
}

#[test]
fn test_camera_suspend_resume_round_trip() {
    let mut follow = CameraFollow::default();
    assert!(follow.enabled);

    let parked = Vec3::new(12.0, -3.0, 0.0);
    follow.suspend(parked);
    assert!(!follow.enabled);

    // A second suspend while already suspended must not clobber the
    // remembered position.
    follow.suspend(Vec3::ZERO);
    assert_eq!(follow.saved_position, Some(parked));

    assert_eq!(follow.resume(), Some(parked));
    assert!(follow.enabled);
    assert_eq!(follow.resume(), None);
}
