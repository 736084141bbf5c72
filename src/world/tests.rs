//! World domain: unit tests for checkpoint flag animation.

use super::components::{CheckpointFlag, FlagState};

#[test]
fn test_flag_starts_lowered_and_looping() {
    let flag = CheckpointFlag::default();
    assert_eq!(flag.state, FlagState::Lowered);
    assert!(flag.looping);
    assert!(!flag.finished);
}

#[test]
fn test_raise_plays_through_and_finishes() {
    let mut flag = CheckpointFlag::default();
    flag.set_state(FlagState::Raising);
    assert!(!flag.looping);
    assert_eq!(flag.current_frame, 0);

    // Three frame steps advance without finishing.
    assert!(!flag.tick(flag.frame_duration));
    assert!(!flag.tick(flag.frame_duration));
    assert!(!flag.tick(flag.frame_duration));
    assert_eq!(flag.current_frame, 3);

    // The fourth step finishes, clamped on the last frame.
    assert!(flag.tick(flag.frame_duration));
    assert!(flag.finished);
    assert_eq!(flag.current_frame, flag.total_frames - 1);

    // Finished animations stay put.
    assert!(!flag.tick(1.0));
}

#[test]
fn test_raised_follow_up_loops() {
    let mut flag = CheckpointFlag::default();
    flag.set_state(FlagState::Raising);
    while !flag.tick(flag.frame_duration) {}

    // The follow-up state after a finished raise.
    flag.set_state(FlagState::Raised);
    assert!(flag.looping);
    assert!(!flag.finished);

    // Looping animations wrap instead of finishing.
    for _ in 0..10 {
        assert!(!flag.tick(flag.frame_duration));
    }
    assert!(flag.current_frame < flag.total_frames);
}

#[test]
fn test_set_same_state_does_not_reset_progress() {
    let mut flag = CheckpointFlag::default();
    flag.set_state(FlagState::Raising);
    flag.tick(flag.frame_duration);
    let frame = flag.current_frame;

    flag.set_state(FlagState::Raising);
    assert_eq!(flag.current_frame, frame);
}

#[test]
fn test_large_delta_crosses_multiple_frames() {
    let mut flag = CheckpointFlag::default();
    flag.set_state(FlagState::Raising);

    // One big tick covers the whole raise.
    assert!(flag.tick(flag.frame_duration * 10.0));
    assert!(flag.finished);
}
