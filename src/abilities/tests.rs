//! Abilities domain: unit tests for unlock flags.

use super::resources::{AbilityKind, AbilityState};

#[test]
fn test_unlock_is_idempotent() {
    let mut state = AbilityState::default();
    assert!(state.unlock(AbilityKind::Shoot));
    assert!(!state.unlock(AbilityKind::Shoot));
    assert!(state.is_unlocked(AbilityKind::Shoot));
}

#[test]
fn test_flags_start_locked_and_never_interfere() {
    let mut state = AbilityState::default();
    assert!(!state.any_unlocked());

    state.unlock(AbilityKind::GravityFlip);
    assert!(state.is_unlocked(AbilityKind::GravityFlip));
    assert!(!state.is_unlocked(AbilityKind::Shoot));
    assert!(!state.is_unlocked(AbilityKind::Dismember));
    assert!(state.any_unlocked());
}

#[test]
fn test_unlocked_list_preserves_display_order() {
    let mut state = AbilityState::default();
    state.unlock(AbilityKind::Dismember);
    state.unlock(AbilityKind::GravityFlip);

    assert_eq!(
        state.unlocked(),
        vec![AbilityKind::GravityFlip, AbilityKind::Dismember]
    );
}

#[test]
fn test_key_lookup() {
    assert_eq!(
        AbilityKind::from_key("gravity"),
        Some(AbilityKind::GravityFlip)
    );
    assert_eq!(AbilityKind::from_key("shoot"), Some(AbilityKind::Shoot));
    assert_eq!(
        AbilityKind::from_key("dismember"),
        Some(AbilityKind::Dismember)
    );
    assert_eq!(AbilityKind::from_key("fly"), None);
    assert_eq!(AbilityKind::from_key(""), None);
}
