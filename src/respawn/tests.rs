//! Respawn domain: unit tests for loss rules and phase ordering.

use super::resources::{DyingPhase, RespawnConfig, compute_loss, is_terminal, next_phase};

#[test]
fn test_grace_condition_forgives_first_deaths() {
    // Never collected anything: no loss, whatever the configured penalty.
    assert_eq!(compute_loss(0, 500, false), 0);

    // Once anything was ever collected the penalty applies.
    assert_eq!(compute_loss(100, 50, true), 50);
}

#[test]
fn test_loss_clamps_at_zero_total() {
    assert_eq!(compute_loss(30, 500, true), 30);
    assert_eq!(compute_loss(0, 500, true), 0);
}

#[test]
fn test_terminal_only_after_real_bankruptcy() {
    // Grace case at zero coins never game-overs on its own.
    assert!(!is_terminal(0, false));

    // A player who held coins and ran dry goes out.
    assert!(is_terminal(0, true));
    assert!(!is_terminal(1, true));
}

#[test]
fn test_restoration_phase_order() {
    let mut phase = DyingPhase::Hide;
    let mut order = vec![phase];
    while let Some(next) = next_phase(phase, false) {
        phase = next;
        order.push(phase);
    }

    assert_eq!(
        order,
        vec![
            DyingPhase::Hide,
            DyingPhase::FadeOut,
            DyingPhase::RevealHud,
            DyingPhase::Penalty,
            DyingPhase::HudOut,
            DyingPhase::FadeIn,
        ]
    );
}

#[test]
fn test_terminal_path_skips_restoration() {
    let mut phase = DyingPhase::Hide;
    let mut order = vec![phase];
    while let Some(next) = next_phase(phase, true) {
        phase = next;
        order.push(phase);
    }

    // Death with 500 coins and a 500 penalty: counter reaches zero, the
    // sequence pauses, then ends with no restore phases at all.
    assert_eq!(
        order,
        vec![
            DyingPhase::Hide,
            DyingPhase::FadeOut,
            DyingPhase::RevealHud,
            DyingPhase::Penalty,
            DyingPhase::TerminalPause,
        ]
    );
    assert!(!order.contains(&DyingPhase::HudOut));
    assert!(!order.contains(&DyingPhase::FadeIn));
}

#[test]
fn test_phase_durations_cover_every_phase() {
    let config = RespawnConfig::default();
    for phase in [
        DyingPhase::Hide,
        DyingPhase::FadeOut,
        DyingPhase::RevealHud,
        DyingPhase::Penalty,
        DyingPhase::TerminalPause,
        DyingPhase::HudOut,
        DyingPhase::FadeIn,
    ] {
        assert!(config.phase_duration(phase) > 0.0);
    }

    // The penalty phase always outlasts its counter animation.
    assert!(config.phase_duration(DyingPhase::Penalty) > config.count_duration);
}
