//! Respawn domain: death-sequence phases and configuration.

use bevy::prelude::*;

/// Phases of the dying choreography, in order. Every phase runs on the
/// real clock; gameplay time is frozen for the whole sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DyingPhase {
    /// Player presence hidden, camera parked; short beat before the fade.
    Hide,
    /// Screen fades to opaque.
    FadeOut,
    /// Death HUD appears showing the current coin count.
    RevealHud,
    /// Coin penalty applied, counter animating down.
    Penalty,
    /// Nothing left to lose: beat before the terminal transition.
    TerminalPause,
    /// Death HUD out, coin HUD and camera back, player restored under
    /// the still-opaque screen.
    HudOut,
    /// Screen fades back to transparent; control returns at the end.
    FadeIn,
}

/// What each phase hands over to when its timer runs out. `None` ends the
/// sequence: after `TerminalPause` into game over, after `FadeIn` back to
/// play.
pub fn next_phase(phase: DyingPhase, terminal: bool) -> Option<DyingPhase> {
    match phase {
        DyingPhase::Hide => Some(DyingPhase::FadeOut),
        DyingPhase::FadeOut => Some(DyingPhase::RevealHud),
        DyingPhase::RevealHud => Some(DyingPhase::Penalty),
        DyingPhase::Penalty => {
            if terminal {
                Some(DyingPhase::TerminalPause)
            } else {
                Some(DyingPhase::HudOut)
            }
        }
        DyingPhase::TerminalPause => None,
        DyingPhase::HudOut => Some(DyingPhase::FadeIn),
        DyingPhase::FadeIn => None,
    }
}

/// How many coins a death costs. Zero while the grace condition holds:
/// a player who never collected anything loses nothing.
pub fn compute_loss(total: u32, penalty: u32, collected_any: bool) -> u32 {
    if !collected_any {
        return 0;
    }
    penalty.min(total)
}

/// Whether the sequence ends in game over instead of restoration. The
/// grace case never game-overs on its own; only a player who has held
/// coins and run dry goes out.
pub fn is_terminal(total_after: u32, collected_any: bool) -> bool {
    total_after == 0 && collected_any
}

/// One in-flight dying sequence.
#[derive(Debug)]
pub struct DyingSequence {
    pub phase: DyingPhase,
    pub timer: f32,
    pub pending_loss: u32,
    pub terminal: bool,
}

/// Coordinator state. `active` is `None` while alive; entry while already
/// dying is a guarded no-op.
#[derive(Resource, Debug, Default)]
pub struct RespawnSequence {
    pub active: Option<DyingSequence>,
}

impl RespawnSequence {
    pub fn is_dying(&self) -> bool {
        self.active.is_some()
    }
}

#[derive(Resource, Debug, Clone)]
pub struct RespawnConfig {
    pub hide_delay: f32,
    pub fade_duration: f32,
    pub hud_pause: f32,
    /// Coins lost per death, before clamping.
    pub penalty: u32,
    /// Duration of the counter animation down.
    pub count_duration: f32,
    pub terminal_pause: f32,
    pub restore_delay: f32,
}

impl Default for RespawnConfig {
    fn default() -> Self {
        Self {
            hide_delay: 0.6,
            fade_duration: 0.5,
            hud_pause: 0.8,
            penalty: 50,
            count_duration: 1.2,
            terminal_pause: 1.0,
            restore_delay: 0.2,
        }
    }
}

impl RespawnConfig {
    pub fn phase_duration(&self, phase: DyingPhase) -> f32 {
        match phase {
            DyingPhase::Hide => self.hide_delay,
            DyingPhase::FadeOut => self.fade_duration,
            DyingPhase::RevealHud => self.hud_pause,
            // Small buffer so the counter always lands before the phase ends.
            DyingPhase::Penalty => self.count_duration + 0.2,
            DyingPhase::TerminalPause => self.terminal_pause,
            DyingPhase::HudOut => self.restore_delay,
            DyingPhase::FadeIn => self.fade_duration,
        }
    }
}
