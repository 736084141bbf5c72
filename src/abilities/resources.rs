//! Abilities domain: unlock flags and selection state.

use bevy::prelude::*;

/// The three player capabilities, in menu display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbilityKind {
    GravityFlip,
    Shoot,
    Dismember,
}

impl AbilityKind {
    pub const ALL: [AbilityKind; 3] = [
        AbilityKind::GravityFlip,
        AbilityKind::Shoot,
        AbilityKind::Dismember,
    ];

    /// Identifier used by pickups and dialogue scripts.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "gravity" => Some(AbilityKind::GravityFlip),
            "shoot" => Some(AbilityKind::Shoot),
            "dismember" => Some(AbilityKind::Dismember),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AbilityKind::GravityFlip => "Gravity Flip",
            AbilityKind::Shoot => "Shoot",
            AbilityKind::Dismember => "Dismember",
        }
    }
}

/// Per-session unlock flags. Set once, never revoked.
#[derive(Resource, Debug, Default)]
pub struct AbilityState {
    pub gravity_unlocked: bool,
    pub shoot_unlocked: bool,
    pub dismember_unlocked: bool,
}

impl AbilityState {
    pub fn is_unlocked(&self, kind: AbilityKind) -> bool {
        match kind {
            AbilityKind::GravityFlip => self.gravity_unlocked,
            AbilityKind::Shoot => self.shoot_unlocked,
            AbilityKind::Dismember => self.dismember_unlocked,
        }
    }

    /// Set the flag for `kind`. Returns true only when this call actually
    /// unlocked it; repeat unlocks are no-ops.
    pub fn unlock(&mut self, kind: AbilityKind) -> bool {
        if self.is_unlocked(kind) {
            return false;
        }
        match kind {
            AbilityKind::GravityFlip => self.gravity_unlocked = true,
            AbilityKind::Shoot => self.shoot_unlocked = true,
            AbilityKind::Dismember => self.dismember_unlocked = true,
        }
        true
    }

    pub fn any_unlocked(&self) -> bool {
        self.gravity_unlocked || self.shoot_unlocked || self.dismember_unlocked
    }

    /// Unlocked abilities in display order.
    pub fn unlocked(&self) -> Vec<AbilityKind> {
        AbilityKind::ALL
            .into_iter()
            .filter(|kind| self.is_unlocked(*kind))
            .collect()
    }
}

/// Which ability the action key currently triggers. Dismember fires
/// immediately on selection and is never left armed.
#[derive(Resource, Debug, Default)]
pub struct ArmedAbility(pub Option<AbilityKind>);

/// Ability-select overlay state.
#[derive(Resource, Debug, Default)]
pub struct AbilityMenu {
    pub open: bool,
    /// Index into the unlocked-ability list.
    pub cursor: usize,
    /// Blocks reopening until the select key is released, so confirming a
    /// choice does not bounce straight back into the menu.
    pub reopen_latch: bool,
}
