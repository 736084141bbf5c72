//! Movement domain: components and physics layers for player control.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character and its dismemberment proxies
    Player,
    /// Pooled projectiles
    Projectile,
    /// Sensors (checkpoints, pickups, triggers) - should not block movement
    Sensor,
    /// Lethal zones (spikes, pits)
    Hazard,
}

/// The primary player body.
#[derive(Component, Debug)]
pub struct Player;

/// Whichever entity trigger zones should currently react to. Lives on the
/// primary body normally and moves to the head proxy while dismembered.
#[derive(Component, Debug)]
pub struct CollisionFocus;

/// Mutually exclusive control modes. Exactly one is active at a time.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlMode {
    #[default]
    Normal,
    /// The ability-select overlay is open; game time is frozen.
    SelectingAbility,
    /// Split into head and body proxies; locomotion input is ignored
    /// except for the recompose toggle.
    Dismembered,
    /// Horizontal velocity is zeroed every tick; falling still happens.
    MovementLocked,
}

#[derive(Component, Debug, Default)]
pub struct MoveState {
    pub grounded: bool,
    /// Set on the first ground contact after spawn; gravity flips are
    /// refused until then.
    pub touched_ground_once: bool,
    pub facing: Facing,
    pub gravity_cooldown_timer: f32,
    pub shoot_cooldown_timer: f32,
    /// Grounded was cleared by a standstill gravity flip and contact
    /// against the new down direction has not been confirmed yet.
    pub pessimistic_unground: bool,
}

impl MoveState {
    pub fn can_flip(&self) -> bool {
        self.touched_ground_once
            && self.gravity_cooldown_timer <= 0.0
            && self.shoot_cooldown_timer <= 0.0
    }

    pub fn note_flip(&mut self, cooldown: f32) {
        self.gravity_cooldown_timer = cooldown;
    }

    pub fn can_shoot(&self) -> bool {
        self.shoot_cooldown_timer <= 0.0
    }

    pub fn note_shot(&mut self, cooldown: f32) {
        self.shoot_cooldown_timer = cooldown;
    }

    pub fn tick_cooldowns(&mut self, dt: f32) {
        if self.gravity_cooldown_timer > 0.0 {
            self.gravity_cooldown_timer -= dt;
        }
        if self.shoot_cooldown_timer > 0.0 {
            self.shoot_cooldown_timer -= dt;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

/// Which way gravity currently pulls the player.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GravityOrientation {
    #[default]
    Normal,
    Inverted,
}

impl GravityOrientation {
    /// +1 while gravity pulls toward -Y, -1 while inverted.
    pub fn sign(self) -> f32 {
        match self {
            GravityOrientation::Normal => 1.0,
            GravityOrientation::Inverted => -1.0,
        }
    }

    /// The direction the player's feet press against.
    pub fn up(self) -> Vec2 {
        match self {
            GravityOrientation::Normal => Vec2::Y,
            GravityOrientation::Inverted => Vec2::NEG_Y,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            GravityOrientation::Normal => GravityOrientation::Inverted,
            GravityOrientation::Inverted => GravityOrientation::Normal,
        }
    }
}

/// Detached head proxy, active only while dismembered.
#[derive(Component, Debug)]
pub struct HeadProxy;

/// Resting body proxy, active only while dismembered.
#[derive(Component, Debug)]
pub struct BodyProxy;

/// Named parameters handed to the animation layer each frame.
#[derive(Component, Debug, Default)]
pub struct AnimationParams {
    pub speed: f32,
    pub grounded: bool,
    pub vertical_speed: f32,
}
