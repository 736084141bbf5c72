//! World domain: level geometry markers and trigger zones.

use bevy::prelude::*;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

/// Respawn point. Touching it moves the anchor here.
#[derive(Component, Debug)]
pub struct Checkpoint {
    pub id: String,
}

/// Zone that opens a conversation the first time the player walks in.
#[derive(Component, Debug)]
pub struct CutsceneTrigger {
    pub script_id: String,
    pub fired: bool,
}

/// Zone that reassembles a dismembered player whose head rolls in.
#[derive(Component, Debug)]
pub struct RecomposeZone;

/// Pickup granting an ability by key. Consumed on touch.
#[derive(Component, Debug)]
pub struct AbilityShrine {
    pub key: String,
}

/// Flag animation states for a checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlagState {
    #[default]
    Lowered,
    Raising,
    Raised,
}

/// Component for flag animation playback on a checkpoint.
#[derive(Component, Debug)]
pub struct CheckpointFlag {
    /// Current animation state.
    pub state: FlagState,
    /// Current frame index (0-based).
    pub current_frame: u32,
    /// Total frames in the current animation.
    pub total_frames: u32,
    /// Time accumulator for frame timing.
    pub frame_timer: f32,
    /// Seconds per frame.
    pub frame_duration: f32,
    /// Whether the animation should loop.
    pub looping: bool,
    /// Whether the animation has finished (for non-looping).
    pub finished: bool,
}

impl Default for CheckpointFlag {
    fn default() -> Self {
        let mut flag = Self {
            state: FlagState::Lowered,
            current_frame: 0,
            total_frames: 1,
            frame_timer: 0.0,
            frame_duration: 0.12,
            looping: true,
            finished: false,
        };
        flag.apply_state_config();
        flag
    }
}

impl CheckpointFlag {
    /// Set the animation state, resetting the frame if it changed.
    pub fn set_state(&mut self, state: FlagState) {
        if self.state != state {
            self.state = state;
            self.current_frame = 0;
            self.frame_timer = 0.0;
            self.finished = false;
            self.apply_state_config();
        }
    }

    fn apply_state_config(&mut self) {
        self.looping = matches!(self.state, FlagState::Lowered | FlagState::Raised);
        self.total_frames = match self.state {
            FlagState::Lowered => 1,
            FlagState::Raising => 4,
            FlagState::Raised => 2,
        };
    }

    /// Advance frame timing. Returns true on the tick a non-looping
    /// animation finishes.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.finished {
            return false;
        }

        self.frame_timer += dt;
        while self.frame_timer >= self.frame_duration {
            self.frame_timer -= self.frame_duration;
            self.current_frame += 1;

            if self.current_frame >= self.total_frames {
                if self.looping {
                    self.current_frame = 0;
                } else {
                    self.current_frame = self.total_frames - 1;
                    self.finished = true;
                    return true;
                }
            }
        }
        false
    }
}
