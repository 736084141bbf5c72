//! Core domain: shared resources for time flow, camera, and respawn anchor.

use bevy::prelude::*;
use std::collections::HashSet;

/// Resource tracking whether scaled game time should be frozen.
/// Time is frozen while any source holds a freeze.
#[derive(Resource, Debug, Default)]
pub struct TimeFreeze {
    pub sources: HashSet<String>,
}

impl TimeFreeze {
    pub fn is_frozen(&self) -> bool {
        !self.sources.is_empty()
    }

    pub fn freeze(&mut self, source: impl Into<String>) {
        self.sources.insert(source.into());
    }

    pub fn thaw(&mut self, source: impl Into<String>) {
        self.sources.remove(&source.into());
    }
}

/// Camera-follow switch with a parking spot for the death sequence.
#[derive(Resource, Debug)]
pub struct CameraFollow {
    pub enabled: bool,
    pub saved_position: Option<Vec3>,
}

impl Default for CameraFollow {
    fn default() -> Self {
        Self {
            enabled: true,
            saved_position: None,
        }
    }
}

impl CameraFollow {
    /// Stop following and remember where the camera was.
    pub fn suspend(&mut self, current: Vec3) {
        if self.enabled {
            self.enabled = false;
            self.saved_position = Some(current);
        }
    }

    /// Resume following, handing back the position to restore to.
    pub fn resume(&mut self) -> Option<Vec3> {
        self.enabled = true;
        self.saved_position.take()
    }
}

/// Where the player comes back after dying. Updated by checkpoints.
#[derive(Resource, Debug)]
pub struct RespawnAnchor {
    pub position: Vec2,
    pub checkpoint: Option<Entity>,
}

impl Default for RespawnAnchor {
    fn default() -> Self {
        Self {
            position: Vec2::new(0.0, 60.0),
            checkpoint: None,
        }
    }
}
