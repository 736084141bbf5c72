//! Movement domain: dismemberment events.

use bevy::ecs::message::Message;

/// Request to split into head and body proxies. Dispatched by the
/// ability-select overlay.
#[derive(Debug)]
pub struct DismemberRequested;

impl Message for DismemberRequested {}

/// Request to reassemble. Written by recompose trigger zones; the toggle
/// key takes the direct path.
#[derive(Debug)]
pub struct RecomposeRequested;

impl Message for RecomposeRequested {}
