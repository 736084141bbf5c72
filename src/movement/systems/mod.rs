//! Movement domain: system modules for player control.

pub(crate) mod dismember;
pub(crate) mod gravity;
pub(crate) mod grounded;
pub(crate) mod input;
pub(crate) mod locomotion;

pub(crate) use dismember::{apply_head_gravity, handle_dismember, handle_recompose};
pub(crate) use gravity::{sync_visual_orientation, trigger_armed_action};
pub(crate) use grounded::probe_ground;
pub(crate) use input::read_input;
pub(crate) use locomotion::{
    apply_gravity, apply_hop, apply_horizontal_movement, enforce_movement_lock,
    freeze_during_dialogue, sync_animation_params, update_facing, update_timers,
};
