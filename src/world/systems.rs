//! World domain: trigger zone reactions and checkpoint animation.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::ecs::query::{QueryData, QueryFilter};
use bevy::prelude::*;

use crate::abilities::AbilityUnlockRequested;
use crate::core::RespawnAnchor;
use crate::dialogue::StartDialogueEvent;
use crate::movement::{CollisionFocus, RecomposeRequested};
use crate::world::components::{
    AbilityShrine, Checkpoint, CheckpointFlag, CutsceneTrigger, FlagState, RecomposeZone,
};
use crate::world::events::CheckpointActivatedEvent;

/// Pull the zone entity out of a collision pair when the other side is
/// the live collision target.
fn zone_hit<D: QueryData, F: QueryFilter>(
    event: &CollisionStart,
    zone_query: &Query<D, F>,
    focus_query: &Query<(), With<CollisionFocus>>,
) -> Option<Entity> {
    let (zone, other) = if zone_query.contains(event.collider1) {
        (event.collider1, event.collider2)
    } else if zone_query.contains(event.collider2) {
        (event.collider2, event.collider1)
    } else {
        return None;
    };
    focus_query.contains(other).then_some(zone)
}

/// Move the respawn anchor to a touched checkpoint and raise its flag.
/// Re-touching the active checkpoint is a silent no-op.
pub(crate) fn activate_checkpoints(
    mut collision_events: MessageReader<CollisionStart>,
    mut checkpoint_query: Query<(Entity, &Checkpoint, &Transform, &mut CheckpointFlag)>,
    focus_query: Query<(), With<CollisionFocus>>,
    mut anchor: ResMut<RespawnAnchor>,
    mut activated_events: MessageWriter<CheckpointActivatedEvent>,
) {
    for event in collision_events.read() {
        let Some(zone) = zone_hit(event, &checkpoint_query, &focus_query) else {
            continue;
        };
        if anchor.checkpoint == Some(zone) {
            continue;
        }
        let Ok((entity, checkpoint, transform, mut flag)) = checkpoint_query.get_mut(zone) else {
            continue;
        };

        anchor.position = transform.translation.truncate() + Vec2::new(0.0, 20.0);
        anchor.checkpoint = Some(entity);
        flag.set_state(FlagState::Raising);
        activated_events.write(CheckpointActivatedEvent { checkpoint: entity });
        info!("[CHECKPOINT] '{}' active", checkpoint.id);
    }
}

/// Step flag frames; a finished raise forces the raised idle loop as its
/// follow-up state.
pub(crate) fn animate_checkpoint_flags(
    time: Res<Time>,
    mut query: Query<(&mut CheckpointFlag, &mut Sprite)>,
) {
    let dt = time.delta_secs();
    for (mut flag, mut sprite) in &mut query {
        if flag.tick(dt) && flag.state == FlagState::Raising {
            flag.set_state(FlagState::Raised);
        }

        // Placeholder frame rendering until the atlas lands: tint by
        // state and pulse the raised loop.
        sprite.color = match flag.state {
            FlagState::Lowered => Color::srgb(0.5, 0.5, 0.55),
            FlagState::Raising => {
                let t = (flag.current_frame + 1) as f32 / flag.total_frames as f32;
                Color::srgb(0.5 - 0.2 * t, 0.5 + 0.3 * t, 0.55 - 0.15 * t)
            }
            FlagState::Raised => {
                if flag.current_frame == 0 {
                    Color::srgb(0.3, 0.8, 0.4)
                } else {
                    Color::srgb(0.35, 0.7, 0.4)
                }
            }
        };
    }
}

/// Fire each cutscene zone's conversation once.
pub(crate) fn fire_cutscene_triggers(
    mut collision_events: MessageReader<CollisionStart>,
    mut trigger_query: Query<&mut CutsceneTrigger>,
    focus_query: Query<(), With<CollisionFocus>>,
    mut dialogue_events: MessageWriter<StartDialogueEvent>,
) {
    for event in collision_events.read() {
        let Some(zone) = zone_hit(event, &trigger_query, &focus_query) else {
            continue;
        };
        let Ok(mut trigger) = trigger_query.get_mut(zone) else {
            continue;
        };
        if trigger.fired {
            continue;
        }
        trigger.fired = true;
        dialogue_events.write(StartDialogueEvent {
            script_id: trigger.script_id.clone(),
        });
    }
}

/// Shrines grant their ability and vanish.
pub(crate) fn grant_shrine_abilities(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionStart>,
    shrine_query: Query<(Entity, &AbilityShrine)>,
    focus_query: Query<(), With<CollisionFocus>>,
    mut unlock_events: MessageWriter<AbilityUnlockRequested>,
) {
    for event in collision_events.read() {
        let Some(zone) = zone_hit(event, &shrine_query, &focus_query) else {
            continue;
        };
        let Ok((entity, shrine)) = shrine_query.get(zone) else {
            continue;
        };
        unlock_events.write(AbilityUnlockRequested {
            key: shrine.key.clone(),
        });
        commands.entity(entity).despawn();
    }
}

/// A recompose basin reassembles the player when the detached head (the
/// current collision target) rolls in. The request only applies while
/// actually dismembered; the handler guards that.
pub(crate) fn detect_recompose_zones(
    mut collision_events: MessageReader<CollisionStart>,
    zone_query: Query<(), With<RecomposeZone>>,
    focus_query: Query<(), With<CollisionFocus>>,
    mut recompose_events: MessageWriter<RecomposeRequested>,
) {
    for event in collision_events.read() {
        if zone_hit(event, &zone_query, &focus_query).is_some() {
            recompose_events.write(RecomposeRequested);
        }
    }
}
