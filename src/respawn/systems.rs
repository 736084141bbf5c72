//! Respawn domain: death detection and the dying phase machine.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::{CameraFollow, GameState, RespawnAnchor, TimeFreeze};
use crate::currency::{CoinCounter, CoinsLostEvent, Wallet};
use crate::movement::{
    CollisionFocus, ControlMode, GravityOrientation, MoveState, Player, ProxyRig,
};
use crate::respawn::components::DeathZone;
use crate::respawn::events::{PlayerDiedEvent, PlayerRespawnedEvent};
use crate::respawn::resources::{
    DyingPhase, DyingSequence, RespawnConfig, RespawnSequence, compute_loss, is_terminal,
    next_phase,
};
use crate::ui::{CoinHudState, DeathHud, ScreenFade};

const FREEZE_SOURCE: &str = "death";

/// Touching a death zone kills whichever body currently carries the
/// collision focus (the head proxy while dismembered).
pub(crate) fn detect_death_zone_contact(
    mut collision_events: MessageReader<CollisionStart>,
    zone_query: Query<(), With<DeathZone>>,
    focus_query: Query<(), With<CollisionFocus>>,
    mut died_events: MessageWriter<PlayerDiedEvent>,
) {
    for event in collision_events.read() {
        let pair = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];
        for (zone, other) in pair {
            if zone_query.get(zone).is_ok() && focus_query.get(other).is_ok() {
                died_events.write(PlayerDiedEvent);
                return;
            }
        }
    }
}

/// Start the dying choreography: hide the player's presence, park the
/// camera, freeze game time. Death while already dying is a no-op.
pub(crate) fn begin_death_sequence(
    mut commands: Commands,
    mut died_events: MessageReader<PlayerDiedEvent>,
    config: Res<RespawnConfig>,
    rig: Res<ProxyRig>,
    mut sequence: ResMut<RespawnSequence>,
    mut freeze: ResMut<TimeFreeze>,
    mut camera_follow: ResMut<CameraFollow>,
    camera_query: Query<&Transform, With<Camera2d>>,
    mut player_query: Query<
        (Entity, &mut ControlMode, &mut LinearVelocity),
        (With<Player>, Without<Camera2d>),
    >,
) {
    if died_events.read().count() == 0 {
        return;
    }
    if sequence.is_dying() {
        debug!("[DEATH] Already dying, extra trigger ignored");
        return;
    }
    let Ok((player_entity, mut mode, mut velocity)) = player_query.single_mut() else {
        return;
    };

    info!("[DEATH] Sequence started");
    *mode = ControlMode::MovementLocked;
    velocity.0 = Vec2::ZERO;
    commands
        .entity(player_entity)
        .insert((Visibility::Hidden, RigidBodyDisabled, ColliderDisabled));

    // Dismemberment proxies vanish too; the rig reassembles on restore.
    for proxy in [rig.head, rig.body].into_iter().flatten() {
        commands
            .entity(proxy)
            .insert((Visibility::Hidden, RigidBodyDisabled, ColliderDisabled))
            .remove::<CollisionFocus>();
    }

    if let Ok(camera_transform) = camera_query.single() {
        camera_follow.suspend(camera_transform.translation);
    }
    freeze.freeze(FREEZE_SOURCE);

    sequence.active = Some(DyingSequence {
        phase: DyingPhase::Hide,
        timer: config.phase_duration(DyingPhase::Hide),
        pending_loss: 0,
        terminal: false,
    });
}

/// Drive the phase machine on the real clock. Each phase applies its
/// entry effects once, waits out its duration, and hands over.
pub(crate) fn tick_death_sequence(
    mut commands: Commands,
    real_time: Res<Time<Real>>,
    config: Res<RespawnConfig>,
    anchor: Res<RespawnAnchor>,
    mut sequence: ResMut<RespawnSequence>,
    mut wallet: ResMut<Wallet>,
    mut counter: ResMut<CoinCounter>,
    huds: (ResMut<ScreenFade>, ResMut<DeathHud>, ResMut<CoinHudState>),
    mut freeze: ResMut<TimeFreeze>,
    mut camera_follow: ResMut<CameraFollow>,
    writers: (
        MessageWriter<CoinsLostEvent>,
        MessageWriter<PlayerRespawnedEvent>,
    ),
    mut next_state: ResMut<NextState<GameState>>,
    mut camera_query: Query<&mut Transform, (With<Camera2d>, Without<Player>)>,
    mut player_query: Query<
        (
            Entity,
            &mut Transform,
            &mut ControlMode,
            &mut GravityOrientation,
            &mut MoveState,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    let (mut fade, mut death_hud, mut coin_hud) = huds;
    let (mut lost_events, mut respawned_events) = writers;
    let Some(dying) = sequence.active.as_mut() else {
        return;
    };

    dying.timer -= real_time.delta_secs();
    if dying.timer > 0.0 {
        return;
    }

    match next_phase(dying.phase, dying.terminal) {
        Some(next) => {
            match next {
                DyingPhase::FadeOut => {
                    fade.start(1.0, config.fade_duration);
                }
                DyingPhase::RevealHud => {
                    death_hud.show_random();
                    coin_hud.visible = false;
                }
                DyingPhase::Penalty => {
                    let loss =
                        compute_loss(wallet.total, config.penalty, wallet.has_ever_collected());
                    let actual = wallet.penalize(loss);
                    dying.pending_loss = actual;
                    dying.terminal = is_terminal(wallet.total, wallet.has_ever_collected());

                    // The counter channel may still hold a pickup tween;
                    // retargeting cancels it before the authoritative write
                    // shows up on screen.
                    counter.retarget(wallet.displayed, wallet.total, config.count_duration, true);
                    if actual > 0 {
                        lost_events.write(CoinsLostEvent {
                            amount: actual,
                            total_after: wallet.total,
                        });
                    }
                    info!(
                        "[DEATH] Penalty {} coins, {} remain (terminal: {})",
                        actual, wallet.total, dying.terminal
                    );
                }
                DyingPhase::TerminalPause => {}
                DyingPhase::HudOut => {
                    death_hud.hide();
                    coin_hud.visible = true;

                    // Camera snaps back to where it was parked.
                    if let (Some(saved), Ok(mut camera_transform)) =
                        (camera_follow.resume(), camera_query.single_mut())
                    {
                        camera_transform.translation = saved;
                    }

                    // The player reappears at the anchor while the screen
                    // is still opaque, locked until the fade finishes.
                    if let Ok((entity, mut transform, mut mode, mut orientation, mut state, mut velocity)) =
                        player_query.single_mut()
                    {
                        transform.translation = anchor.position.extend(0.0);
                        transform.rotation = Quat::IDENTITY;
                        *orientation = GravityOrientation::Normal;
                        *mode = ControlMode::MovementLocked;
                        state.grounded = false;
                        state.pessimistic_unground = false;
                        velocity.0 = Vec2::ZERO;
                        commands
                            .entity(entity)
                            .insert((Visibility::Visible, CollisionFocus))
                            .remove::<RigidBodyDisabled>()
                            .remove::<ColliderDisabled>();
                    }
                }
                DyingPhase::FadeIn => {
                    fade.start(0.0, config.fade_duration);
                }
                DyingPhase::Hide => {}
            }
            dying.phase = next;
            dying.timer = config.phase_duration(next);
        }
        None => {
            let ended = dying.phase;
            sequence.active = None;
            freeze.thaw(FREEZE_SOURCE);

            match ended {
                DyingPhase::TerminalPause => {
                    info!("[DEATH] Out of coins, game over");
                    next_state.set(GameState::GameOver);
                }
                _ => {
                    if let Ok((_, _, mut mode, _, _, _)) = player_query.single_mut() {
                        *mode = ControlMode::Normal;
                    }
                    respawned_events.write(PlayerRespawnedEvent);
                    info!("[DEATH] Respawned at {:?}", anchor.position);
                }
            }
        }
    }
}
