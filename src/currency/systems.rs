//! Currency domain: pickup collection and counter tween driving.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::currency::components::CoinPickup;
use crate::currency::events::{CoinCollectedEvent, CoinsLostEvent};
use crate::currency::resources::{CoinCounter, CoinHudBounce, CurrencyTuning, Wallet};
use crate::movement::CollisionFocus;
use crate::sequencer::{Timeline, TimelineStatus};

/// Collect coins the player touches. A coin despawns on contact, so a
/// second contact event for the same coin in the same frame resolves to a
/// silent no-op through the query miss.
pub(crate) fn collect_coin_pickups(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionStart>,
    coin_query: Query<&CoinPickup>,
    focus_query: Query<Entity, With<CollisionFocus>>,
    tuning: Res<CurrencyTuning>,
    mut wallet: ResMut<Wallet>,
    mut counter: ResMut<CoinCounter>,
    mut bounce: ResMut<CoinHudBounce>,
    mut collected_events: MessageWriter<CoinCollectedEvent>,
) {
    for event in collision_events.read() {
        let (coin_entity, other) = if coin_query.get(event.collider1).is_ok() {
            (event.collider1, event.collider2)
        } else if coin_query.get(event.collider2).is_ok() {
            (event.collider2, event.collider1)
        } else {
            continue;
        };

        if focus_query.get(other).is_err() {
            continue;
        }
        let Ok(coin) = coin_query.get(coin_entity) else {
            continue;
        };

        // Rapid consecutive pickups restart the count from wherever the
        // display currently sits and intensify the feedback.
        wallet.streak = if counter.is_running() {
            wallet.streak + 1
        } else {
            1
        };
        wallet.add(coin.value);

        let duration = tuning.count_duration_for(wallet.streak);
        counter.retarget(wallet.displayed, wallet.total, duration, false);
        bounce.timeline = Some(Timeline::bounce(
            0.0,
            tuning.bounce_offset,
            tuning.bounce_times_for(wallet.streak),
            tuning.bounce_duration,
        ));

        collected_events.write(CoinCollectedEvent {
            amount: coin.value,
            total_after: wallet.total,
        });
        info!(
            "Collected {} coins (streak {}). Total: {}",
            coin.value, wallet.streak, wallet.total
        );
        commands.entity(coin_entity).despawn();
    }
}

/// Advance the counter tween and mirror its value into the displayed
/// count. The tween's final snap lands the display exactly on the target.
pub(crate) fn tick_coin_counter(
    time: Res<Time>,
    real_time: Res<Time<Real>>,
    mut wallet: ResMut<Wallet>,
    mut counter: ResMut<CoinCounter>,
) {
    let Some(timeline) = counter.timeline.as_mut() else {
        return;
    };
    let dt = if timeline.is_unscaled() {
        real_time.delta_secs()
    } else {
        time.delta_secs()
    };

    let status = timeline.advance(dt);
    wallet.displayed = timeline.value().round() as u32;

    if status == TimelineStatus::Finished {
        counter.timeline = None;
        wallet.streak = 0;
    }
}

/// Penalties shake the coin icon the same way pickups do.
pub(crate) fn bounce_on_loss(
    mut lost_events: MessageReader<CoinsLostEvent>,
    tuning: Res<CurrencyTuning>,
    mut bounce: ResMut<CoinHudBounce>,
) {
    for _ in lost_events.read() {
        // Unscaled: losses land while game time is frozen for the death
        // sequence.
        bounce.timeline = Some(
            Timeline::bounce(
                0.0,
                tuning.bounce_offset,
                tuning.bounce_base_times,
                tuning.bounce_duration,
            )
            .unscaled(),
        );
    }
}

/// Advance the HUD icon bounce.
pub(crate) fn tick_hud_bounce(
    time: Res<Time>,
    real_time: Res<Time<Real>>,
    mut bounce: ResMut<CoinHudBounce>,
) {
    let Some(timeline) = bounce.timeline.as_mut() else {
        return;
    };
    let dt = if timeline.is_unscaled() {
        real_time.delta_secs()
    } else {
        time.delta_secs()
    };
    if timeline.advance(dt) == TimelineStatus::Finished {
        bounce.timeline = None;
    }
}
