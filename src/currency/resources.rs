//! Currency domain: the coin ledger and its display tweens.

use bevy::prelude::*;

use crate::sequencer::Timeline;

/// The session's coin ledger. `total` is authoritative; `displayed` is
/// what the HUD shows and converges to `total` through the counter tween.
#[derive(Resource, Debug, Default)]
pub struct Wallet {
    pub total: u32,
    pub displayed: u32,
    pub(crate) collected_any: bool,
    /// Consecutive pickups while a count tween was still in flight.
    pub streak: u32,
}

impl Wallet {
    pub fn add(&mut self, amount: u32) {
        self.total = self.total.saturating_add(amount);
        self.collected_any = true;
    }

    /// Remove up to `amount` coins, clamped at zero. Returns the actual
    /// loss.
    pub fn penalize(&mut self, amount: u32) -> u32 {
        let loss = amount.min(self.total);
        self.total -= loss;
        loss
    }

    /// True once any coin has ever been collected this session. Never
    /// resets; the first death before any pickup is forgiven.
    pub fn has_ever_collected(&self) -> bool {
        self.collected_any
    }
}

/// The single channel for counter tweens. Starting a new run cancels
/// whatever was in flight, so the displayed value always chases the
/// latest authoritative total.
#[derive(Resource, Debug, Default)]
pub struct CoinCounter {
    pub timeline: Option<Timeline>,
}

impl CoinCounter {
    pub fn is_running(&self) -> bool {
        self.timeline.as_ref().is_some_and(|tl| !tl.is_finished())
    }

    /// Cancel any in-flight run and start counting from `from` to `to`.
    pub fn retarget(&mut self, from: u32, to: u32, duration: f32, unscaled: bool) {
        self.cancel();
        let mut timeline = Timeline::tween(from as f32, to as f32, duration);
        if unscaled {
            timeline = timeline.unscaled();
        }
        self.timeline = Some(timeline);
    }

    pub fn cancel(&mut self) {
        if let Some(timeline) = self.timeline.as_mut() {
            timeline.cancel();
        }
        self.timeline = None;
    }
}

/// Bounce offset channel for the coin HUD icon.
#[derive(Resource, Debug, Default)]
pub struct CoinHudBounce {
    pub timeline: Option<Timeline>,
}

impl CoinHudBounce {
    pub fn offset(&self) -> f32 {
        self.timeline.as_ref().map(|tl| tl.value()).unwrap_or(0.0)
    }
}

#[derive(Resource, Debug, Clone)]
pub struct CurrencyTuning {
    /// Base duration of a count tween.
    pub count_duration: f32,
    /// Extra duration per consecutive pickup.
    pub streak_duration_step: f32,
    pub max_count_duration: f32,
    pub bounce_offset: f32,
    pub bounce_base_times: u32,
    pub bounce_max_times: u32,
    pub bounce_duration: f32,
}

impl Default for CurrencyTuning {
    fn default() -> Self {
        Self {
            count_duration: 0.45,
            streak_duration_step: 0.2,
            max_count_duration: 2.0,
            bounce_offset: -6.0,
            bounce_base_times: 2,
            bounce_max_times: 6,
            bounce_duration: 0.5,
        }
    }
}

impl CurrencyTuning {
    /// Consecutive pickups lengthen the count.
    pub fn count_duration_for(&self, streak: u32) -> f32 {
        let extra = self.streak_duration_step * streak.saturating_sub(1) as f32;
        (self.count_duration + extra).min(self.max_count_duration)
    }

    /// Consecutive pickups add bounces.
    pub fn bounce_times_for(&self, streak: u32) -> u32 {
        (self.bounce_base_times + streak.saturating_sub(1)).min(self.bounce_max_times)
    }
}
