//! Currency domain: unit tests for the ledger and counter convergence.

use super::resources::{CoinCounter, CurrencyTuning, Wallet};

fn drive_to_completion(counter: &mut CoinCounter, wallet: &mut Wallet) {
    for _ in 0..0xFFF {
        let Some(timeline) = counter.timeline.as_mut() else {
            break;
        };
        timeline.advance(0.016);
        wallet.displayed = timeline.value().round() as u32;
        if timeline.is_finished() {
            counter.timeline = None;
            wallet.streak = 0;
        }
    }
}

#[test]
fn test_displayed_converges_to_total_after_pickups() {
    let mut wallet = Wallet::default();
    let mut counter = CoinCounter::default();

    wallet.add(10);
    counter.retarget(wallet.displayed, wallet.total, 0.4, false);
    drive_to_completion(&mut counter, &mut wallet);

    assert_eq!(wallet.displayed, 10);
    assert_eq!(wallet.total, 10);
    assert!(!counter.is_running());
}

#[test]
fn test_retarget_mid_flight_resumes_from_displayed_value() {
    let mut wallet = Wallet::default();
    let mut counter = CoinCounter::default();

    wallet.add(100);
    counter.retarget(0, 100, 1.0, false);

    // Half the tween runs, then a second pickup lands.
    let timeline = counter.timeline.as_mut().unwrap();
    timeline.advance(0.5);
    wallet.displayed = timeline.value().round() as u32;
    let mid = wallet.displayed;
    assert!(mid > 0 && mid < 100);

    wallet.add(50);
    counter.retarget(wallet.displayed, wallet.total, 1.0, false);

    // The new run starts exactly where the display was interrupted.
    assert_eq!(counter.timeline.as_ref().unwrap().value().round() as u32, mid);

    drive_to_completion(&mut counter, &mut wallet);
    assert_eq!(wallet.displayed, 150);
}

#[test]
fn test_counter_counts_down_for_penalties() {
    let mut wallet = Wallet {
        total: 80,
        displayed: 80,
        ..Default::default()
    };
    let mut counter = CoinCounter::default();

    let loss = wallet.penalize(30);
    assert_eq!(loss, 30);
    counter.retarget(wallet.displayed, wallet.total, 0.5, true);
    assert!(counter.timeline.as_ref().unwrap().is_unscaled());

    drive_to_completion(&mut counter, &mut wallet);
    assert_eq!(wallet.displayed, 50);
}

#[test]
fn test_penalty_clamps_at_zero() {
    let mut wallet = Wallet {
        total: 20,
        displayed: 20,
        ..Default::default()
    };
    assert_eq!(wallet.penalize(500), 20);
    assert_eq!(wallet.total, 0);
}

#[test]
fn test_grace_flag_sets_on_first_pickup_and_persists() {
    let mut wallet = Wallet::default();
    assert!(!wallet.has_ever_collected());

    wallet.add(5);
    assert!(wallet.has_ever_collected());

    // Losing everything does not reset the flag.
    wallet.penalize(5);
    assert_eq!(wallet.total, 0);
    assert!(wallet.has_ever_collected());
}

#[test]
fn test_streak_scales_duration_and_bounces_with_caps() {
    let tuning = CurrencyTuning::default();

    assert_eq!(tuning.count_duration_for(1), tuning.count_duration);
    assert!(tuning.count_duration_for(3) > tuning.count_duration_for(1));
    assert_eq!(tuning.count_duration_for(100), tuning.max_count_duration);

    assert_eq!(tuning.bounce_times_for(1), tuning.bounce_base_times);
    assert_eq!(tuning.bounce_times_for(2), tuning.bounce_base_times + 1);
    assert_eq!(tuning.bounce_times_for(100), tuning.bounce_max_times);
}
