//! Sequencer domain: unit tests for timeline and typewriter drivers.

use super::{Ease, TimedStep, Timeline, TimelineStatus, Typewriter, TypewriterTiming};

// -----------------------------------------------------------------------------
// Timeline tests
// -----------------------------------------------------------------------------

#[test]
fn test_tween_interpolates_and_snaps_exactly() {
    let mut tl = Timeline::tween(0.0, 10.0, 1.0);

    assert_eq!(tl.advance(0.5), TimelineStatus::Running);
    assert!((tl.value() - 5.0).abs() < 1e-4);

    // Overshooting the duration still lands exactly on the target.
    assert_eq!(tl.advance(0.7), TimelineStatus::Finished);
    assert_eq!(tl.value(), 10.0);
    assert!(tl.is_finished());
}

#[test]
fn test_multi_step_crosses_boundaries_in_one_tick() {
    let mut tl = Timeline::tween(0.0, 4.0, 0.1)
        .then_delay(0.1)
        .then_tween(8.0, 0.1);

    // One large delta covers all three steps.
    assert_eq!(tl.advance(1.0), TimelineStatus::Finished);
    assert_eq!(tl.value(), 8.0);
}

#[test]
fn test_step_boundary_snap_eliminates_drift() {
    let mut tl = Timeline::tween(0.0, 1.0, 0.3);

    // Many uneven ticks; the final value must be exact.
    for _ in 0..7 {
        tl.advance(0.044);
    }
    assert_eq!(tl.advance(1.0), TimelineStatus::Finished);
    assert_eq!(tl.value(), 1.0);
}

#[test]
fn test_cancel_stops_without_completing() {
    let mut tl = Timeline::tween(0.0, 10.0, 1.0);
    tl.advance(0.3);
    let mid = tl.value();
    tl.cancel();

    assert!(tl.is_finished());
    assert_eq!(tl.advance(5.0), TimelineStatus::Finished);
    // Value stays at the interruption point, never snapping to 10.
    assert_eq!(tl.value(), mid);
}

#[test]
fn test_hold_step_jumps_at_entry() {
    let mut tl = Timeline::new(
        0.0,
        vec![TimedStep {
            target: 3.0,
            duration: 1.0,
            ease: Ease::Hold,
        }],
    );

    tl.advance(0.01);
    assert_eq!(tl.value(), 3.0);
    assert!(!tl.is_finished());
}

#[test]
fn test_bounce_alternates_and_restores_rest_offset() {
    let mut tl = Timeline::bounce(0.0, -6.0, 3, 0.6);

    tl.advance(0.05);
    assert_eq!(tl.value(), -6.0);
    tl.advance(0.1);
    assert_eq!(tl.value(), 0.0);
    tl.advance(0.1);
    assert_eq!(tl.value(), -6.0);

    assert_eq!(tl.advance(10.0), TimelineStatus::Finished);
    assert_eq!(tl.value(), 0.0);
}

#[test]
fn test_zero_duration_step_snaps_immediately() {
    let mut tl = Timeline::tween(0.0, 5.0, 0.0).then_tween(2.0, 0.1);
    assert_eq!(tl.advance(0.05), TimelineStatus::Running);
    assert!((tl.value() - 3.5).abs() < 1e-4);
}

#[test]
fn test_unscaled_flag_round_trips() {
    assert!(!Timeline::tween(0.0, 1.0, 1.0).is_unscaled());
    assert!(Timeline::tween(0.0, 1.0, 1.0).unscaled().is_unscaled());
}

// -----------------------------------------------------------------------------
// Typewriter tests
// -----------------------------------------------------------------------------

fn timing() -> TypewriterTiming {
    TypewriterTiming {
        glyph_delay: 0.1,
        comma_delay: 0.3,
        sentence_delay: 0.5,
    }
}

#[test]
fn test_reveal_is_monotonic_and_completes_at_stripped_length() {
    let mut tw = Typewriter::new("Hi there");
    let timing = timing();
    assert_eq!(tw.visible_len(), 8);

    let mut last = 0;
    for _ in 0..200 {
        tw.advance(0.05, &timing);
        assert!(tw.revealed() >= last);
        last = tw.revealed();
    }
    assert!(tw.is_complete());
    assert_eq!(tw.revealed(), 8);
    assert_eq!(tw.visible_text(), "Hi there");
}

#[test]
fn test_markup_spans_are_never_counted_or_revealed() {
    let mut tw = Typewriter::new("<color=red>Hot</color> lava");
    assert_eq!(tw.visible_len(), "Hot lava".len());

    tw.skip_to_end();
    assert_eq!(tw.visible_text(), "Hot lava");
}

#[test]
fn test_icon_span_counts_as_one_visible_unit() {
    let tw = Typewriter::new("Press <icon=action> now");
    // "Press " + icon + " now"
    assert_eq!(tw.visible_len(), 6 + 1 + 4);
}

#[test]
fn test_unterminated_tag_is_literal_text() {
    let tw = Typewriter::new("a < b");
    assert_eq!(tw.visible_len(), 5);
}

#[test]
fn test_punctuation_pauses_delay_the_next_glyph() {
    let mut tw = Typewriter::new("a,b");
    let timing = timing();

    tw.advance(0.1, &timing);
    assert_eq!(tw.revealed(), 1); // 'a'
    tw.advance(0.1, &timing);
    assert_eq!(tw.revealed(), 2); // ','
    // The comma pause holds back 'b' longer than a normal glyph delay.
    tw.advance(0.1, &timing);
    assert_eq!(tw.revealed(), 2);
    tw.advance(0.3, &timing);
    assert_eq!(tw.revealed(), 3);
}

#[test]
fn test_sentence_pause_is_longest() {
    let mut tw = Typewriter::new("a.b");
    let timing = timing();

    tw.advance(0.2, &timing); // reveals 'a' and '.'
    assert_eq!(tw.revealed(), 2);
    tw.advance(0.4, &timing);
    assert_eq!(tw.revealed(), 2);
    tw.advance(0.2, &timing);
    assert_eq!(tw.revealed(), 3);
}

#[test]
fn test_blips_fire_every_second_nonspace_unit() {
    let mut tw = Typewriter::new("ab cd");
    let timing = timing();

    let mut blips = 0;
    while !tw.is_complete() {
        blips += tw.advance(0.1, &timing).blips;
    }
    // Four non-space glyphs reveal two blips; the space contributes none.
    assert_eq!(blips, 2);
}

#[test]
fn test_skip_to_end_completes_in_one_step() {
    let mut tw = Typewriter::new("A rather long line of dialogue.");
    let timing = timing();
    tw.advance(0.25, &timing);
    let before = tw.revealed();
    assert!(before < tw.visible_len());

    let skipped = tw.skip_to_end();
    assert_eq!(before + skipped, tw.visible_len());
    assert!(tw.is_complete());

    // Further ticks are inert.
    let tick = tw.advance(1.0, &timing);
    assert_eq!(tick.newly_revealed, 0);
    assert_eq!(tw.revealed(), tw.visible_len());
}
