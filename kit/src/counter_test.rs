#![allow(clippy::float_cmp)]

use super::*;
use crate::gate::Observation;

fn visible() -> Observation {
    Observation::new(1.0, true)
}

// =============================================================
// progress
// =============================================================

#[test]
fn progress_clamps_to_unit_interval() {
    assert_eq!(progress(-10.0, 1000.0), 0.0);
    assert_eq!(progress(500.0, 1000.0), 0.5);
    assert_eq!(progress(5000.0, 1000.0), 1.0);
}

#[test]
fn progress_treats_degenerate_duration_as_complete() {
    assert_eq!(progress(0.0, 0.0), 1.0);
    assert_eq!(progress(0.0, -5.0), 1.0);
    assert_eq!(progress(0.0, f64::NAN), 1.0);
    assert_eq!(progress(0.0, f64::INFINITY), 1.0);
}

#[test]
fn progress_treats_nan_elapsed_as_start() {
    assert_eq!(progress(f64::NAN, 1000.0), 0.0);
}

// =============================================================
// counter_value_at
// =============================================================

#[test]
fn value_at_start_is_zero() {
    assert_eq!(counter_value_at(70, 2000.0, 0.0), 0);
}

#[test]
fn value_at_duration_is_exactly_target() {
    for target in [0_u64, 1, 4, 7, 70, 999, 123_456_789] {
        for duration in [1.0, 16.0, 1800.0, 2000.0, 2500.0, 10_000.0] {
            assert_eq!(counter_value_at(target, duration, duration), target);
        }
    }
}

#[test]
fn value_past_duration_stays_at_target() {
    assert_eq!(counter_value_at(70, 2000.0, 9000.0), 70);
}

#[test]
fn value_is_monotonic_in_elapsed() {
    for target in [4_u64, 7, 70, 10_000] {
        let duration = 2000.0;
        let mut prev = 0;
        for step in 0..=400 {
            let elapsed = duration * f64::from(step) / 400.0;
            let v = counter_value_at(target, duration, elapsed);
            assert!(v >= prev, "target {target} regressed at {elapsed}");
            assert!(v <= target);
            prev = v;
        }
    }
}

#[test]
fn value_at_midpoint_follows_quartic_curve() {
    // floor(0.9375 * 70) = 65
    assert_eq!(counter_value_at(70, 2000.0, 1000.0), 65);
}

// =============================================================
// CounterAnimation
// =============================================================

#[test]
fn first_frame_sets_origin() {
    let mut anim = CounterAnimation::new(70, 2000.0);
    assert_eq!(anim.frame(5000.0), FrameOutcome::Continue);
    assert_eq!(anim.value(), 0);
    anim.frame(6000.0);
    assert_eq!(anim.value(), 65);
}

#[test]
fn animation_finishes_exactly_on_target() {
    let mut anim = CounterAnimation::new(7, 1800.0);
    let mut ts = 100.0;
    let mut outcome = anim.frame(ts);
    while outcome == FrameOutcome::Continue {
        ts += 16.7;
        outcome = anim.frame(ts);
    }
    assert_eq!(outcome, FrameOutcome::Done);
    assert_eq!(anim.value(), 7);
    assert!(anim.is_done());
}

#[test]
fn frames_after_done_keep_reporting_done() {
    let mut anim = CounterAnimation::new(4, 10.0);
    anim.frame(0.0);
    assert_eq!(anim.frame(10.0), FrameOutcome::Done);
    assert_eq!(anim.frame(20.0), FrameOutcome::Done);
    assert_eq!(anim.value(), 4);
}

#[test]
fn value_never_decreases_on_backwards_timestamp() {
    let mut anim = CounterAnimation::new(100, 1000.0);
    anim.frame(0.0);
    anim.frame(500.0);
    let high = anim.value();
    anim.frame(100.0);
    assert_eq!(anim.value(), high);
}

#[test]
fn zero_duration_completes_on_first_frame() {
    let mut anim = CounterAnimation::new(70, 0.0);
    assert_eq!(anim.frame(1.0), FrameOutcome::Done);
    assert_eq!(anim.value(), 70);
}

#[test]
fn finish_jumps_to_target() {
    let mut anim = CounterAnimation::new(70, 2000.0);
    anim.finish();
    assert_eq!(anim.value(), 70);
    assert!(anim.is_done());
}

// =============================================================
// AnimatedCounter (gated)
// =============================================================

#[test]
fn counter_ignores_frames_before_gate() {
    let mut counter = AnimatedCounter::new(70, 2000.0);
    for ts in [0.0, 1000.0, 5000.0] {
        assert_eq!(counter.frame(ts), FrameOutcome::Idle);
        assert_eq!(counter.value(), 0);
    }
}

#[test]
fn counter_finish_is_ignored_before_gate() {
    let mut counter = AnimatedCounter::with_default_duration(70);
    counter.finish();
    assert_eq!(counter.value(), 0);
    assert!(!counter.is_done());
}

#[test]
fn counter_runs_after_gate_fires() {
    let mut counter = AnimatedCounter::with_default_duration(70);
    assert!(counter.observe(visible(), 10.0));
    assert_eq!(counter.frame(20.0), FrameOutcome::Continue);
    assert_eq!(counter.frame(2020.0), FrameOutcome::Done);
    assert_eq!(counter.value(), 70);
}

#[test]
fn counter_time_origin_is_first_frame_not_gate() {
    let mut counter = AnimatedCounter::new(70, 2000.0);
    counter.observe(visible(), 0.0);
    // Frames only start arriving much later; the animation still runs
    // its full duration from the first one.
    counter.frame(10_000.0);
    assert_eq!(counter.value(), 0);
    counter.frame(11_000.0);
    assert_eq!(counter.value(), 65);
}

#[test]
fn counter_respects_custom_gate_threshold() {
    let mut counter = AnimatedCounter::new(7, 100.0).with_gate(VisibilityGate::new(0.5));
    assert!(!counter.observe(Observation::new(0.3, true), 0.0));
    assert_eq!(counter.frame(1.0), FrameOutcome::Idle);
    assert!(counter.observe(Observation::new(0.6, true), 2.0));
    assert_eq!(counter.frame(3.0), FrameOutcome::Continue);
}
