#![allow(clippy::float_cmp)]

use super::*;
use crate::gate::Observation;

fn fire(reveal: &mut ScrollReveal, at: f64) {
    assert!(reveal.observe(Observation::new(1.0, true), at));
}

// =============================================================
// Before the gate
// =============================================================

#[test]
fn hidden_before_gate() {
    let reveal = ScrollReveal::new(0.0);
    assert!(!reveal.is_visible());
    assert_eq!(reveal.phase_at(1_000_000.0), RevealPhase::Hidden);
    assert_eq!(reveal.style_at(1_000_000.0), RevealStyle::HIDDEN);
    assert_eq!(reveal.class_hook(), HIDDEN_CLASS);
    assert_eq!(reveal.transition_starts_at(), None);
}

#[test]
fn hidden_style_is_transparent_and_offset() {
    assert_eq!(RevealStyle::HIDDEN.opacity, 0.0);
    assert_eq!(RevealStyle::HIDDEN.offset_px, REVEAL_OFFSET_PX);
    assert_eq!(RevealStyle::VISIBLE.offset_px, 0.0);
}

// =============================================================
// Delay and transition
// =============================================================

#[test]
fn delayed_transition_timeline() {
    let mut reveal = ScrollReveal::new(100.0);
    fire(&mut reveal, 5_000.0);

    // Nothing moves before the delay elapses.
    for dt in [0.0, 50.0, 99.9] {
        assert_eq!(reveal.phase_at(5_000.0 + dt), RevealPhase::Delayed);
        assert_eq!(reveal.style_at(5_000.0 + dt), RevealStyle::HIDDEN);
    }

    assert_eq!(reveal.phase_at(5_100.0), RevealPhase::Transitioning);
    let mid = reveal.style_at(5_600.0);
    assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
    assert!(mid.offset_px > 0.0 && mid.offset_px < REVEAL_OFFSET_PX);

    let end = 5_000.0 + 100.0 + REVEAL_TRANSITION_MS;
    assert_eq!(reveal.transition_ends_at(), Some(end));
    assert_eq!(reveal.phase_at(end), RevealPhase::Visible);
    assert_eq!(reveal.style_at(end), RevealStyle::VISIBLE);
}

#[test]
fn opacity_never_decreases_during_transition() {
    let mut reveal = ScrollReveal::new(0.0);
    fire(&mut reveal, 0.0);
    let mut prev = 0.0;
    for step in 0..=100 {
        let style = reveal.style_at(f64::from(step) * 10.0);
        assert!(style.opacity + 1e-9 >= prev);
        prev = style.opacity;
    }
    assert_eq!(prev, 1.0);
}

#[test]
fn zero_transition_snaps_visible_after_delay() {
    let mut reveal = ScrollReveal::new(200.0).with_transition_ms(0.0);
    fire(&mut reveal, 0.0);
    assert_eq!(reveal.style_at(199.0), RevealStyle::HIDDEN);
    assert_eq!(reveal.style_at(200.0), RevealStyle::VISIBLE);
}

#[test]
fn linear_curve_halfway_is_half_opacity() {
    let mut reveal = ScrollReveal::new(0.0).with_curve(CubicBezier::LINEAR);
    fire(&mut reveal, 0.0);
    let half = reveal.style_at(REVEAL_TRANSITION_MS / 2.0);
    assert!((half.opacity - 0.5).abs() < 1e-5);
    assert!((half.offset_px - REVEAL_OFFSET_PX / 2.0).abs() < 1e-3);
}

#[test]
fn negative_delay_is_zero() {
    assert_eq!(ScrollReveal::new(-50.0).delay_ms(), 0.0);
    assert_eq!(ScrollReveal::new(f64::NAN).delay_ms(), 0.0);
}

// =============================================================
// Monotonic visibility + hooks
// =============================================================

#[test]
fn stays_visible_after_leaving_viewport() {
    let mut reveal = ScrollReveal::new(0.0);
    fire(&mut reveal, 0.0);
    assert!(!reveal.observe(Observation::hidden(), 10.0));
    assert!(reveal.is_visible());
    assert_eq!(reveal.class_hook(), VISIBLE_CLASS);
}

#[test]
fn transition_style_reports_timing() {
    let reveal = ScrollReveal::new(300.0);
    assert_eq!(
        reveal.transition_style(),
        "transition-delay: 300ms; transition-duration: 1000ms; \
         transition-timing-function: cubic-bezier(0, 0, 0.2, 1);"
    );
}

#[test]
fn transition_style_carries_the_modeled_curve() {
    let keyword = CubicBezier::new(0.0, 0.0, 0.58, 1.0);
    let reveal = ScrollReveal::new(0.0).with_curve(keyword);
    assert!(reveal.transition_style().ends_with("transition-timing-function: cubic-bezier(0, 0, 0.58, 1);"));

    // The default curve is not the CSS keyword, so it has to be spelled out.
    let default_css = CubicBezier::EASE_OUT.css();
    assert!(ScrollReveal::new(0.0).transition_style().contains(&default_css));
    assert!((CubicBezier::EASE_OUT.apply(0.5) - keyword.apply(0.5)).abs() > 0.1);
}

#[test]
fn class_hook_for_flag() {
    assert_eq!(class_hook(false), HIDDEN_CLASS);
    assert_eq!(class_hook(true), VISIBLE_CLASS);
}
