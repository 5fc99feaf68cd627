#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-6;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// =============================================================
// unit / linear
// =============================================================

#[test]
fn unit_clamps_out_of_range() {
    assert_eq!(unit(-0.5), 0.0);
    assert_eq!(unit(1.5), 1.0);
    assert_eq!(unit(0.25), 0.25);
}

#[test]
fn unit_maps_nan_to_zero() {
    assert_eq!(unit(f64::NAN), 0.0);
}

#[test]
fn linear_is_identity_inside_interval() {
    assert_eq!(linear(0.3), 0.3);
}

// =============================================================
// ease_out_quart
// =============================================================

#[test]
fn ease_out_quart_endpoints() {
    assert_eq!(ease_out_quart(0.0), 0.0);
    assert_eq!(ease_out_quart(1.0), 1.0);
}

#[test]
fn ease_out_quart_midpoint() {
    // 1 - 0.5^4
    assert!(approx_eq(ease_out_quart(0.5), 0.9375));
}

#[test]
fn ease_out_quart_runs_ahead_of_linear() {
    for i in 1..10 {
        let t = f64::from(i) / 10.0;
        assert!(ease_out_quart(t) > linear(t));
    }
}

#[test]
fn ease_out_quart_is_monotonic() {
    let mut prev = 0.0;
    for i in 0..=1000 {
        let v = ease_out_quart(f64::from(i) / 1000.0);
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn ease_out_quart_clamps_input() {
    assert_eq!(ease_out_quart(2.0), 1.0);
    assert_eq!(ease_out_quart(-1.0), 0.0);
}

// =============================================================
// CubicBezier
// =============================================================

#[test]
fn bezier_endpoints() {
    let curve = CubicBezier::EASE_OUT;
    assert_eq!(curve.apply(0.0), 0.0);
    assert_eq!(curve.apply(1.0), 1.0);
}

#[test]
fn bezier_linear_matches_identity() {
    for i in 0..=20 {
        let t = f64::from(i) / 20.0;
        assert!(approx_eq(CubicBezier::LINEAR.apply(t), t));
    }
}

#[test]
fn bezier_ease_out_runs_ahead_of_linear() {
    for i in 1..20 {
        let t = f64::from(i) / 20.0;
        assert!(CubicBezier::EASE_OUT.apply(t) > t);
    }
}

#[test]
fn bezier_ease_out_is_monotonic() {
    let mut prev = 0.0;
    for i in 0..=500 {
        let v = CubicBezier::EASE_OUT.apply(f64::from(i) / 500.0);
        assert!(v + EPSILON >= prev);
        prev = v;
    }
}

#[test]
fn bezier_new_clamps_x_controls() {
    let curve = CubicBezier::new(-1.0, 0.0, 2.0, 1.0);
    assert_eq!(curve, CubicBezier::new(0.0, 0.0, 1.0, 1.0));
}

#[test]
fn bezier_steep_curve_still_solves() {
    // Flat slope at the start forces the bisection fallback.
    let curve = CubicBezier::new(1.0, 0.0, 1.0, 1.0);
    let v = curve.apply(0.5);
    assert!((0.0..=1.0).contains(&v));
}

#[test]
fn bezier_css_spells_out_control_points() {
    assert_eq!(CubicBezier::EASE_OUT.css(), "cubic-bezier(0, 0, 0.2, 1)");
    assert_eq!(CubicBezier::new(0.25, 0.1, 0.25, 1.0).css(), "cubic-bezier(0.25, 0.1, 0.25, 1)");
}

#[test]
fn bezier_ease_out_is_sharper_than_css_keyword() {
    let keyword = CubicBezier::new(0.0, 0.0, 0.58, 1.0);
    for t in [0.25, 0.5, 0.75] {
        assert!(CubicBezier::EASE_OUT.apply(t) > keyword.apply(t) + 0.05, "t={t}");
    }
}
