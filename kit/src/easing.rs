//! Easing curves mapping normalized progress `t` in [0, 1] to [0, 1].
//!
//! Inputs outside the unit interval are clamped; `NaN` is treated as 0 so a
//! bad timestamp can never push a widget past its start or end.

#[cfg(test)]
#[path = "easing_test.rs"]
mod easing_test;

const SOLVE_EPSILON: f64 = 1e-7;
const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 64;

/// Clamp `t` into the unit interval, mapping `NaN` to 0.
#[must_use]
pub fn unit(t: f64) -> f64 {
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}

/// Identity easing (constant velocity).
#[must_use]
pub fn linear(t: f64) -> f64 {
    unit(t)
}

/// Quartic ease-out: `1 - (1 - t)^4`. Fast start, long deceleration.
#[must_use]
pub fn ease_out_quart(t: f64) -> f64 {
    let t = unit(t);
    1.0 - (1.0 - t).powi(4)
}

/// A CSS `cubic-bezier(x1, y1, x2, y2)` timing function.
///
/// The curve runs from (0, 0) to (1, 1). `x1` and `x2` must lie in [0, 1] for
/// the curve to be a function of time, which [`CubicBezier::new`] enforces by
/// clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    /// Tailwind's `ease-out`: `cubic-bezier(0, 0, 0.2, 1)`. Sharper than the
    /// CSS keyword, so hosts must emit [`CubicBezier::css`] rather than the
    /// keyword.
    pub const EASE_OUT: Self = Self { x1: 0.0, y1: 0.0, x2: 0.2, y2: 1.0 };

    /// CSS `linear`.
    pub const LINEAR: Self = Self { x1: 0.0, y1: 0.0, x2: 1.0, y2: 1.0 };

    #[must_use]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1: unit(x1), y1, x2: unit(x2), y2 }
    }

    /// The `cubic-bezier(...)` value for a `transition-timing-function`.
    #[must_use]
    pub fn css(&self) -> String {
        format!("cubic-bezier({}, {}, {}, {})", self.x1, self.y1, self.x2, self.y2)
    }

    /// Eased output for progress `t`.
    #[must_use]
    pub fn apply(&self, t: f64) -> f64 {
        let t = unit(t);
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        let s = self.solve_parameter(t);
        sample(self.y1, self.y2, s)
    }

    /// Find the curve parameter `s` whose x coordinate equals `x`.
    fn solve_parameter(&self, x: f64) -> f64 {
        let mut s = x;
        for _ in 0..NEWTON_ITERATIONS {
            let err = sample(self.x1, self.x2, s) - x;
            if err.abs() < SOLVE_EPSILON {
                return s;
            }
            let slope = slope(self.x1, self.x2, s);
            if slope.abs() < 1e-6 {
                break;
            }
            s -= err / slope;
            if !(0.0..=1.0).contains(&s) {
                break;
            }
        }

        // Newton stalled or left the interval; x(s) is monotonic so bisect.
        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        s = x;
        for _ in 0..BISECTION_ITERATIONS {
            let xs = sample(self.x1, self.x2, s);
            if (xs - x).abs() < SOLVE_EPSILON {
                break;
            }
            if xs < x {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
        s
    }
}

/// One coordinate of the bezier with endpoints 0 and 1 and control points
/// `p1`, `p2`, evaluated at parameter `s`.
fn sample(p1: f64, p2: f64, s: f64) -> f64 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    ((a * s + b) * s + c) * s
}

fn slope(p1: f64, p2: f64, s: f64) -> f64 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    (3.0 * a * s + 2.0 * b) * s + c
}
