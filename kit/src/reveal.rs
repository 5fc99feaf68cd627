//! Scroll reveal timeline.
//!
//! Hidden content sits at zero opacity, shifted down by
//! [`REVEAL_OFFSET_PX`]. When the gate fires, the content waits `delay_ms`
//! and then eases to full opacity and zero offset over `transition_ms`. The
//! browser runs the actual CSS transition; this type mirrors it so the host
//! can pick class hooks and inline timing, and so the timing is testable.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::consts::{REVEAL_OFFSET_PX, REVEAL_TRANSITION_MS};
use crate::easing::CubicBezier;
use crate::gate::{Gated, VisibilityGate};

/// Class hook applied before the gate fires.
pub const HIDDEN_CLASS: &str = "reveal reveal--hidden";

/// Class hook applied once the gate has fired.
pub const VISIBLE_CLASS: &str = "reveal reveal--visible";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// Gate closed.
    Hidden,
    /// Gate fired, delay still running.
    Delayed,
    /// Transition in progress.
    Transitioning,
    /// Fully visible.
    Visible,
}

/// Presentational transform at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub opacity: f64,
    /// Downward offset in CSS pixels.
    pub offset_px: f64,
}

impl RevealStyle {
    pub const HIDDEN: Self = Self { opacity: 0.0, offset_px: REVEAL_OFFSET_PX };
    pub const VISIBLE: Self = Self { opacity: 1.0, offset_px: 0.0 };

    fn at(eased: f64) -> Self {
        Self { opacity: eased, offset_px: REVEAL_OFFSET_PX * (1.0 - eased) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollReveal {
    gate: VisibilityGate,
    delay_ms: f64,
    transition_ms: f64,
    curve: CubicBezier,
}

impl ScrollReveal {
    /// Reveal with the default gate, transition length and `ease-out` curve.
    /// Negative or non-finite delays are treated as 0.
    #[must_use]
    pub fn new(delay_ms: f64) -> Self {
        Self {
            gate: VisibilityGate::default(),
            delay_ms: non_negative(delay_ms),
            transition_ms: REVEAL_TRANSITION_MS,
            curve: CubicBezier::EASE_OUT,
        }
    }

    #[must_use]
    pub fn with_transition_ms(mut self, transition_ms: f64) -> Self {
        self.transition_ms = non_negative(transition_ms);
        self
    }

    #[must_use]
    pub fn with_curve(mut self, curve: CubicBezier) -> Self {
        self.curve = curve;
        self
    }

    #[must_use]
    pub fn delay_ms(&self) -> f64 {
        self.delay_ms
    }

    #[must_use]
    pub fn transition_ms(&self) -> f64 {
        self.transition_ms
    }

    /// Whether the gate has fired. Once true, stays true.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.gate.is_fired()
    }

    /// When the transition starts, once the gate has fired.
    #[must_use]
    pub fn transition_starts_at(&self) -> Option<f64> {
        self.gate.fired_at_ms().map(|fired| fired + self.delay_ms)
    }

    /// When the content becomes fully visible, once the gate has fired.
    #[must_use]
    pub fn transition_ends_at(&self) -> Option<f64> {
        self.transition_starts_at().map(|start| start + self.transition_ms)
    }

    #[must_use]
    pub fn phase_at(&self, now_ms: f64) -> RevealPhase {
        let (Some(start), Some(end)) = (self.transition_starts_at(), self.transition_ends_at()) else {
            return RevealPhase::Hidden;
        };
        if now_ms < start {
            RevealPhase::Delayed
        } else if now_ms < end {
            RevealPhase::Transitioning
        } else {
            RevealPhase::Visible
        }
    }

    #[must_use]
    pub fn style_at(&self, now_ms: f64) -> RevealStyle {
        let Some(start) = self.transition_starts_at() else {
            return RevealStyle::HIDDEN;
        };
        if now_ms < start {
            return RevealStyle::HIDDEN;
        }
        if self.transition_ms <= 0.0 {
            return RevealStyle::VISIBLE;
        }
        let t = (now_ms - start) / self.transition_ms;
        if t >= 1.0 {
            return RevealStyle::VISIBLE;
        }
        RevealStyle::at(self.curve.apply(t))
    }

    /// Class hook for the current visibility flag.
    #[must_use]
    pub fn class_hook(&self) -> &'static str {
        class_hook(self.is_visible())
    }

    /// Inline CSS timing for the host element, curve included, so the
    /// browser runs exactly the transition [`ScrollReveal::style_at`] models.
    #[must_use]
    pub fn transition_style(&self) -> String {
        format!(
            "transition-delay: {}ms; transition-duration: {}ms; transition-timing-function: {};",
            self.delay_ms,
            self.transition_ms,
            self.curve.css()
        )
    }
}

impl Gated for ScrollReveal {
    fn gate(&self) -> &VisibilityGate {
        &self.gate
    }

    fn gate_mut(&mut self) -> &mut VisibilityGate {
        &mut self.gate
    }
}

/// Class hook for a visibility flag.
#[must_use]
pub fn class_hook(visible: bool) -> &'static str {
    if visible { VISIBLE_CLASS } else { HIDDEN_CLASS }
}

fn non_negative(ms: f64) -> f64 {
    if ms.is_finite() { ms.max(0.0) } else { 0.0 }
}
