//! Animated counter that eases from 0 up to a target once it scrolls into view.
//!
//! The displayed value is `floor(ease_out_quart(elapsed / duration) * target)`.
//! Progress is measured from the first animation frame delivered after the
//! gate fires, matching how browsers timestamp `requestAnimationFrame`
//! callbacks. The final frame always shows exactly `target`.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use crate::consts::DEFAULT_COUNTER_DURATION_MS;
use crate::easing::ease_out_quart;
use crate::gate::{Gated, VisibilityGate};

/// What the host should do after delivering a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The gate has not fired; do not schedule frames.
    Idle,
    /// Schedule another frame.
    Continue,
    /// The value reached its target; stop scheduling.
    Done,
}

/// Normalized progress for `elapsed_ms` of `duration_ms`.
///
/// A zero, negative or non-finite duration counts as already complete.
#[must_use]
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if !duration_ms.is_finite() || duration_ms <= 0.0 {
        return 1.0;
    }
    if elapsed_ms.is_nan() {
        return 0.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// Counter value after `elapsed_ms` of a `duration_ms` animation toward `target`.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn counter_value_at(target: u64, duration_ms: f64, elapsed_ms: f64) -> u64 {
    let t = progress(elapsed_ms, duration_ms);
    if t >= 1.0 {
        return target;
    }
    let value = (ease_out_quart(t) * target as f64).floor();
    (value.max(0.0) as u64).min(target)
}

/// Frame-by-frame counter animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    duration_ms: f64,
    origin_ms: Option<f64>,
    value: u64,
    done: bool,
}

impl CounterAnimation {
    #[must_use]
    pub fn new(target: u64, duration_ms: f64) -> Self {
        Self { target, duration_ms, origin_ms: None, value: 0, done: false }
    }

    #[must_use]
    pub fn target(&self) -> u64 {
        self.target
    }

    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        self.value
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advance to the frame stamped `timestamp_ms`. The first frame becomes
    /// the time origin.
    pub fn frame(&mut self, timestamp_ms: f64) -> FrameOutcome {
        if self.done {
            return FrameOutcome::Done;
        }
        let origin = *self.origin_ms.get_or_insert(timestamp_ms);
        let elapsed = timestamp_ms - origin;
        let next = counter_value_at(self.target, self.duration_ms, elapsed);
        // Frame timestamps never run backwards in a browser, but the value
        // must not either.
        self.value = self.value.max(next);
        if progress(elapsed, self.duration_ms) >= 1.0 {
            self.value = self.target;
            self.done = true;
            FrameOutcome::Done
        } else {
            FrameOutcome::Continue
        }
    }

    /// Jump straight to the target. Used when frames cannot be scheduled.
    pub fn finish(&mut self) {
        self.value = self.target;
        self.done = true;
    }
}

/// A counter behind a visibility gate: frames are ignored until it fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedCounter {
    gate: VisibilityGate,
    animation: CounterAnimation,
}

impl AnimatedCounter {
    #[must_use]
    pub fn new(target: u64, duration_ms: f64) -> Self {
        Self { gate: VisibilityGate::default(), animation: CounterAnimation::new(target, duration_ms) }
    }

    #[must_use]
    pub fn with_default_duration(target: u64) -> Self {
        Self::new(target, DEFAULT_COUNTER_DURATION_MS)
    }

    #[must_use]
    pub fn with_gate(mut self, gate: VisibilityGate) -> Self {
        self.gate = gate;
        self
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        self.animation.value()
    }

    #[must_use]
    pub fn target(&self) -> u64 {
        self.animation.target()
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.animation.is_done()
    }

    /// Deliver an animation frame. Returns [`FrameOutcome::Idle`] without
    /// touching the value while the gate is closed.
    pub fn frame(&mut self, timestamp_ms: f64) -> FrameOutcome {
        if !self.gate.is_fired() {
            return FrameOutcome::Idle;
        }
        self.animation.frame(timestamp_ms)
    }

    /// Jump to the target if the gate has fired.
    pub fn finish(&mut self) {
        if self.gate.is_fired() {
            self.animation.finish();
        }
    }
}

impl Gated for AnimatedCounter {
    fn gate(&self) -> &VisibilityGate {
        &self.gate
    }

    fn gate_mut(&mut self) -> &mut VisibilityGate {
        &mut self.gate
    }
}
