//! One-shot viewport visibility gate.
//!
//! A gate starts closed and fires the first time an observation reports the
//! watched region intersecting the viewport with at least `threshold` of its
//! area visible. After that it stays fired for the life of the mount: later
//! observations, including ones reporting the region scrolled away, are
//! ignored.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::consts::DEFAULT_VISIBILITY_THRESHOLD;
use crate::easing::unit;

/// A single visibility report from the host's observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Visible fraction of the region's area, 0.0..=1.0.
    pub ratio: f64,
    pub is_intersecting: bool,
}

impl Observation {
    #[must_use]
    pub fn new(ratio: f64, is_intersecting: bool) -> Self {
        Self { ratio, is_intersecting }
    }

    /// Region fully out of view.
    #[must_use]
    pub fn hidden() -> Self {
        Self { ratio: 0.0, is_intersecting: false }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityGate {
    threshold: f64,
    fired_at_ms: Option<f64>,
}

impl Default for VisibilityGate {
    fn default() -> Self {
        Self::new(DEFAULT_VISIBILITY_THRESHOLD)
    }
}

impl VisibilityGate {
    /// Create a closed gate. `threshold` is clamped to [0, 1].
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() { DEFAULT_VISIBILITY_THRESHOLD } else { unit(threshold) };
        Self { threshold, fired_at_ms: None }
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[must_use]
    pub fn is_fired(&self) -> bool {
        self.fired_at_ms.is_some()
    }

    /// Timestamp at which the gate fired, if it has.
    #[must_use]
    pub fn fired_at_ms(&self) -> Option<f64> {
        self.fired_at_ms
    }

    /// Feed one observation. Returns `true` only on the call that fires the
    /// gate; every other call, before or after, returns `false`.
    pub fn observe(&mut self, observation: Observation, now_ms: f64) -> bool {
        if self.is_fired() {
            return false;
        }
        if !observation.is_intersecting || observation.ratio < self.threshold {
            return false;
        }
        self.fired_at_ms = Some(now_ms);
        true
    }

    /// Fire without an observation. Used when the host cannot observe the
    /// region at all, so content is never left permanently hidden.
    pub fn force_open(&mut self, now_ms: f64) -> bool {
        if self.is_fired() {
            return false;
        }
        self.fired_at_ms = Some(now_ms);
        true
    }
}

/// A widget that waits on a [`VisibilityGate`].
///
/// Hosts feed observations through [`Gated::observe`] without knowing which
/// widget sits behind the gate.
pub trait Gated {
    fn gate(&self) -> &VisibilityGate;

    fn gate_mut(&mut self) -> &mut VisibilityGate;

    /// Forward an observation to the gate. Returns `true` when it fires.
    fn observe(&mut self, observation: Observation, now_ms: f64) -> bool {
        self.gate_mut().observe(observation, now_ms)
    }
}

impl Gated for VisibilityGate {
    fn gate(&self) -> &VisibilityGate {
        self
    }

    fn gate_mut(&mut self) -> &mut VisibilityGate {
        self
    }
}
