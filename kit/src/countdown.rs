//! Countdown to a fixed instant, refreshed once per second by the host.
//!
//! Remaining time is split by floor division of `target - now` in
//! milliseconds. Once the target has passed, the clock clamps to zero and
//! reports [`CountdownPhase::Elapsed`] so the host can stop its interval.

#[cfg(test)]
#[path = "countdown_test.rs"]
mod countdown_test;

use crate::consts::{MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND};

/// Days, hours, minutes and seconds left. No field is ever negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Remaining {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Remaining {
    pub const ZERO: Self = Self { days: 0, hours: 0, minutes: 0, seconds: 0 };

    /// Split a positive millisecond difference.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn from_millis(diff_ms: i64) -> Self {
        if diff_ms <= 0 {
            return Self::ZERO;
        }
        Self {
            days: (diff_ms / MS_PER_DAY) as u64,
            hours: ((diff_ms / MS_PER_HOUR) % 24) as u64,
            minutes: ((diff_ms / MS_PER_MINUTE) % 60) as u64,
            seconds: ((diff_ms / MS_PER_SECOND) % 60) as u64,
        }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Fields in display order: days, hours, minutes, seconds.
    #[must_use]
    pub fn parts(&self) -> [u64; 4] {
        [self.days, self.hours, self.minutes, self.seconds]
    }
}

/// Remaining time from `now_ms` until `target_ms`, or `None` once reached.
#[must_use]
pub fn remaining_until(target_ms: i64, now_ms: i64) -> Option<Remaining> {
    let diff = target_ms.saturating_sub(now_ms);
    (diff > 0).then(|| Remaining::from_millis(diff))
}

/// Zero-padded two digit rendering; wider values are printed in full.
#[must_use]
pub fn pad2(value: u64) -> String {
    format!("{value:02}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountdownPhase {
    /// The target is still ahead.
    #[default]
    Pending,
    /// The target has been reached; the display is held at zero.
    Elapsed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownClock {
    target_ms: i64,
    remaining: Remaining,
    phase: CountdownPhase,
}

impl CountdownClock {
    /// A clock showing zeros until its first [`CountdownClock::tick`].
    #[must_use]
    pub fn new(target_ms: i64) -> Self {
        Self { target_ms, remaining: Remaining::ZERO, phase: CountdownPhase::Pending }
    }

    #[must_use]
    pub fn target_ms(&self) -> i64 {
        self.target_ms
    }

    #[must_use]
    pub fn remaining(&self) -> Remaining {
        self.remaining
    }

    #[must_use]
    pub fn phase(&self) -> CountdownPhase {
        self.phase
    }

    #[must_use]
    pub fn is_elapsed(&self) -> bool {
        self.phase == CountdownPhase::Elapsed
    }

    /// Recompute from `now_ms`. Elapsed is terminal: a clock that has seen
    /// the target pass stays at zero even if a later reading is earlier.
    pub fn tick(&mut self, now_ms: i64) -> CountdownPhase {
        if self.is_elapsed() {
            return self.phase;
        }
        match remaining_until(self.target_ms, now_ms) {
            Some(remaining) => self.remaining = remaining,
            None => {
                self.remaining = Remaining::ZERO;
                self.phase = CountdownPhase::Elapsed;
            }
        }
        self.phase
    }
}
