//! Shared numeric constants for the kit crate.

// ── Time units ──────────────────────────────────────────────────

pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

// ── Visibility ──────────────────────────────────────────────────

/// Fraction of a region's area that must be on screen before its gate fires.
pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.1;

// ── Counter ─────────────────────────────────────────────────────

/// Default counter animation length in milliseconds.
pub const DEFAULT_COUNTER_DURATION_MS: f64 = 2_000.0;

// ── Reveal ──────────────────────────────────────────────────────

/// Length of the fade/slide-in transition in milliseconds.
pub const REVEAL_TRANSITION_MS: f64 = 1_000.0;

/// Initial downward offset of hidden content, in CSS pixels.
pub const REVEAL_OFFSET_PX: f64 = 32.0;

// ── Countdown ───────────────────────────────────────────────────

/// Countdown refresh period in milliseconds.
pub const COUNTDOWN_TICK_MS: u32 = 1_000;
