//! Interactive presentation kit for the ExpoTech landing page.
//!
//! This crate holds the browser-free half of every interactive widget on the
//! page: visibility gating, eased counters, scroll reveals, the event
//! countdown, and the page-level accordion/theme state. Each widget is a
//! small state machine advanced by explicit timestamps, so the behavior is
//! tested natively without a DOM. The Leptos host wires real observers,
//! animation frames and intervals to these types and owns their teardown
//! through [`subscription::Subscription`] guards.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`gate`] | One-shot viewport visibility gate and the [`gate::Gated`] seam |
//! | [`counter`] | Quartic ease-out counter animation driven by frame timestamps |
//! | [`reveal`] | Delayed fade/slide-in timeline for scroll-revealed sections |
//! | [`countdown`] | Days/hours/minutes/seconds until a fixed instant |
//! | [`page`] | Immutable accordion + theme state and its reducer |
//! | [`theme`] | Light/dark theme and its precomputed class tokens |
//! | [`easing`] | Easing curves, including a CSS cubic-bezier solver |
//! | [`subscription`] | Scoped release guards for recurring callbacks |
//! | [`consts`] | Shared numeric constants (durations, thresholds, time units) |

pub mod consts;
pub mod countdown;
pub mod counter;
pub mod easing;
pub mod gate;
pub mod page;
pub mod reveal;
pub mod subscription;
pub mod theme;
