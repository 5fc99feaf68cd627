//! Shared client-side state.
//!
//! DESIGN
//! ======
//! The page has one piece of interactive state, the accordion/theme pair
//! from `kit::page`. It is stored in a single signal and replaced wholesale
//! on every action, so views never observe a half-applied transition.

pub mod page;
