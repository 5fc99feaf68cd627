//! Browser-facing helpers shared by components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything that touches `web_sys` lives here so components stay declarative
//! and native test builds compile without a DOM. Each helper has a no-op or
//! error-returning fallback when the `csr` feature is off.

pub mod browser;
pub mod dark_mode;
pub mod scroll;
