//! # expotech
//!
//! Leptos + WASM landing page for ExpoTech 2026, the UniFECAF technology
//! exposition.
//!
//! This crate contains the page shell, content tables, widget components
//! and the browser bindings that drive them. Widget behavior itself lives in
//! the browser-free `kit` crate; components here only translate DOM
//! callbacks (intersection observers, animation frames, intervals) into kit
//! calls and release every callback through `kit::subscription` guards.

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;
