//! Theme application.
//!
//! Writes the active theme to a `data-theme` attribute on the `<html>`
//! element so page-level CSS can key off it. Nothing is persisted; every
//! visit starts dark.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use kit::theme::Theme;

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            if let Err(err) = el.set_attribute("data-theme", theme.as_attr()) {
                log::warn!("could not set data-theme: {err:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}
