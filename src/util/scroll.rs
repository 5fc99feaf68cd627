//! Smooth scrolling to page sections.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Scroll the element with DOM id `id` into view. Unknown ids do nothing.
pub fn scroll_to_section(id: &str) {
    #[cfg(feature = "csr")]
    {
        use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

        let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.get_element_by_id(id)) else {
            log::debug!("scroll target #{id} not found");
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}

/// In-page anchor for a section id, used as the `href` fallback.
#[must_use]
pub fn anchor(id: &str) -> String {
    format!("#{id}")
}
