//! Reusable UI components.

pub mod accordion;
pub mod animated_counter;
pub mod countdown_timer;
pub mod fade_in_section;
pub mod nav_header;
pub mod site_footer;
