//! Page-level accordion and theme state.
//!
//! DESIGN
//! ======
//! `PageState` is an immutable value. Views receive it top-down and never
//! mutate it; the two transitions ([`PageState::toggle_accordion`] and
//! [`PageState::toggle_theme`]) return a new value, and [`reduce`] maps a
//! [`PageAction`] onto them. The host swaps the stored value wholesale.
//!
//! All accordions on the page share one selection, so opening a FAQ entry
//! closes an open prize panel and vice versa.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::theme::Theme;

/// Single-open accordion selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Accordion {
    #[default]
    Closed,
    OpenWith(String),
}

impl Accordion {
    /// Close `key` if it is open, otherwise open it and close anything else.
    #[must_use]
    pub fn toggled(&self, key: &str) -> Self {
        match self {
            Self::OpenWith(open) if open == key => Self::Closed,
            _ => Self::OpenWith(key.to_owned()),
        }
    }

    #[must_use]
    pub fn is_open(&self, key: &str) -> bool {
        matches!(self, Self::OpenWith(open) if open == key)
    }

    #[must_use]
    pub fn open_key(&self) -> Option<&str> {
        match self {
            Self::Closed => None,
            Self::OpenWith(key) => Some(key),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageAction {
    ToggleAccordion(String),
    ToggleTheme,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageState {
    accordion: Accordion,
    theme: Theme,
}

impl PageState {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self { accordion: Accordion::Closed, theme }
    }

    #[must_use]
    pub fn accordion(&self) -> &Accordion {
        &self.accordion
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn is_open(&self, key: &str) -> bool {
        self.accordion.is_open(key)
    }

    #[must_use]
    pub fn toggle_accordion(&self, key: &str) -> Self {
        Self { accordion: self.accordion.toggled(key), theme: self.theme }
    }

    #[must_use]
    pub fn toggle_theme(&self) -> Self {
        Self { accordion: self.accordion.clone(), theme: self.theme.toggled() }
    }
}

/// Apply one action, producing the next state.
#[must_use]
pub fn reduce(state: &PageState, action: &PageAction) -> PageState {
    match action {
        PageAction::ToggleAccordion(key) => state.toggle_accordion(key),
        PageAction::ToggleTheme => state.toggle_theme(),
    }
}
