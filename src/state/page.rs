//! Reactive store around `kit::page::PageState`.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use kit::page::{PageAction, PageState, reduce};
use kit::theme::{Theme, ThemeTokens};
use leptos::prelude::*;

/// Context handle for the page state signal. `Copy`, like the signals it wraps.
#[derive(Clone, Copy, Debug)]
pub struct PageStore {
    state: RwSignal<PageState>,
}

impl PageStore {
    #[must_use]
    pub fn new(initial: PageState) -> Self {
        Self { state: RwSignal::new(initial) }
    }

    /// Create a store and register it as context for the current owner.
    pub fn provide(initial: PageState) -> Self {
        let store = Self::new(initial);
        provide_context(store);
        store
    }

    /// Look up the store provided by an ancestor.
    ///
    /// # Panics
    ///
    /// Panics when no ancestor called [`PageStore::provide`].
    #[must_use]
    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    pub fn dispatch(&self, action: &PageAction) {
        let next = self.state.with_untracked(|state| reduce(state, action));
        self.state.set(next);
    }

    pub fn toggle_accordion(&self, key: &str) {
        self.dispatch(&PageAction::ToggleAccordion(key.to_owned()));
    }

    pub fn toggle_theme(&self) {
        self.dispatch(&PageAction::ToggleTheme);
    }

    /// Tracked read: whether `key` is the open accordion panel.
    #[must_use]
    pub fn is_open(&self, key: &str) -> bool {
        self.state.with(|state| state.is_open(key))
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.state.with(PageState::theme)
    }

    #[must_use]
    pub fn tokens(&self) -> ThemeTokens {
        self.theme().tokens()
    }
}
