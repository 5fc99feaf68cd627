//! Root application component and context providers.

use kit::page::PageState;
use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

use crate::config::SiteConfig;
use crate::pages::landing::LandingPage;
use crate::state::page::PageStore;
use crate::util::dark_mode;

/// Root application component.
///
/// Provides the site configuration and page store, keeps `<html data-theme>`
/// in sync with the store and renders the landing page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::expotech_2026();
    let title = config.title;
    let description = config.description;
    provide_context(config);

    let store = PageStore::provide(PageState::default());
    Effect::new(move || dark_mode::apply(store.theme()));

    view! {
        <Title text=title/>
        <Meta name="description" content=description/>
        <LandingPage/>
    }
}
