//! Fixed top navigation: section links, theme toggle, registration link.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::content::NAV_LINKS;
use crate::state::page::PageStore;
use crate::util::scroll::{anchor, scroll_to_section};

#[component]
pub fn NavHeader() -> impl IntoView {
    let store = PageStore::expect();
    let config = expect_context::<SiteConfig>();

    view! {
        <nav class=move || store.tokens().nav role="navigation" aria-label="Navegação principal">
            <div class="nav__inner">
                <a class="nav__brand" href="#">
                    "ExpoTech 2026"
                </a>
                <div class="nav__links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            let id = link.id;
                            view! {
                                <a
                                    class="nav__link"
                                    href=anchor(id)
                                    aria-label=format!("Ir para seção {}", link.label)
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        scroll_to_section(id);
                                    }
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <ThemeToggle/>
                    <a class="nav__cta" href=config.registration_url target="_blank" rel="noopener noreferrer">
                        "Inscrever-se"
                    </a>
                </div>
            </div>
        </nav>
    }
}

/// Sun/moon button flipping the page theme.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = PageStore::expect();
    let icon = move || if store.theme().is_dark() { "☀" } else { "☾" };

    view! {
        <button class="nav__theme" aria-label="Alternar tema" on:click=move |_| store.toggle_theme()>
            {icon}
        </button>
    }
}
