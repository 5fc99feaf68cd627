//! Page footer with quick links and event contact details.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::content::{COPYRIGHT, FOOTER_BLURB, footer_links};
use crate::state::page::PageStore;
use crate::util::scroll::{anchor, scroll_to_section};

#[component]
pub fn SiteFooter() -> impl IntoView {
    let store = PageStore::expect();
    let config = expect_context::<SiteConfig>();

    view! {
        <footer class=move || format!("footer {}", store.tokens().border)>
            <div class="footer__grid">
                <div>
                    <div class="footer__brand">"ExpoTech 2026"</div>
                    <p class=move || store.tokens().text_secondary>{FOOTER_BLURB}</p>
                </div>
                <div>
                    <h4>"Links Rápidos"</h4>
                    <ul class="footer__links">
                        {footer_links()
                            .iter()
                            .map(|link| {
                                let id = link.id;
                                view! {
                                    <li>
                                        <a
                                            href=anchor(id)
                                            on:click=move |ev| {
                                                ev.prevent_default();
                                                scroll_to_section(id);
                                            }
                                        >
                                            {link.label}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div>
                    <h4>"Contato"</h4>
                    <ul class=move || store.tokens().text_secondary>
                        <li>
                            <a href=config.venue_url target="_blank" rel="noopener noreferrer">
                                {config.venue}
                            </a>
                        </li>
                        <li>{config.date_label}</li>
                        <li>{config.hours_label}</li>
                    </ul>
                </div>
            </div>
            <p class="footer__copyright">{COPYRIGHT}</p>
        </footer>
    }
}
