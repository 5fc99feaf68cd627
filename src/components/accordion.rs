//! Expandable panels sharing the page's single-open selection.

use leptos::prelude::*;

use crate::content::{PLACE_LABELS, PRIZE_HINT, PrizeCategory, format_brl};
use crate::state::page::PageStore;

/// One collapsible panel keyed into the page-wide accordion selection.
/// Opening it closes whichever panel was open before.
#[component]
pub fn AccordionItem(
    panel: &'static str,
    title: &'static str,
    #[prop(optional)] hint: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let store = PageStore::expect();
    let open = move || store.is_open(panel);

    view! {
        <div class=move || store.tokens().panel>
            <button
                class="accordion__header"
                aria-expanded=move || open().to_string()
                on:click=move |_| store.toggle_accordion(panel)
            >
                <div class="accordion__title">
                    <h4>{title}</h4>
                    {hint.map(|hint| view! { <p class="accordion__hint">{hint}</p> })}
                </div>
                <span class=move || {
                    if open() { "accordion__chevron accordion__chevron--open" } else { "accordion__chevron" }
                }>"▾"</span>
            </button>
            {move || open().then(|| view! { <div class="accordion__body">{children()}</div> })}
        </div>
    }
}

/// Prize category panel listing first to third place.
#[component]
pub fn PrizeTable(category: PrizeCategory) -> impl IntoView {
    view! {
        <AccordionItem panel=category.key title=category.title hint=PRIZE_HINT>
            <div class="prize-table">
                {PLACE_LABELS
                    .iter()
                    .zip(category.amounts)
                    .map(|(place, amount)| {
                        view! {
                            <div class="prize-table__row">
                                <div class="prize-table__place">{*place}</div>
                                <div class="prize-table__amount">{format_brl(amount)}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </AccordionItem>
    }
}
