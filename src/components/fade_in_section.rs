//! Wrapper that fades its children in the first time they scroll into view.
//!
//! The transition itself is CSS: the component swaps the `reveal--hidden`
//! hook for `reveal--visible` and sets the delay and duration inline from
//! `kit::reveal::ScrollReveal`.

use kit::reveal::{ScrollReveal, class_hook};
use leptos::prelude::*;

#[cfg(feature = "csr")]
use std::cell::{Cell, RefCell};
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use crate::util::browser::{owned_set, watch_gate};

#[component]
pub fn FadeInSection(#[prop(optional)] delay_ms: f64, children: Children) -> impl IntoView {
    let reveal = ScrollReveal::new(delay_ms);
    let visible = RwSignal::new(false);
    let node_ref = NodeRef::<leptos::html::Div>::new();
    let style = reveal.transition_style();

    #[cfg(feature = "csr")]
    {
        let subscriptions = owned_set();
        let bound = Rc::new(Cell::new(false));
        Effect::new(move || {
            let Some(el) = node_ref.get() else {
                return;
            };
            if bound.replace(true) {
                return;
            }
            let widget = Rc::new(RefCell::new(reveal));
            subscriptions.borrow_mut().push(watch_gate(&el, widget, move || visible.set(true)));
        });
    }

    view! {
        <div node_ref=node_ref class=move || class_hook(visible.get()) style=style>
            {children()}
        </div>
    }
}
