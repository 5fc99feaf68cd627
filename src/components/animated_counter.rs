//! Count-up number that starts when it scrolls into view.
//!
//! ARCHITECTURE
//! ============
//! `kit::counter::AnimatedCounter` owns the gate and the per-frame value; this
//! component only wires an intersection observer into the gate and, once it
//! fires, an animation-frame loop into `frame`. The loop stops itself when
//! the counter reports `Done`.

use kit::consts::DEFAULT_COUNTER_DURATION_MS;
use leptos::prelude::*;

#[cfg(feature = "csr")]
use std::cell::{Cell, RefCell};
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use kit::counter::{self, FrameOutcome};

#[cfg(feature = "csr")]
use crate::util::browser::{animation_frames, owned_set, watch_gate};

#[component]
pub fn AnimatedCounter(
    target: u64,
    #[prop(optional)] suffix: &'static str,
    #[prop(default = DEFAULT_COUNTER_DURATION_MS)] duration_ms: f64,
) -> impl IntoView {
    let value = RwSignal::new(0_u64);
    let node_ref = NodeRef::<leptos::html::Span>::new();

    #[cfg(feature = "csr")]
    {
        let widget = Rc::new(RefCell::new(counter::AnimatedCounter::new(target, duration_ms)));
        let subscriptions = owned_set();
        let bound = Rc::new(Cell::new(false));

        Effect::new(move || {
            let Some(el) = node_ref.get() else {
                return;
            };
            if bound.replace(true) {
                return;
            }

            let widget_for_frames = Rc::clone(&widget);
            let subscriptions_for_open = Rc::clone(&subscriptions);
            let gate = watch_gate(&el, Rc::clone(&widget), move || {
                let widget = Rc::clone(&widget_for_frames);
                let frames = animation_frames(move |timestamp| {
                    let mut widget = widget.borrow_mut();
                    let outcome = widget.frame(timestamp);
                    value.set(widget.value());
                    if outcome == FrameOutcome::Done {
                        log::debug!("counter reached {}", widget.target());
                    }
                    outcome == FrameOutcome::Continue
                });
                match frames {
                    Ok(frames) => subscriptions_for_open.borrow_mut().push(frames),
                    Err(err) => {
                        log::warn!("{err}; showing final count");
                        let mut widget = widget_for_frames.borrow_mut();
                        widget.finish();
                        value.set(widget.value());
                    }
                }
            });
            subscriptions.borrow_mut().push(gate);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (target, duration_ms);
    }

    view! {
        <span node_ref=node_ref class="counter">
            {move || value.get()}
            {suffix}
        </span>
    }
}
