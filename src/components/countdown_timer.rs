//! Days/hours/minutes/seconds countdown to the event start.
//!
//! DESIGN
//! ======
//! The clock ticks once on mount and then every second. When
//! `kit::countdown::CountdownClock` reports `Elapsed` the interval releases
//! itself on the next turn of the event loop; the display stays at zeros.

use kit::countdown::{CountdownClock, pad2};
use leptos::prelude::*;

#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "csr")]
use kit::consts::COUNTDOWN_TICK_MS;
#[cfg(feature = "csr")]
use kit::countdown::CountdownPhase;

#[cfg(feature = "csr")]
use crate::util::browser::{every, now_epoch_ms, owned_set};

/// Unit labels, in the order of `Remaining::parts`.
pub const UNIT_LABELS: [&str; 4] = ["Dias", "Horas", "Min", "Seg"];

#[component]
pub fn CountdownTimer(target_ms: i64, #[prop(into)] caption: String) -> impl IntoView {
    let clock = RwSignal::new(CountdownClock::new(target_ms));

    #[cfg(feature = "csr")]
    {
        let first = clock.try_update(|c| c.tick(now_epoch_ms()));
        if first == Some(CountdownPhase::Pending) {
            let subscriptions = owned_set();
            let subscriptions_for_tick = Rc::clone(&subscriptions);
            subscriptions.borrow_mut().push(every(COUNTDOWN_TICK_MS, move || {
                if clock.try_update(|c| c.tick(now_epoch_ms())) == Some(CountdownPhase::Elapsed) {
                    log::debug!("countdown reached its target");
                    let subscriptions = Rc::clone(&subscriptions_for_tick);
                    Timeout::new(0, move || subscriptions.borrow_mut().clear()).forget();
                }
            }));
        } else {
            log::debug!("countdown target already passed");
        }
    }

    view! {
        <div class="countdown">
            <div class="countdown__caption">{caption}</div>
            {UNIT_LABELS
                .iter()
                .enumerate()
                .map(|(i, label)| {
                    view! {
                        <div class="countdown__cell">
                            <div class=format!("countdown__value countdown__value--{i}")>
                                {move || pad2(clock.get().remaining().parts()[i])}
                            </div>
                            <div class="countdown__label">{*label}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
