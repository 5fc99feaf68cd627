//! Browser event sources wrapped as `kit::subscription::Subscription`s.
//!
//! DESIGN
//! ======
//! Each binding registers a JS callback and returns a guard whose release
//! disconnects the observer, cancels the pending frame or clears the
//! interval. Components hand the guard to [`bind_to_owner`] so Leptos drops
//! it when the component unmounts.
//!
//! TRADE-OFFS
//! ==========
//! Binding failures are reported, not retried. Callers degrade instead: a
//! gate without an observer opens at once and a counter without frames
//! jumps to its target. Content is never left hidden.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use thiserror::Error;

#[cfg(feature = "csr")]
use std::cell::{Cell, RefCell};
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use gloo_timers::callback::Interval;
#[cfg(feature = "csr")]
use kit::gate::{Gated, Observation};
#[cfg(feature = "csr")]
use kit::subscription::{Subscription, SubscriptionSet};
#[cfg(feature = "csr")]
use leptos::prelude::StoredValue;
#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
#[cfg(feature = "csr")]
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("no browser window")]
    NoWindow,
    #[error("intersection observer rejected: {0}")]
    Observer(String),
    #[error("animation frame rejected: {0}")]
    AnimationFrame(String),
}

#[cfg(feature = "csr")]
fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Wall-clock milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "csr"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }
}

/// [`now_ms`] truncated to whole milliseconds.
#[allow(clippy::cast_possible_truncation)]
pub fn now_epoch_ms() -> i64 {
    now_ms() as i64
}

// =============================================================
// Visibility
// =============================================================

/// Report every intersection change of `element` at `threshold`.
#[cfg(feature = "csr")]
pub fn observe_visibility(
    element: &web_sys::Element,
    threshold: f64,
    mut on_change: impl FnMut(Observation, &IntersectionObserver) + 'static,
) -> Result<Subscription, BindError> {
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            on_change(Observation::new(entry.intersection_ratio(), entry.is_intersecting()), &observer);
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .map_err(|err| BindError::Observer(js_message(&err)))?;
    observer.observe(element);

    Ok(Subscription::new(move || {
        observer.disconnect();
        drop(callback);
    }))
}

/// Feed a widget's gate from an observer on `element` and call `on_open`
/// once when it fires. The observer disconnects itself after firing.
///
/// If no observer can be created the gate is forced open immediately.
#[cfg(feature = "csr")]
pub fn watch_gate<G: Gated + 'static>(
    element: &web_sys::Element,
    widget: Rc<RefCell<G>>,
    on_open: impl FnOnce() + 'static,
) -> Subscription {
    let threshold = widget.borrow().gate().threshold();
    let pending = Rc::new(RefCell::new(Some(on_open)));
    let pending_for_cb = Rc::clone(&pending);
    let widget_for_cb = Rc::clone(&widget);

    let bound = observe_visibility(element, threshold, move |observation, observer| {
        if widget_for_cb.borrow_mut().observe(observation, now_ms()) {
            observer.disconnect();
            log::debug!("visibility gate fired at ratio {:.2}", observation.ratio);
            if let Some(open) = pending_for_cb.borrow_mut().take() {
                open();
            }
        }
    });

    match bound {
        Ok(subscription) => subscription,
        Err(err) => {
            log::warn!("{err}; revealing immediately");
            widget.borrow_mut().gate_mut().force_open(now_ms());
            if let Some(open) = pending.borrow_mut().take() {
                open();
            }
            Subscription::noop()
        }
    }
}

// =============================================================
// Animation frames
// =============================================================

/// Run `on_frame` on every animation frame until it returns `false` or the
/// subscription is released. The argument is the frame timestamp in ms.
#[cfg(feature = "csr")]
pub fn animation_frames(mut on_frame: impl FnMut(f64) -> bool + 'static) -> Result<Subscription, BindError> {
    let window = web_sys::window().ok_or(BindError::NoWindow)?;

    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let handle = Rc::new(Cell::new(None::<i32>));

    let holder_for_cb = Rc::clone(&holder);
    let handle_for_cb = Rc::clone(&handle);
    let window_for_cb = window.clone();
    let cb = Closure::wrap(Box::new(move |timestamp: f64| {
        handle_for_cb.set(None);
        if !on_frame(timestamp) {
            holder_for_cb.borrow_mut().take();
            return;
        }
        let next = holder_for_cb
            .borrow()
            .as_ref()
            .map(|cb| window_for_cb.request_animation_frame(cb.as_ref().unchecked_ref()));
        match next {
            Some(Ok(id)) => handle_for_cb.set(Some(id)),
            Some(Err(err)) => {
                log::warn!("{}", BindError::AnimationFrame(js_message(&err)));
                holder_for_cb.borrow_mut().take();
            }
            None => {}
        }
    }) as Box<dyn FnMut(f64)>);

    let first = window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .map_err(|err| BindError::AnimationFrame(js_message(&err)))?;
    handle.set(Some(first));
    *holder.borrow_mut() = Some(cb);

    Ok(Subscription::new(move || {
        if let Some(id) = handle.take() {
            let _ = window.cancel_animation_frame(id);
        }
        if let Ok(mut slot) = holder.try_borrow_mut() {
            slot.take();
        }
    }))
}

// =============================================================
// Intervals
// =============================================================

/// Call `on_tick` every `period_ms` until the subscription is released.
#[cfg(feature = "csr")]
pub fn every(period_ms: u32, on_tick: impl FnMut() + 'static) -> Subscription {
    let interval = Interval::new(period_ms, on_tick);
    Subscription::new(move || drop(interval))
}

// =============================================================
// Ownership
// =============================================================

/// Tie a subscription to the current reactive owner so it is released when
/// the owning component unmounts. The owner disposes its local stored values
/// on cleanup, which drops the guard.
#[cfg(feature = "csr")]
pub fn bind_to_owner(subscription: Subscription) {
    let _owned = StoredValue::new_local(subscription);
}

/// A subscription set released with the current reactive owner. Callbacks
/// that start work after mount push their guards here, since they run
/// outside any owner.
#[cfg(feature = "csr")]
pub fn owned_set() -> Rc<RefCell<SubscriptionSet>> {
    let set = Rc::new(RefCell::new(SubscriptionSet::new()));
    let for_cleanup = Rc::clone(&set);
    bind_to_owner(Subscription::new(move || {
        if let Ok(mut set) = for_cleanup.try_borrow_mut() {
            set.clear();
        }
    }));
    set
}
