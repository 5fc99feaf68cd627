//! Scoped release guards for recurring callbacks.
//!
//! Every observer, animation loop and interval a widget starts is handed
//! back as a [`Subscription`]. The subscription runs its release closure
//! exactly once: on [`Subscription::cancel`] or when dropped, whichever
//! comes first. Holding the subscription in the widget's scope therefore
//! guarantees teardown on every exit path.

#[cfg(test)]
#[path = "subscription_test.rs"]
mod subscription_test;

use std::fmt;

pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }

    /// A subscription with nothing to release.
    #[must_use]
    pub fn noop() -> Self {
        Self { release: None }
    }

    /// Whether the release closure has yet to run.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Release now.
    pub fn cancel(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("active", &self.is_active()).finish()
    }
}

/// Several subscriptions owned together. Released last-in, first-out.
#[derive(Debug, Default)]
pub struct SubscriptionSet {
    subscriptions: Vec<Subscription>,
}

impl SubscriptionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, subscription: Subscription) {
        self.subscriptions.push(subscription);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Release everything held so far. The set stays usable.
    pub fn clear(&mut self) {
        while let Some(subscription) = self.subscriptions.pop() {
            subscription.cancel();
        }
    }
}

impl Drop for SubscriptionSet {
    fn drop(&mut self) {
        self.clear();
    }
}

impl From<Subscription> for SubscriptionSet {
    fn from(subscription: Subscription) -> Self {
        Self { subscriptions: vec![subscription] }
    }
}
