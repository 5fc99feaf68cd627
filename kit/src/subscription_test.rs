use super::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

fn counting() -> (Rc<Cell<u32>>, Subscription) {
    let count = Rc::new(Cell::new(0));
    let hook = Rc::clone(&count);
    let sub = Subscription::new(move || hook.set(hook.get() + 1));
    (count, sub)
}

// =============================================================
// Subscription
// =============================================================

#[test]
fn drop_releases_once() {
    let (count, sub) = counting();
    assert!(sub.is_active());
    drop(sub);
    assert_eq!(count.get(), 1);
}

#[test]
fn cancel_releases_once() {
    let (count, sub) = counting();
    sub.cancel();
    assert_eq!(count.get(), 1);
}

#[test]
fn release_happens_on_early_return() {
    fn scoped(sub: Subscription, bail: bool) -> u32 {
        let _guard = sub;
        if bail {
            return 0;
        }
        1
    }

    let (count, sub) = counting();
    assert_eq!(scoped(sub, true), 0);
    assert_eq!(count.get(), 1);
}

#[test]
fn noop_is_inactive() {
    let sub = Subscription::noop();
    assert!(!sub.is_active());
    sub.cancel();
}

#[test]
fn debug_reports_activity() {
    let (_count, sub) = counting();
    assert!(format!("{sub:?}").contains("active: true"));
}

// =============================================================
// SubscriptionSet
// =============================================================

#[test]
fn set_releases_in_reverse_order() {
    let order = Rc::new(RefCell::new(Vec::new()));
    let mut set = SubscriptionSet::new();
    for i in 0..3 {
        let order = Rc::clone(&order);
        set.push(Subscription::new(move || order.borrow_mut().push(i)));
    }
    assert_eq!(set.len(), 3);
    drop(set);
    assert_eq!(*order.borrow(), vec![2, 1, 0]);
}

#[test]
fn set_clear_releases_and_empties() {
    let (count, sub) = counting();
    let mut set = SubscriptionSet::from(sub);
    set.clear();
    assert_eq!(count.get(), 1);
    assert!(set.is_empty());
    drop(set);
    assert_eq!(count.get(), 1);
}
