#![forbid(unsafe_code)]

//! Observable property with change notification and version tracking.
//!
//! # Design
//!
//! [`ObservableProperty<T>`] wraps a value in shared, reference-counted
//! storage (`Rc<RefCell<..>>`). When the value changes (by `PartialEq`), all
//! live subscribers are notified in registration order. Hosts use it to react
//! to controller state, e.g. revealing an edit affordance while a drag is in
//! progress.
//!
//! # Failure Modes
//!
//! - **Subscriber leak**: [`Subscription`] guards kept forever keep their
//!   callbacks alive. Dead entries are pruned lazily on the next notify.
//! - **Re-entrant set**: safe. Callbacks run after the interior borrow is
//!   released, so a subscriber may set the property again; that nested change
//!   notifies before the outer loop continues.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type CallbackRc<T> = Rc<dyn Fn(&T)>;
type CallbackWeak<T> = Weak<dyn Fn(&T)>;

struct PropertyInner<T> {
    value: T,
    version: u64,
    subscribers: Vec<CallbackWeak<T>>,
}

/// A shared, version-tracked value with change notification.
///
/// Cloning creates a new handle to the **same** state.
///
/// # Invariants
///
/// 1. `version` increments by exactly 1 on each value-changing mutation.
/// 2. `set(v)` where `v == current` is a no-op.
/// 3. Subscribers are notified in registration order.
pub struct ObservableProperty<T> {
    inner: Rc<RefCell<PropertyInner<T>>>,
}

impl<T> Clone for ObservableProperty<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ObservableProperty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ObservableProperty")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .field("subscriber_count", &inner.subscribers.len())
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> ObservableProperty<T> {
    /// Create a property with the given initial value at version 0.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(PropertyInner {
                value,
                version: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Get a clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Access the current value by reference.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Set a new value, notifying subscribers if it differs.
    pub fn set(&self, value: T) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return;
            }
            inner.value = value;
            inner.version += 1;
        }
        self.notify();
    }

    /// Modify the value in place, notifying subscribers if it changed.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let changed = {
            let mut inner = self.inner.borrow_mut();
            let old = inner.value.clone();
            f(&mut inner.value);
            if inner.value != old {
                inner.version += 1;
                true
            } else {
                false
            }
        };
        if changed {
            self.notify();
        }
    }

    /// Subscribe to changes. Dropping the returned guard unsubscribes.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let strong: CallbackRc<T> = Rc::new(callback);
        self.inner
            .borrow_mut()
            .subscribers
            .push(Rc::downgrade(&strong));
        Subscription {
            _guard: Box::new(strong),
        }
    }

    /// Number of value-changing mutations so far.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Registered subscribers, including dead ones not yet pruned.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    fn notify(&self) {
        let (callbacks, value): (Vec<CallbackRc<T>>, T) = {
            let mut inner = self.inner.borrow_mut();
            inner.subscribers.retain(|w| w.strong_count() > 0);
            let live = inner.subscribers.iter().filter_map(|w| w.upgrade()).collect();
            (live, inner.value.clone())
        };
        if callbacks.is_empty() {
            return;
        }
        tracing::trace!(
            target: "dragsort.observable",
            subscribers = callbacks.len(),
            "property changed"
        );
        for cb in &callbacks {
            cb(&value);
        }
    }
}

/// RAII guard for a subscriber callback.
///
/// Dropping it drops the only strong reference to the callback, so the
/// property's weak entry stops upgrading.
pub struct Subscription {
    _guard: Box<dyn std::any::Any>,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn get_set_basic() {
        let prop = ObservableProperty::new(3);
        assert_eq!(prop.get(), 3);
        prop.set(4);
        assert_eq!(prop.get(), 4);
        assert_eq!(prop.version(), 1);
    }

    #[test]
    fn no_change_no_version_bump() {
        let prop = ObservableProperty::new("a".to_string());
        prop.set("a".to_string());
        assert_eq!(prop.version(), 0);
    }

    #[test]
    fn update_mutates_in_place() {
        let prop = ObservableProperty::new(vec![1, 2]);
        prop.update(|v| v.push(3));
        assert_eq!(prop.get(), vec![1, 2, 3]);
        assert_eq!(prop.version(), 1);
        prop.update(|_| {});
        assert_eq!(prop.version(), 1);
    }

    #[test]
    fn with_access() {
        let prop = ObservableProperty::new(vec![5, 6]);
        assert_eq!(prop.with(Vec::len), 2);
    }

    #[test]
    fn subscriber_receives_new_value() {
        let prop = ObservableProperty::new(0);
        let seen = Rc::new(Cell::new(-1));
        let seen_cb = Rc::clone(&seen);
        let _sub = prop.subscribe(move |v| seen_cb.set(*v));
        prop.set(7);
        assert_eq!(seen.get(), 7);
    }

    #[test]
    fn subscription_drop_unsubscribes() {
        let prop = ObservableProperty::new(0);
        let count = Rc::new(Cell::new(0));
        let count_cb = Rc::clone(&count);
        let sub = prop.subscribe(move |_| count_cb.set(count_cb.get() + 1));
        prop.set(1);
        drop(sub);
        prop.set(2);
        assert_eq!(count.get(), 1);
        assert_eq!(prop.subscriber_count(), 0);
    }

    #[test]
    fn notification_order_is_registration_order() {
        let prop = ObservableProperty::new(0);
        let log = Rc::new(RefCell::new(Vec::new()));
        let a = Rc::clone(&log);
        let b = Rc::clone(&log);
        let _s1 = prop.subscribe(move |_| a.borrow_mut().push("first"));
        let _s2 = prop.subscribe(move |_| b.borrow_mut().push("second"));
        prop.set(1);
        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn clone_shares_state() {
        let a = ObservableProperty::new(1);
        let b = a.clone();
        b.set(9);
        assert_eq!(a.get(), 9);
        assert_eq!(a.version(), 1);
    }

    #[test]
    fn reentrant_set_from_subscriber() {
        let prop = ObservableProperty::new(0);
        let handle = prop.clone();
        let _sub = prop.subscribe(move |v| {
            if *v == 1 {
                handle.set(2);
            }
        });
        prop.set(1);
        assert_eq!(prop.get(), 2);
        assert_eq!(prop.version(), 2);
    }

    #[test]
    fn debug_format() {
        let prop = ObservableProperty::new(42);
        let dbg = format!("{prop:?}");
        assert!(dbg.contains("ObservableProperty"));
        assert!(dbg.contains("42"));
    }
}
