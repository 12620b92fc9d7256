// SPDX-License-Identifier: MPL-2.0
//! Process-wide notification log.
//!
//! The `Store` owns the ordered sequence of active notifications. Each
//! mutation replaces the sequence with a new immutable snapshot and pushes it
//! synchronously to every subscriber, in mutation order.
//!
//! The store is a cheap-to-clone handle; all clones observe the same log.
//! It is meant for the single-threaded UI loop and is neither `Send` nor `Sync`.

use super::notification::{Notification, NotificationId};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

/// Immutable view of the log at one point in time.
pub type Snapshot = Rc<[Notification]>;

type Callback = Box<dyn FnMut(&Snapshot)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SubscriberId(u64);

struct Subscriber {
    id: SubscriberId,
    callback: Callback,
    /// Queued snapshots older than the one this subscriber started from.
    skip: usize,
}

struct Inner {
    state: RefCell<Snapshot>,
    subscribers: RefCell<Vec<Subscriber>>,
    /// Subscribers dropped while a delivery had the list checked out.
    cancelled: RefCell<Vec<SubscriberId>>,
    pending: RefCell<VecDeque<Snapshot>>,
    delivering: Cell<bool>,
    next_subscriber: Cell<u64>,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            state: RefCell::new(Rc::from(Vec::new())),
            subscribers: RefCell::new(Vec::new()),
            cancelled: RefCell::new(Vec::new()),
            pending: RefCell::new(VecDeque::new()),
            delivering: Cell::new(false),
            next_subscriber: Cell::new(0),
        }
    }
}

/// Shared handle to the notification log.
#[derive(Clone, Default)]
pub struct Store {
    inner: Rc<Inner>,
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("len", &self.len())
            .field("subscribers", &self.inner.subscribers.borrow().len())
            .finish()
    }
}

impl Store {
    /// Creates a new empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a notification to the end of the log.
    ///
    /// Returns `false` and leaves the log untouched when an entry with the
    /// same id is already present.
    pub fn add(&self, notification: Notification) -> bool {
        let current = self.notifications();
        if current.iter().any(|n| n.id() == notification.id()) {
            log::warn!(
                "ignoring notification {}: id already in the log",
                notification.id()
            );
            return false;
        }

        log::debug!(
            "notification {} added ({:?}, {:?})",
            notification.id(),
            notification.kind(),
            notification.severity()
        );

        let mut next = Vec::with_capacity(current.len() + 1);
        next.extend(current.iter().cloned());
        next.push(notification);
        self.replace(next.into());
        true
    }

    /// Removes the notification with the given id.
    ///
    /// Removing an id that is not in the log is a no-op: nothing changes and
    /// no subscriber is notified. Returns whether an entry was removed.
    pub fn remove(&self, id: NotificationId) -> bool {
        let current = self.notifications();
        if !current.iter().any(|n| n.id() == id) {
            return false;
        }

        log::debug!("notification {id} removed");
        let next: Vec<Notification> = current.iter().filter(|n| n.id() != id).cloned().collect();
        self.replace(next.into());
        true
    }

    /// Empties the log.
    pub fn clear(&self) {
        if self.is_empty() {
            return;
        }
        log::debug!("notification log cleared ({} entries)", self.len());
        self.replace(Rc::from(Vec::new()));
    }

    /// Returns the current snapshot, in arrival order.
    #[must_use]
    pub fn notifications(&self) -> Snapshot {
        Rc::clone(&self.inner.state.borrow())
    }

    /// Returns a copy of the notification with the given id, if present.
    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<Notification> {
        self.inner
            .state
            .borrow()
            .iter()
            .find(|n| n.id() == id)
            .cloned()
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.inner.state.borrow().iter().any(|n| n.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.state.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.state.borrow().is_empty()
    }

    /// Registers an observer.
    ///
    /// The callback receives the current snapshot right away, then every new
    /// snapshot after each mutation. Dropping the returned guard unsubscribes.
    ///
    /// When called from inside a delivery, snapshots still queued at that
    /// point are older than the one handed over and are not replayed.
    pub fn subscribe(&self, callback: impl FnMut(&Snapshot) + 'static) -> Subscription {
        let id = SubscriberId(self.inner.next_subscriber.get());
        self.inner.next_subscriber.set(id.0 + 1);

        let mut callback: Callback = Box::new(callback);
        callback(&self.notifications());

        let skip = self.inner.pending.borrow().len();
        self.inner
            .subscribers
            .borrow_mut()
            .push(Subscriber { id, callback, skip });

        Subscription {
            store: Rc::downgrade(&self.inner),
            id,
        }
    }

    fn replace(&self, next: Snapshot) {
        *self.inner.state.borrow_mut() = Rc::clone(&next);
        self.inner.pending.borrow_mut().push_back(next);
        self.flush();
    }

    /// Delivers queued snapshots in order.
    ///
    /// A mutation made from inside a callback only queues its snapshot; the
    /// outermost delivery loop picks it up once the current round is done.
    fn flush(&self) {
        if self.inner.delivering.replace(true) {
            return;
        }

        loop {
            let Some(snapshot) = self.inner.pending.borrow_mut().pop_front() else {
                break;
            };

            let mut checked_out = std::mem::take(&mut *self.inner.subscribers.borrow_mut());
            for subscriber in &mut checked_out {
                if self.inner.cancelled.borrow().contains(&subscriber.id) {
                    continue;
                }
                if subscriber.skip > 0 {
                    subscriber.skip -= 1;
                    continue;
                }
                (subscriber.callback)(&snapshot);
            }

            let cancelled = std::mem::take(&mut *self.inner.cancelled.borrow_mut());
            checked_out.retain(|s| !cancelled.contains(&s.id));

            // Subscribers registered during the round landed in the emptied list.
            let mut subscribers = self.inner.subscribers.borrow_mut();
            let joined = std::mem::take(&mut *subscribers);
            checked_out.extend(joined);
            *subscribers = checked_out;
        }

        self.inner.delivering.set(false);
    }
}

/// Guard returned by [`Store::subscribe`]; unsubscribes when dropped.
pub struct Subscription {
    store: Weak<Inner>,
    id: SubscriberId,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Subscription").field(&self.id.0).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(inner) = self.store.upgrade() else {
            return;
        };

        if let Ok(mut subscribers) = inner.subscribers.try_borrow_mut() {
            subscribers.retain(|s| s.id != self.id);
        }
        if inner.delivering.get() {
            inner.cancelled.borrow_mut().push(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::notification::{Kind, Severity};
    use std::collections::HashSet;

    fn toast(message: &str) -> Notification {
        Notification::new(Severity::Success, Kind::Toast, message)
    }

    fn recorder(store: &Store) -> (Rc<RefCell<Vec<Vec<NotificationId>>>>, Subscription) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let subscription = store.subscribe(move |snapshot| {
            sink.borrow_mut()
                .push(snapshot.iter().map(Notification::id).collect());
        });
        (seen, subscription)
    }

    #[test]
    fn new_store_is_empty() {
        let store = Store::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn add_appends_in_arrival_order() {
        let store = Store::new();
        let first = toast("first");
        let second = toast("second");
        let (first_id, second_id) = (first.id(), second.id());

        store.add(first);
        store.add(second);

        let ids: Vec<_> = store.notifications().iter().map(Notification::id).collect();
        assert_eq!(ids, vec![first_id, second_id]);
    }

    #[test]
    fn identical_content_with_different_ids_coexists() {
        let store = Store::new();
        store.add(toast("same"));
        store.add(toast("same"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn add_rejects_duplicate_id() {
        let store = Store::new();
        let notification = toast("once");
        assert!(store.add(notification.clone()));
        assert!(!store.add(notification));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_deletes_matching_entry() {
        let store = Store::new();
        let keep = toast("keep");
        let drop = toast("drop");
        let (keep_id, drop_id) = (keep.id(), drop.id());
        store.add(keep);
        store.add(drop);

        assert!(store.remove(drop_id));
        assert!(store.contains(keep_id));
        assert!(!store.contains(drop_id));
    }

    #[test]
    fn remove_of_unknown_id_is_a_silent_no_op() {
        let store = Store::new();
        store.add(toast("stay"));
        let before = store.notifications();
        let (seen, _subscription) = recorder(&store);

        assert!(!store.remove(NotificationId::new()));

        assert!(Rc::ptr_eq(&before, &store.notifications()));
        // Only the initial delivery.
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn remove_is_idempotent() {
        let store = Store::new();
        let notification = toast("twice");
        let id = notification.id();
        store.add(notification);

        assert!(store.remove(id));
        assert!(!store.remove(id));
        assert!(store.is_empty());
    }

    #[test]
    fn clear_empties_the_log() {
        let store = Store::new();
        for i in 0..4 {
            store.add(toast(&format!("toast-{i}")));
        }
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn mutations_replace_the_snapshot() {
        let store = Store::new();
        store.add(toast("a"));
        let before = store.notifications();
        store.add(toast("b"));

        assert_eq!(before.len(), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn ids_stay_unique_over_mixed_operations() {
        let store = Store::new();
        let mut known = Vec::new();
        for i in 0..50 {
            let notification = toast(&format!("n-{i}"));
            known.push(notification.id());
            store.add(notification.clone());
            if i % 3 == 0 {
                store.add(notification);
            }
            if i % 4 == 0 {
                store.remove(known[i / 2]);
            }
            if i % 7 == 0 {
                store.remove(NotificationId::new());
            }

            let snapshot = store.notifications();
            let unique: HashSet<_> = snapshot.iter().map(Notification::id).collect();
            assert_eq!(unique.len(), snapshot.len());
        }
    }

    #[test]
    fn subscriber_gets_current_state_then_every_mutation() {
        let store = Store::new();
        let existing = toast("existing");
        let existing_id = existing.id();
        store.add(existing);

        let (seen, _subscription) = recorder(&store);
        let added = toast("added");
        let added_id = added.id();
        store.add(added);
        store.remove(existing_id);
        store.clear();

        assert_eq!(
            *seen.borrow(),
            vec![
                vec![existing_id],
                vec![existing_id, added_id],
                vec![added_id],
                vec![],
            ]
        );
    }

    #[test]
    fn dropping_the_guard_unsubscribes() {
        let store = Store::new();
        let (seen, subscription) = recorder(&store);
        drop(subscription);

        store.add(toast("unseen"));
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn mutation_from_a_callback_is_delivered_after_the_current_round() {
        let store = Store::new();
        let follow_up = toast("follow-up");
        let follow_up_id = follow_up.id();

        let reentrant = store.clone();
        let mut pending = Some(follow_up);
        let _reacting = store.subscribe(move |snapshot| {
            if !snapshot.is_empty() {
                if let Some(next) = pending.take() {
                    reentrant.add(next);
                }
            }
        });
        let (seen, _recording) = recorder(&store);

        let trigger = toast("trigger");
        let trigger_id = trigger.id();
        store.add(trigger);

        assert_eq!(
            *seen.borrow(),
            vec![vec![], vec![trigger_id], vec![trigger_id, follow_up_id]]
        );
    }

    #[test]
    fn subscribing_during_delivery_starts_from_the_latest_state() {
        let store = Store::new();
        let late: Rc<RefCell<Option<(Rc<RefCell<Vec<Vec<NotificationId>>>>, Subscription)>>> =
            Rc::new(RefCell::new(None));

        let second = toast("second");
        let third = toast("third");
        let (second_id, third_id) = (second.id(), third.id());

        let reentrant = store.clone();
        let slot = Rc::clone(&late);
        let mut queued = Some((second, third));
        let _reacting = store.subscribe(move |snapshot| {
            if snapshot.is_empty() {
                return;
            }
            if let Some((second, third)) = queued.take() {
                reentrant.add(second);
                reentrant.add(third);
                *slot.borrow_mut() = Some(recorder(&reentrant));
            }
        });

        let first = toast("first");
        let first_id = first.id();
        store.add(first);

        let fourth = toast("fourth");
        let fourth_id = fourth.id();
        store.add(fourth);

        let guard = late.borrow();
        let (seen, _) = guard.as_ref().expect("late subscriber registered");
        assert_eq!(
            *seen.borrow(),
            vec![
                vec![first_id, second_id, third_id],
                vec![first_id, second_id, third_id, fourth_id],
            ]
        );
    }

    #[test]
    fn unsubscribing_during_delivery_stops_further_callbacks() {
        let store = Store::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let calls = Rc::new(Cell::new(0));

        let handle = Rc::clone(&slot);
        let counter = Rc::clone(&calls);
        let subscription = store.subscribe(move |snapshot| {
            counter.set(counter.get() + 1);
            if !snapshot.is_empty() {
                handle.borrow_mut().take();
            }
        });
        *slot.borrow_mut() = Some(subscription);

        store.add(toast("one"));
        store.add(toast("two"));

        // Initial delivery plus the round that dropped the guard.
        assert_eq!(calls.get(), 2);
    }
}
