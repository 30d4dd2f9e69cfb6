//! Scoped listener subscriptions.
//!
//! Detectors hand out a [`Subscription`] guard for every registered
//! callback. Dropping the guard releases the listener, which ties listener
//! lifetime to component lifetime in the embedding layer: hold the guard
//! in the component, and teardown unsubscribes automatically.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Callback storage shared between a detector and its subscription guards.
pub(crate) struct Listeners<E> {
    inner: Rc<RefCell<ListenerTable<E>>>,
}

struct ListenerTable<E> {
    next_id: u64,
    entries: Vec<(u64, Box<dyn FnMut(&E)>)>,
}

/// Type-erased removal hook so [`Subscription`] does not need the event
/// type parameter.
trait Unsubscribe {
    fn remove(&mut self, id: u64) -> bool;
}

impl<E> Unsubscribe for ListenerTable<E> {
    fn remove(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }
}

impl<E: 'static> Listeners<E> {
    pub(crate) fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(ListenerTable {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Register a callback; the returned guard unsubscribes on drop.
    pub(crate) fn subscribe(&self, callback: impl FnMut(&E) + 'static) -> Subscription {
        let mut table = self.inner.borrow_mut();
        let id = table.next_id;
        table.next_id += 1;
        table.entries.push((id, Box::new(callback)));
        drop(table);

        let erased: Rc<RefCell<dyn Unsubscribe>> = self.inner.clone();
        Subscription {
            table: Rc::downgrade(&erased),
            id,
        }
    }

    /// Invoke every live callback with the event.
    ///
    /// The listener table is borrowed for the duration of the dispatch, so
    /// callbacks must not subscribe or unsubscribe on the same detector
    /// reentrantly.
    pub(crate) fn emit(&self, event: &E) {
        for (_, callback) in self.inner.borrow_mut().entries.iter_mut() {
            callback(event);
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }
}

/// Guard for a registered gesture listener.
///
/// The listener stays active while the guard is alive; dropping it (or
/// calling [`Subscription::unsubscribe`]) releases the listener. If the
/// detector itself is gone, dropping the guard is a no-op.
#[must_use = "dropping a Subscription immediately unsubscribes the listener"]
pub struct Subscription {
    table: Weak<RefCell<dyn Unsubscribe>>,
    id: u64,
}

impl Subscription {
    /// Release the listener explicitly.
    ///
    /// Equivalent to dropping the guard; provided for call sites where the
    /// intent should be visible.
    pub fn unsubscribe(self) {
        // Drop impl does the work
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(table) = self.table.upgrade() {
            table.borrow_mut().remove(self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
