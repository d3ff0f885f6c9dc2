//! Listener bookkeeping shared by appearance sources.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::ColorScheme;

/// Callback invoked with each platform scheme notification.
pub type SchemeListener = Box<dyn FnMut(ColorScheme)>;

struct Entry {
    id: u64,
    // `None` while the listener is being invoked.
    listener: Option<SchemeListener>,
}

#[derive(Default)]
struct ListenerTable {
    next_id: u64,
    entries: Vec<Entry>,
}

/// An ordered set of scheme listeners.
///
/// Listeners run in subscription order on the thread that calls
/// [`emit`](Self::emit). A listener may subscribe or unsubscribe (including
/// itself) while being notified.
#[derive(Clone, Default)]
pub struct ListenerSet {
    table: Rc<RefCell<ListenerTable>>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener`; it stays registered until the returned
    /// [`Subscription`] is released.
    pub fn subscribe(&self, listener: SchemeListener) -> Subscription {
        let mut table = self.table.borrow_mut();
        let id = table.next_id;
        table.next_id += 1;
        table.entries.push(Entry {
            id,
            listener: Some(listener),
        });
        log::debug!("appearance listener {} subscribed", id);
        Subscription {
            id,
            table: Some(Rc::downgrade(&self.table)),
        }
    }

    /// Delivers `scheme` to every listener registered when the call began.
    pub fn emit(&self, scheme: ColorScheme) {
        let ids: Vec<u64> = self.table.borrow().entries.iter().map(|e| e.id).collect();
        for id in ids {
            let taken = {
                let mut table = self.table.borrow_mut();
                table
                    .entries
                    .iter_mut()
                    .find(|e| e.id == id)
                    .and_then(|e| e.listener.take())
            };
            let Some(mut listener) = taken else {
                continue;
            };
            listener(scheme);
            let mut table = self.table.borrow_mut();
            // Absent if the listener unsubscribed during the call.
            if let Some(entry) = table.entries.iter_mut().find(|e| e.id == id) {
                entry.listener = Some(listener);
            }
        }
    }

    /// Number of live subscriptions.
    pub fn len(&self) -> usize {
        self.table.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Handle to a registered listener.
///
/// The listener is removed exactly once: either by [`unsubscribe`](Self::unsubscribe)
/// or when the handle is dropped. Outliving the source is harmless.
#[must_use = "dropping a Subscription immediately unsubscribes the listener"]
pub struct Subscription {
    id: u64,
    table: Option<Weak<RefCell<ListenerTable>>>,
}

impl Subscription {
    /// Removes the listener now.
    pub fn unsubscribe(mut self) {
        self.release();
    }

    /// Whether the listener is still registered with a live source.
    pub fn is_active(&self) -> bool {
        self.table
            .as_ref()
            .and_then(Weak::upgrade)
            .is_some_and(|table| table.borrow().entries.iter().any(|e| e.id == self.id))
    }

    fn release(&mut self) {
        let Some(weak) = self.table.take() else {
            return;
        };
        if let Some(table) = weak.upgrade() {
            table.borrow_mut().entries.retain(|e| e.id != self.id);
            log::debug!("appearance listener {} released", self.id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn recorder() -> (Rc<RefCell<Vec<ColorScheme>>>, SchemeListener) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, Box::new(move |s| sink.borrow_mut().push(s)))
    }

    #[test]
    fn test_emit_reaches_all_listeners_in_order() {
        let set = ListenerSet::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        let a = Rc::clone(&order);
        let b = Rc::clone(&order);
        let _sa = set.subscribe(Box::new(move |_| a.borrow_mut().push("a")));
        let _sb = set.subscribe(Box::new(move |_| b.borrow_mut().push("b")));

        set.emit(ColorScheme::Dark);
        assert_eq!(*order.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let set = ListenerSet::new();
        let (seen, listener) = recorder();
        let sub = set.subscribe(listener);

        set.emit(ColorScheme::Dark);
        sub.unsubscribe();
        set.emit(ColorScheme::Light);

        assert_eq!(*seen.borrow(), vec![ColorScheme::Dark]);
        assert!(set.is_empty());
    }

    #[test]
    fn test_drop_releases() {
        let set = ListenerSet::new();
        let (seen, listener) = recorder();
        {
            let sub = set.subscribe(listener);
            assert!(sub.is_active());
            assert_eq!(set.len(), 1);
        }
        set.emit(ColorScheme::Dark);
        assert!(seen.borrow().is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_subscription_outlives_source() {
        let set = ListenerSet::new();
        let (_seen, listener) = recorder();
        let sub = set.subscribe(listener);
        drop(set);
        assert!(!sub.is_active());
        sub.unsubscribe();
    }

    #[test]
    fn test_listener_can_release_itself_mid_emit() {
        let set = ListenerSet::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let calls = Rc::new(Cell::new(0));

        let own = Rc::clone(&slot);
        let count = Rc::clone(&calls);
        let sub = set.subscribe(Box::new(move |_| {
            count.set(count.get() + 1);
            if let Some(sub) = own.borrow_mut().take() {
                sub.unsubscribe();
            }
        }));
        *slot.borrow_mut() = Some(sub);

        set.emit(ColorScheme::Dark);
        set.emit(ColorScheme::Dark);
        assert_eq!(calls.get(), 1);
        assert!(set.is_empty());
    }
}
