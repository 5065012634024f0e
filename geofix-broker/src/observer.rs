//! Observer contract and registration bookkeeping.

use std::sync::Arc;

use parking_lot::Mutex;

use geofix_platform::Position;

/// An application-level consumer of position and first-fix notifications.
///
/// Callbacks are invoked synchronously on the platform's callback thread,
/// in registration order. They are infallible by design: the broker does
/// not catch panics, so a panicking observer unwinds through the dispatch
/// and aborts the remaining notifications for that event. Keep callback
/// bodies cheap and non-blocking.
pub trait PositionObserver: Send + Sync {
    /// A new position fix arrived. `position` carries the platform's
    /// source timestamp; the broker's stored snapshot (via
    /// [`PositionBroker::last_position`]) carries the wall-clock time of
    /// receipt instead.
    ///
    /// [`PositionBroker::last_position`]: crate::broker::PositionBroker::last_position
    fn on_position_update(&self, position: &Position);

    /// The first successful fix since updates started was obtained.
    /// Fired at most once per broker lifetime.
    fn on_first_fix(&self) {}
}

/// Insertion-ordered observer collection.
///
/// Registration carries no dedup guarantee beyond container semantics: the
/// same observer registered twice is notified twice. Identity is pointer
/// identity of the `Arc`.
#[derive(Default)]
pub(crate) struct ObserverRegistry {
    observers: Mutex<Vec<Arc<dyn PositionObserver>>>,
}

impl ObserverRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append an observer. Returns whether the collection changed, which
    /// for an insertion-ordered list is always true.
    pub(crate) fn register(&self, observer: Arc<dyn PositionObserver>) -> bool {
        self.observers.lock().push(observer);
        true
    }

    /// Remove the first occurrence of `observer`, by pointer identity.
    /// Returns whether the collection changed.
    pub(crate) fn unregister(&self, observer: &Arc<dyn PositionObserver>) -> bool {
        let mut observers = self.observers.lock();
        match observers.iter().position(|o| Arc::ptr_eq(o, observer)) {
            Some(index) => {
                observers.remove(index);
                true
            }
            None => false,
        }
    }

    /// Clone the current observer list for lock-free fanout.
    pub(crate) fn snapshot(&self) -> Vec<Arc<dyn PositionObserver>> {
        self.observers.lock().clone()
    }

    pub(crate) fn len(&self) -> usize {
        self.observers.lock().len()
    }
}
