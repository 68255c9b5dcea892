use parking_lot::RwLock;
use std::sync::Arc;

/// Ordered listener registry.
///
/// Notification follows insertion order and duplicates are kept. Dispatch
/// walks a snapshot, so a listener may register or remove listeners while
/// being notified without deadlocking.
pub struct ListenerSet<T: ?Sized> {
    listeners: RwLock<Vec<Arc<T>>>,
}

impl<T: ?Sized> Default for ListenerSet<T> {
    fn default() -> Self {
        Self {
            listeners: RwLock::new(Vec::new()),
        }
    }
}

impl<T: ?Sized> ListenerSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, listener: Arc<T>) {
        self.listeners.write().push(listener);
    }

    /// Removes the first registration of `listener`. Returns whether one was found.
    pub fn remove(&self, listener: &Arc<T>) -> bool {
        let mut listeners = self.listeners.write();
        match listeners.iter().position(|l| Arc::ptr_eq(l, listener)) {
            Some(idx) => {
                listeners.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.read().is_empty()
    }

    pub fn for_each(&self, mut f: impl FnMut(&T)) {
        let snapshot: Vec<Arc<T>> = self.listeners.read().clone();
        for listener in &snapshot {
            f(listener);
        }
    }
}
