//! Generic subscribe/notify state container.

use std::sync::{Arc, PoisonError, RwLock};

type Subscriber<T> = Box<dyn Fn(&T) + Send + Sync>;

/// A shared state container with observer registration.
///
/// `Store` is the reactive primitive underneath the favorites and
/// search-filter stores: state lives behind a lock, mutations go through
/// [`set`](Store::set) or [`update`](Store::update), and every mutation
/// notifies all subscribers synchronously before the mutating call returns.
/// That synchronous delivery is what keeps rendered UI consistent within a
/// single event-processing turn.
///
/// Cloning a `Store` clones the *handle*, not the state; all clones observe
/// and mutate the same underlying value, which is how the domain stores act
/// as process-wide singletons.
pub struct Store<T> {
    state: Arc<RwLock<T>>,
    subscribers: Arc<RwLock<Vec<Subscriber<T>>>>,
}

impl<T: Clone> Store<T> {
    /// Creates a new store with the given initial state.
    pub fn new(initial: T) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial)),
            subscribers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Returns a clone of the current state.
    pub fn get(&self) -> T {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Reads the state through a closure without cloning it.
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    /// Replaces the state and notifies all subscribers.
    pub fn set(&self, new_state: T) {
        {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            *state = new_state;
        }
        self.notify();
    }

    /// Mutates the state in place and notifies all subscribers.
    ///
    /// The lock is released before notification so subscribers may read the
    /// store (but a subscriber that mutates it will recurse into `notify`).
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            f(&mut state);
        }
        self.notify();
    }

    /// Registers an observer called after every mutation.
    ///
    /// Subscribers are never dropped for the lifetime of the store; the
    /// domain stores live as long as the application, so unregistration has
    /// no use case here.
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Box::new(callback));
    }

    fn notify(&self) {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        let subscribers = self
            .subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        tracing::trace!(subscriber_count = subscribers.len(), "notifying subscribers");
        for subscriber in subscribers.iter() {
            subscriber(&state);
        }
    }
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("Store").field("state", &*state).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone, Debug, PartialEq)]
    struct Counter {
        count: usize,
    }

    #[test]
    fn get_and_set() {
        let store = Store::new(Counter { count: 0 });
        assert_eq!(store.get().count, 0);

        store.set(Counter { count: 42 });
        assert_eq!(store.get().count, 42);
    }

    #[test]
    fn update_mutates_in_place() {
        let store = Store::new(Counter { count: 0 });
        store.update(|state| state.count += 10);
        assert_eq!(store.get().count, 10);
    }

    #[test]
    fn subscribers_notified_once_per_mutation() {
        let store = Store::new(Counter { count: 0 });

        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = Arc::clone(&calls);
        store.subscribe(move |_state| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(calls.load(Ordering::SeqCst), 0);

        store.update(|state| state.count += 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        store.set(Counter { count: 5 });
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn clones_share_state_and_subscribers() {
        let store = Store::new(Counter { count: 0 });
        let handle = store.clone();

        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = Arc::clone(&calls);
        store.subscribe(move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        handle.update(|state| state.count = 7);
        assert_eq!(store.get().count, 7);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn read_borrows_without_cloning() {
        let store = Store::new(Counter { count: 3 });
        let doubled = store.read(|state| state.count * 2);
        assert_eq!(doubled, 6);
    }
}
