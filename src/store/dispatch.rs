//! Thread-safe state ownership and dispatch.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::trace;

use super::reducer::Reducer;

/// Thread-safe owner of one reducer's state.
///
/// Allows multiple handles to dispatch and read concurrently while keeping
/// the reducer itself pure: the lock is held only for the duration of one
/// transition, and each transition sees the complete previous state.
pub struct Store<R: Reducer> {
    inner: Arc<Mutex<R::State>>,
}

impl<R: Reducer> Store<R> {
    /// Create a store holding the state type's default value.
    pub fn new() -> Self {
        Self::with_state(R::State::default())
    }

    /// Create a store holding an explicit initial state.
    pub fn with_state(state: R::State) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    /// Apply one intent to the current state.
    ///
    /// Intents are applied in the order dispatch is called; each transition
    /// runs to completion before the next one starts.
    pub fn dispatch(&self, intent: R::Intent) {
        trace!(?intent, "dispatch");
        let mut guard = self.inner.lock();
        let next = R::reduce(std::mem::take(&mut *guard), intent);
        *guard = next;
    }

    /// Get a clone of the current state.
    pub fn state(&self) -> R::State {
        self.inner.lock().clone()
    }

    /// Run a closure against a borrow of the current state.
    ///
    /// Cheaper than [`Store::state`] when the caller only needs a derived
    /// value. The closure must not dispatch; doing so would deadlock.
    pub fn select<T>(&self, f: impl FnOnce(&R::State) -> T) -> T {
        f(&self.inner.lock())
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
