//! Shared single-threaded store handle.

use std::cell::RefCell;
use std::rc::Rc;

use crate::store::KeyValueStore;

/// Cloneable handle to one store, shared by several components.
///
/// The page runs on a single event loop, so sharing is `Rc<RefCell<_>>`.
/// Every clone sees the same entries.
///
/// ```rust
/// use folio_store::{KeyValueStore, MemoryStore, SharedStore};
///
/// let store = SharedStore::new(MemoryStore::new());
/// let mut theme_side = store.clone();
/// theme_side.set("portfolio_theme", "ocean");
///
/// assert_eq!(store.get("portfolio_theme").as_deref(), Some("ocean"));
/// ```
pub struct SharedStore<S> {
    inner: Rc<RefCell<S>>,
}

impl<S> SharedStore<S> {
    /// Wraps `store` in a shared handle.
    pub fn new(store: S) -> Self {
        Self {
            inner: Rc::new(RefCell::new(store)),
        }
    }

    /// Runs `f` with shared access to the underlying store.
    pub fn with<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.inner.borrow())
    }

    /// Runs `f` with exclusive access to the underlying store.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut self.inner.borrow_mut())
    }
}

impl<S> Clone for SharedStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for SharedStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedStore")
            .field("inner", &self.inner.borrow())
            .finish()
    }
}

impl<S: KeyValueStore> KeyValueStore for SharedStore<S> {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        self.inner.borrow_mut().set(key, value)
    }

    fn remove(&mut self, key: &str) {
        self.inner.borrow_mut().remove(key)
    }

    fn contains(&self, key: &str) -> bool {
        self.inner.borrow().contains(key)
    }
}
