#![forbid(unsafe_code)]

//! Publish-once, read-many storage for immutable locale tables.
//!
//! Compiled patterns and per-locale tables are built completely, then
//! published behind an `Arc`. Formatting only ever reads them. Replacing a
//! table never mutates the live one: a new value is built and swapped in
//! atomically, and readers holding the old `Arc` keep a consistent snapshot.
//!
//! | Operation | Cost |
//! |-----------|------|
//! | [`SharedStore::load`] | wait-free, one refcount increment |
//! | [`SharedStore::load_ref`] | wait-free guard, no refcount traffic |
//! | [`SharedStore::publish`] | one `Arc` allocation, atomic swap |
//! | [`SharedStore::update`] | read-copy-update loop |
//!
//! # Example
//!
//! ```
//! use unitfmt_core::read_optimized::SharedStore;
//!
//! let store = SharedStore::new(vec!["en"]);
//! let before = store.load();
//! store.update(|tags| {
//!     let mut tags = tags.clone();
//!     tags.push("de");
//!     tags
//! });
//! assert_eq!(*before, ["en"]);
//! assert_eq!(*store.load(), ["en", "de"]);
//! ```

use std::sync::Arc;

use arc_swap::ArcSwap;

/// Wait-free reads via [`arc_swap::ArcSwap`].
pub struct SharedStore<T> {
    inner: ArcSwap<T>,
}

impl<T> SharedStore<T> {
    /// Create a store holding `val`.
    pub fn new(val: T) -> Self {
        Self {
            inner: ArcSwap::from_pointee(val),
        }
    }

    /// A shared handle to the current value.
    #[inline]
    pub fn load(&self) -> Arc<T> {
        self.inner.load_full()
    }

    /// Read without touching the refcount; prefer for short-lived access.
    #[inline]
    pub fn load_ref(&self) -> arc_swap::Guard<Arc<T>> {
        self.inner.load()
    }

    /// Atomically replace the stored value.
    #[inline]
    pub fn publish(&self, val: T) {
        self.inner.store(Arc::new(val));
    }

    /// Atomically replace the stored value with an existing handle.
    #[inline]
    pub fn publish_arc(&self, val: Arc<T>) {
        self.inner.store(val);
    }

    /// Build a replacement from the current value and swap it in, retrying
    /// if another writer published in between.
    pub fn update(&self, mut f: impl FnMut(&T) -> T) {
        self.inner.rcu(|current| f(&**current));
    }
}

impl<T: Default> Default for SharedStore<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SharedStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedStore")
            .field("inner", &*self.inner.load())
            .finish()
    }
}
