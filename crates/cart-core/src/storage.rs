//! Storage Layer
//!
//! Key/value abstraction over wherever the cart is persisted. The browser
//! frontend backs it with `localStorage`; tests use `MemoryStorage`.

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::error::CartResult;

/// Synchronous string key/value storage
pub trait CartStorage {
    /// Raw value under `key`, `None` when absent
    fn get(&self, key: &str) -> CartResult<Option<String>>;

    /// Replace the value under `key`
    fn set(&self, key: &str, value: &str) -> CartResult<()>;

    /// Delete `key`; deleting a missing key is not an error
    fn remove(&self, key: &str) -> CartResult<()>;
}

/// In-memory storage for tests and for pages where `localStorage` is
/// unavailable
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed storage with raw entries
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: RefCell::new(entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect()),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl CartStorage for MemoryStorage {
    fn get(&self, key: &str) -> CartResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> CartResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> CartResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

impl<S: CartStorage + ?Sized> CartStorage for &S {
    fn get(&self, key: &str) -> CartResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> CartResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> CartResult<()> {
        (**self).remove(key)
    }
}
