//! Single-preference store with failure-absorbing reads and writes.
//!
//! DESIGN
//! ======
//! Backends report failures honestly through [`StoreError`]. The
//! [`PreferenceStore`] wrapper is the only place those errors are observed:
//! a failed read becomes "no preference" and a failed write is dropped, so
//! disabled storage, quota exhaustion, or privacy mode never reach a
//! controller.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage rejected write: {0}")]
    Rejected(String),
}

/// Raw key-value persistence.
pub trait StorageBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory backend. Clones share the same map, which lets a test
/// "reload" the page by building a second store over a clone.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Backend that remembers nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBackend;

impl StorageBackend for NullBackend {
    fn read(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Ok(None)
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Ok(())
    }
}

/// One string preference under a fixed key.
#[derive(Debug, Clone)]
pub struct PreferenceStore<B> {
    backend: B,
    key: String,
}

impl<B: StorageBackend> PreferenceStore<B> {
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self { backend, key: key.into() }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Stored preference, or `None` if nothing is stored or storage failed.
    #[must_use]
    pub fn get(&self) -> Option<String> {
        match self.backend.read(&self.key) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("preference read for {:?} ignored: {err}", self.key);
                None
            }
        }
    }

    /// Persist `value`. Failures are logged and otherwise ignored.
    pub fn set(&self, value: &str) {
        if let Err(err) = self.backend.write(&self.key, value) {
            log::debug!("preference write for {:?} ignored: {err}", self.key);
        }
    }
}
