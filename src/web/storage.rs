//! `localStorage` backend.
//!
//! Storage is resolved on every call: merely touching `window.localStorage`
//! throws in some privacy modes, and a page can lose access at runtime.

use web_sys::Storage;

use crate::store::{StorageBackend, StoreError};

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<Storage, StoreError> {
        let window = web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_owned()))?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(StoreError::Unavailable("localStorage disabled".to_owned())),
            Err(err) => Err(StoreError::Unavailable(format!("{err:?}"))),
        }
    }
}

impl StorageBackend for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?
            .get_item(key)
            .map_err(|err| StoreError::Unavailable(format!("{err:?}")))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|err| StoreError::Rejected(format!("{err:?}")))
    }
}
