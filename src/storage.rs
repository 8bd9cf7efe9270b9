//! Key-Value Storage
//!
//! Abstract string slot storage used to persist the list.
//! `BrowserStorage` talks to `window.localStorage`, `MemoryStorage` keeps
//! everything in a map and is used by tests.

use thiserror::Error;

/// Errors raised by a storage backend
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to read key {key}: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write key {key}: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to serialize list: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Simple get/set by key with string values
pub trait KeyValueStorage {
    /// Read the value under `key`, `Ok(None)` when the key is absent
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Overwrite the value under `key`
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// `window.localStorage` of the current page
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> StorageResult<web_sys::Storage> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .ok()
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &S {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}

#[cfg(test)]
pub use memory::MemoryStorage;


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_get_missing_key() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("nothing").unwrap(), None);
    }

    #[test]
    fn test_memory_set_overwrites() {
        let storage = MemoryStorage::with_value("k", "old");
        storage.set("k", "new").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("new"));
        assert_eq!(storage.write_count(), 1);
    }

    #[test]
    fn test_read_only_rejects_writes() {
        let storage = MemoryStorage::read_only();
        let err = storage.set("k", "v").unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
        assert_eq!(storage.raw("k"), None);
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            StorageError::Unavailable.to_string(),
            "local storage is not available"
        );
        let err = StorageError::Write {
            key: "shoppingItems".to_string(),
            reason: "QuotaExceededError".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to write key shoppingItems: QuotaExceededError"
        );
    }
}
