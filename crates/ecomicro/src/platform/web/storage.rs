//! Web storage implementation using browser LocalStorage.

use gloo_storage::{LocalStorage, Storage as GlooStorage};

use crate::platform::storage::{Storage, StorageError};

/// Key prefix keeping EcoMicro entries apart from other apps on the origin.
const KEY_PREFIX: &str = "ecomicro_";

/// Web storage backed by the browser's LocalStorage API.
///
/// Values are stored as JSON strings under prefixed keys.
#[derive(Debug, Default)]
pub struct WebStorage;

impl WebStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage_key(key: &str) -> String {
        format!("{}{}", KEY_PREFIX, key)
    }
}

impl Storage for WebStorage {
    fn read_key(&self, key: &str) -> Result<Option<String>, StorageError> {
        LocalStorage::raw()
            .get_item(&Self::storage_key(key))
            .map_err(|_| StorageError::NotAvailable("LocalStorage unavailable".to_string()))
    }

    fn write_key(&self, key: &str, json: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(&Self::storage_key(key), json)
            .map_err(|_| StorageError::Io(format!("Failed to write {} to LocalStorage", key)))
    }
}
