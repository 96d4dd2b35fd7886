//! Storage abstraction for platform-independent persistence.
//!
//! Implementations only move raw JSON strings; the typed repository helpers
//! [`load_or`] and [`save`] isolate (de)serialization and default
//! substitution from the stores that use them.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Persisted entry keys. Values are JSON-serialized.
pub mod keys {
    /// Onboarding-completed flag (bool).
    pub const ONBOARDING_COMPLETE: &str = "onboardingComplete";
    /// Favorited ids (array of strings).
    pub const FAVORITES: &str = "favorites";
    /// Per-species cultivated flag (map of id to bool).
    pub const CULTIVATED: &str = "cultivated";
    /// Per-species completed timeline steps (map of id to array of indices).
    pub const CULTIVATION_PROGRESS: &str = "cultivationProgress";
}

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    /// I/O error (file not found, permission denied, etc.)
    Io(String),
    /// Serialization error
    Serialize(String),
    /// Storage not available (e.g., LocalStorage blocked)
    NotAvailable(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
            StorageError::NotAvailable(msg) => write!(f, "Storage not available: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Platform-independent key-value store holding JSON strings.
///
/// Implemented for the filesystem on native, LocalStorage on web, and an
/// in-memory map for tests.
pub trait Storage {
    /// Read the raw JSON for a key. `Ok(None)` when the key is absent.
    fn read_key(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write the raw JSON for a key.
    fn write_key(&self, key: &str, json: &str) -> Result<(), StorageError>;
}

/// Load a typed value, substituting `default` when the key is missing,
/// unreadable or does not parse. Never fails the caller.
pub fn load_or<T: DeserializeOwned>(storage: &dyn Storage, key: &str, default: T) -> T {
    match storage.read_key(key) {
        Ok(Some(json)) => match serde_json::from_str(&json) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "Discarding unparseable stored value");
                default
            }
        },
        Ok(None) => default,
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to read stored value");
            default
        }
    }
}

/// Serialize and persist a value. Best-effort: failures are logged and
/// swallowed, never surfaced to the caller.
pub fn save<T: Serialize + ?Sized>(storage: &dyn Storage, key: &str, value: &T) {
    let json = match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to serialize value");
            return;
        }
    };
    if let Err(e) = storage.write_key(key, &json) {
        tracing::warn!(key, error = %e, "Failed to persist value");
    }
}

/// In-memory storage, used as the test double and as the fallback when no
/// platform store is wired up.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn read_key(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write_key(&self, key: &str, json: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), json.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_or_returns_default_when_missing() {
        let storage = MemoryStorage::new();
        let value: bool = load_or(&storage, keys::ONBOARDING_COMPLETE, false);
        assert!(!value);
    }

    #[test]
    fn test_load_or_returns_default_on_corrupt_json() {
        let storage = MemoryStorage::new();
        storage.write_key(keys::FAVORITES, "{not json").unwrap();
        let value: Vec<String> = load_or(&storage, keys::FAVORITES, vec![]);
        assert!(value.is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let storage = MemoryStorage::new();
        let ids = vec!["rucula".to_string(), "brocolis".to_string()];
        save(&storage, keys::FAVORITES, &ids);

        let loaded: Vec<String> = load_or(&storage, keys::FAVORITES, vec![]);
        assert_eq!(loaded, ids);
    }

    #[test]
    fn test_save_overwrites_previous_value() {
        let storage = MemoryStorage::new();
        save(&storage, keys::ONBOARDING_COMPLETE, &false);
        save(&storage, keys::ONBOARDING_COMPLETE, &true);
        assert!(load_or(&storage, keys::ONBOARDING_COMPLETE, false));
    }
}
