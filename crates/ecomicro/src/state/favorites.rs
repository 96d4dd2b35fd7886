//! User-curated set of favorite species.

use rustc_hash::FxHashSet;

use crate::platform::{Storage, keys, load_or, save};

/// Set of species ids the user has marked, persisted on every change.
///
/// Ids that no longer resolve against the catalog (removed species, tips
/// favorited from the tips screen) are tolerated and simply never shown.
#[derive(Debug, Default)]
pub struct FavoritesStore {
    ids: FxHashSet<String>,
}

impl FavoritesStore {
    /// Load the persisted set once. Missing or corrupt data is an empty set.
    pub fn load(storage: &dyn Storage) -> Self {
        let ids: Vec<String> = load_or(storage, keys::FAVORITES, Vec::new());
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    /// Flip membership of `id` and persist. Returns the new membership.
    pub fn toggle(&mut self, storage: &dyn Storage, id: &str) -> bool {
        let added = if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        };
        self.persist(storage);
        added
    }

    /// Remove `id` outright (favorites screen batch action).
    pub fn remove(&mut self, storage: &dyn Storage, id: &str) {
        if self.ids.remove(id) {
            self.persist(storage);
        }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    fn persist(&self, storage: &dyn Storage) {
        // Sorted so the stored JSON is stable across sessions.
        let mut ids: Vec<&str> = self.ids.iter().map(String::as_str).collect();
        ids.sort_unstable();
        save(storage, keys::FAVORITES, &ids);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStorage;

    #[test]
    fn test_starts_empty() {
        let storage = MemoryStorage::new();
        let favorites = FavoritesStore::load(&storage);
        assert!(favorites.is_empty());
        assert!(!favorites.is_favorite("rucula"));
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let storage = MemoryStorage::new();
        let mut favorites = FavoritesStore::load(&storage);

        assert!(favorites.toggle(&storage, "rabanete-roxo"));
        assert!(favorites.is_favorite("rabanete-roxo"));
        assert_eq!(favorites.len(), 1);

        assert!(!favorites.toggle(&storage, "rabanete-roxo"));
        assert!(!favorites.is_favorite("rabanete-roxo"));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_persists_on_every_toggle() {
        let storage = MemoryStorage::new();
        let mut favorites = FavoritesStore::load(&storage);
        favorites.toggle(&storage, "couve");
        favorites.toggle(&storage, "alfafa");

        // A fresh load sees exactly what was toggled on.
        let reloaded = FavoritesStore::load(&storage);
        assert_eq!(reloaded.len(), 2);
        assert!(reloaded.is_favorite("couve"));
        assert!(reloaded.is_favorite("alfafa"));
    }

    #[test]
    fn test_corrupt_persisted_data_is_treated_as_empty() {
        let storage = MemoryStorage::new();
        storage.write_key(keys::FAVORITES, "not-a-json-array").unwrap();

        let favorites = FavoritesStore::load(&storage);
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_remove_persists() {
        let storage = MemoryStorage::new();
        let mut favorites = FavoritesStore::load(&storage);
        favorites.toggle(&storage, "girassol");
        favorites.remove(&storage, "girassol");

        let reloaded = FavoritesStore::load(&storage);
        assert!(reloaded.is_empty());
    }
}
