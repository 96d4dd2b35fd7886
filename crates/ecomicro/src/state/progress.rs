//! Per-species cultivation progress.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;

use crate::platform::{Storage, keys, load_or, save};

/// Completed timeline steps and the "fully cultivated" flag, per species.
///
/// Reads default to "no steps completed, not cultivated" for any species
/// without a stored record. Step indices are not validated against the
/// timeline length: out-of-range indices loaded from storage stay put and
/// are simply never rendered.
#[derive(Debug, Default)]
pub struct ProgressStore {
    steps: FxHashMap<String, BTreeSet<usize>>,
    cultivated: FxHashMap<String, bool>,
}

impl ProgressStore {
    /// Load both records once. Missing or corrupt data means empty records.
    pub fn load(storage: &dyn Storage) -> Self {
        let steps: FxHashMap<String, Vec<usize>> =
            load_or(storage, keys::CULTIVATION_PROGRESS, FxHashMap::default());
        let cultivated: FxHashMap<String, bool> =
            load_or(storage, keys::CULTIVATED, FxHashMap::default());
        Self {
            steps: steps
                .into_iter()
                .map(|(id, indices)| (id, indices.into_iter().collect()))
                .collect(),
            cultivated,
        }
    }

    /// Flip completion of one timeline step and persist. Returns the new state.
    pub fn toggle_step(&mut self, storage: &dyn Storage, species_id: &str, step_index: usize) -> bool {
        let steps = self.steps.entry(species_id.to_string()).or_default();
        let done = if steps.remove(&step_index) {
            false
        } else {
            steps.insert(step_index);
            true
        };
        self.persist_steps(storage);
        done
    }

    /// Set the cultivated flag and persist.
    pub fn set_cultivated(&mut self, storage: &dyn Storage, species_id: &str, cultivated: bool) {
        self.cultivated.insert(species_id.to_string(), cultivated);
        save(storage, keys::CULTIVATED, &self.cultivated);
    }

    /// Flip the cultivated flag and persist. Returns the new state.
    pub fn toggle_cultivated(&mut self, storage: &dyn Storage, species_id: &str) -> bool {
        let cultivated = !self.is_cultivated(species_id);
        self.set_cultivated(storage, species_id, cultivated);
        cultivated
    }

    pub fn is_step_done(&self, species_id: &str, step_index: usize) -> bool {
        self.steps
            .get(species_id)
            .is_some_and(|steps| steps.contains(&step_index))
    }

    /// Number of completed steps recorded for a species.
    pub fn completed_steps(&self, species_id: &str) -> usize {
        self.steps.get(species_id).map_or(0, BTreeSet::len)
    }

    pub fn is_cultivated(&self, species_id: &str) -> bool {
        self.cultivated.get(species_id).copied().unwrap_or(false)
    }

    fn persist_steps(&self, storage: &dyn Storage) {
        // BTreeSet iterates in order, so the stored arrays are stable.
        let records: FxHashMap<&str, Vec<usize>> = self
            .steps
            .iter()
            .map(|(id, steps)| (id.as_str(), steps.iter().copied().collect()))
            .collect();
        save(storage, keys::CULTIVATION_PROGRESS, &records);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStorage;

    #[test]
    fn test_defaults_for_unknown_species() {
        let storage = MemoryStorage::new();
        let progress = ProgressStore::load(&storage);
        assert!(!progress.is_step_done("rucula", 0));
        assert_eq!(progress.completed_steps("rucula"), 0);
        assert!(!progress.is_cultivated("rucula"));
    }

    #[test]
    fn test_toggle_step_flips_and_persists() {
        let storage = MemoryStorage::new();
        let mut progress = ProgressStore::load(&storage);

        assert!(progress.toggle_step(&storage, "rabanete-roxo", 2));
        assert!(progress.is_step_done("rabanete-roxo", 2));

        let reloaded = ProgressStore::load(&storage);
        assert!(reloaded.is_step_done("rabanete-roxo", 2));
        assert_eq!(reloaded.completed_steps("rabanete-roxo"), 1);
    }

    #[test]
    fn test_toggle_step_twice_restores_original_state() {
        let storage = MemoryStorage::new();
        let mut progress = ProgressStore::load(&storage);
        progress.toggle_step(&storage, "couve", 0);
        progress.toggle_step(&storage, "couve", 0);
        assert!(!progress.is_step_done("couve", 0));

        let reloaded = ProgressStore::load(&storage);
        assert_eq!(reloaded.completed_steps("couve"), 0);
    }

    #[test]
    fn test_cultivated_flag_round_trips() {
        let storage = MemoryStorage::new();
        let mut progress = ProgressStore::load(&storage);
        progress.set_cultivated(&storage, "girassol", true);

        let reloaded = ProgressStore::load(&storage);
        assert!(reloaded.is_cultivated("girassol"));
        assert!(!reloaded.is_cultivated("mostarda"));
    }

    #[test]
    fn test_toggle_cultivated() {
        let storage = MemoryStorage::new();
        let mut progress = ProgressStore::load(&storage);
        assert!(progress.toggle_cultivated(&storage, "ervilha"));
        assert!(!progress.toggle_cultivated(&storage, "ervilha"));
    }

    #[test]
    fn test_out_of_range_indices_are_kept_but_inert() {
        let storage = MemoryStorage::new();
        storage
            .write_key(keys::CULTIVATION_PROGRESS, r#"{"rucula":[0,99]}"#)
            .unwrap();

        let progress = ProgressStore::load(&storage);
        assert!(progress.is_step_done("rucula", 0));
        assert!(progress.is_step_done("rucula", 99));
        assert_eq!(progress.completed_steps("rucula"), 2);
    }

    #[test]
    fn test_corrupt_progress_is_treated_as_empty() {
        let storage = MemoryStorage::new();
        storage.write_key(keys::CULTIVATION_PROGRESS, "[]").unwrap();
        let progress = ProgressStore::load(&storage);
        assert_eq!(progress.completed_steps("rucula"), 0);
    }
}
