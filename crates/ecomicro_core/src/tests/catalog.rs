//! Catalog invariant tests

use rustc_hash::FxHashSet;

use crate::catalog::{benefit_tags, species_by_id, species_list};

#[test]
fn test_ids_are_unique() {
    let mut seen = FxHashSet::default();
    for species in species_list() {
        assert!(seen.insert(species.id), "duplicate species id: {}", species.id);
    }
}

#[test]
fn test_lookup_by_id() {
    let species = species_by_id("rucula").expect("rucula should be in the catalog");
    assert_eq!(species.name, "Rúcula");
    assert_eq!(species.cultivation_days, 7);
    assert_eq!(species.difficulty.label(), "Fácil");
}

#[test]
fn test_lookup_unknown_id_is_none() {
    assert!(species_by_id("nao-existe").is_none());
    assert!(species_by_id("").is_none());
}

#[test]
fn test_timelines_are_ordered_by_day() {
    for species in species_list() {
        let days: Vec<u16> = species.timeline.iter().map(|s| s.day.start_day()).collect();
        let mut sorted = days.clone();
        sorted.sort_unstable();
        assert_eq!(days, sorted, "timeline out of order for {}", species.id);
    }
}

#[test]
fn test_every_species_has_a_timeline() {
    for species in species_list() {
        assert!(species.has_timeline(), "{} has no timeline", species.id);
    }
}

#[test]
fn test_benefit_tags_are_sorted_and_distinct() {
    let tags = benefit_tags();
    assert!(!tags.is_empty());
    for pair in tags.windows(2) {
        assert!(pair[0] < pair[1], "tags not sorted/deduped: {pair:?}");
    }
}
