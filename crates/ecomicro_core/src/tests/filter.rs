//! Search and facet filtering tests

use crate::catalog::species_list;
use crate::filter::{FilterState, TimeRange, filter_species};
use crate::species::{Difficulty, Light};

fn query(q: &str) -> FilterState {
    FilterState {
        query: q.to_string(),
        ..FilterState::default()
    }
}

#[test]
fn test_default_filter_is_identity() {
    let filter = FilterState::default();
    assert!(filter.is_default());

    let result = filter_species(species_list(), &filter);
    assert_eq!(result.len(), species_list().len());
}

#[test]
fn test_name_substring_matches() {
    // Any case-insensitive substring of a name finds that species.
    for species in species_list() {
        let needle: String = species.name.to_lowercase().chars().take(3).collect();
        let result = filter_species(species_list(), &query(&needle));
        assert!(
            result.iter().any(|s| s.id == species.id),
            "query {needle:?} should find {}",
            species.id
        );
    }
}

#[test]
fn test_query_is_case_insensitive() {
    let lower = filter_species(species_list(), &query("brócolis"));
    let upper = filter_species(species_list(), &query("BRÓCOLIS"));
    assert_eq!(lower.len(), 1);
    assert_eq!(lower[0].id, upper[0].id);
}

#[test]
fn test_unaccented_query_matches_via_slug() {
    // "ruc" is not a substring of "rúcula", but it is of the id slug.
    let result = filter_species(species_list(), &query("ruc"));
    assert!(result.iter().any(|s| s.id == "rucula"));
}

#[test]
fn test_unmatched_query_yields_empty_result() {
    let result = filter_species(species_list(), &query("xyz"));
    assert!(result.is_empty());
}

#[test]
fn test_query_matches_benefit_tags() {
    let result = filter_species(species_list(), &query("detox"));
    assert!(!result.is_empty());
    assert!(result.iter().all(|s| s.benefits.contains(&"Detox")));
}

#[test]
fn test_time_range_is_inclusive_on_both_ends() {
    let range = TimeRange { min: 5, max: 7 };
    assert!(range.contains(5));
    assert!(range.contains(7));
    assert!(!range.contains(4));
    assert!(!range.contains(8));
}

#[test]
fn test_time_facet() {
    let filter = FilterState {
        time: Some(TimeRange::UP_TO_A_WEEK),
        ..FilterState::default()
    };
    let result = filter_species(species_list(), &filter);
    assert!(!result.is_empty());
    assert!(result.iter().all(|s| s.cultivation_days <= 7));
}

#[test]
fn test_difficulty_facet_is_exact() {
    let filter = FilterState {
        difficulty: Some(Difficulty::Hard),
        ..FilterState::default()
    };
    let result = filter_species(species_list(), &filter);
    assert!(result.iter().all(|s| s.difficulty == Difficulty::Hard));
}

#[test]
fn test_benefit_facet_is_tag_membership() {
    let filter = FilterState {
        benefit: Some("Energia".to_string()),
        ..FilterState::default()
    };
    let result = filter_species(species_list(), &filter);
    assert!(!result.is_empty());
    assert!(result.iter().all(|s| s.benefits.contains(&"Energia")));
}

#[test]
fn test_facets_combine_with_and() {
    let filter = FilterState {
        time: Some(TimeRange::UP_TO_A_WEEK),
        difficulty: Some(Difficulty::Easy),
        light: Some(Light::Indirect),
        ..FilterState::default()
    };
    let result = filter_species(species_list(), &filter);
    assert!(result.iter().all(|s| {
        s.cultivation_days <= 7 && s.difficulty == Difficulty::Easy && s.light == Light::Indirect
    }));

    // Conjunction: the combined result is never larger than a single facet's.
    let single = FilterState {
        difficulty: Some(Difficulty::Easy),
        ..FilterState::default()
    };
    assert!(result.len() <= filter_species(species_list(), &single).len());
}

#[test]
fn test_query_and_facet_combine() {
    // "rabanete" matches by name, but the Hard facet excludes it.
    let filter = FilterState {
        query: "rabanete".to_string(),
        difficulty: Some(Difficulty::Hard),
        ..FilterState::default()
    };
    assert!(filter_species(species_list(), &filter).is_empty());
}

#[test]
fn test_clear_resets_everything() {
    let mut filter = FilterState {
        query: "rúcula".to_string(),
        time: Some(TimeRange::UP_TO_A_WEEK),
        difficulty: Some(Difficulty::Easy),
        light: Some(Light::Indirect),
        benefit: Some("Foco".to_string()),
    };
    filter.clear();
    assert!(filter.is_default());
}

#[test]
fn test_clear_facets_keeps_query() {
    let mut filter = FilterState {
        query: "couve".to_string(),
        benefit: Some("Detox".to_string()),
        ..FilterState::default()
    };
    filter.clear_facets();
    assert!(!filter.has_facets());
    assert_eq!(filter.query, "couve");
}

#[test]
fn test_result_preserves_catalog_order() {
    let filter = FilterState {
        difficulty: Some(Difficulty::Easy),
        ..FilterState::default()
    };
    let result = filter_species(species_list(), &filter);
    let positions: Vec<usize> = result
        .iter()
        .map(|r| species_list().iter().position(|s| s.id == r.id).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}
