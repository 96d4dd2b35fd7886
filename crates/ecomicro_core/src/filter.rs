//! Catalog filtering and free-text search.
//!
//! Pure functions over the static catalog: no side effects, deterministic,
//! cheap enough to run on every keystroke.

use crate::species::{Difficulty, Light, Species};

/// Inclusive cultivation-day range for the time facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub min: u16,
    pub max: u16,
}

impl TimeRange {
    pub const UP_TO_A_WEEK: TimeRange = TimeRange { min: 0, max: 7 };
    pub const ONE_TO_TWO_WEEKS: TimeRange = TimeRange { min: 7, max: 14 };
    pub const OVER_TWO_WEEKS: TimeRange = TimeRange { min: 14, max: 100 };

    pub const ALL: [TimeRange; 3] = [
        TimeRange::UP_TO_A_WEEK,
        TimeRange::ONE_TO_TWO_WEEKS,
        TimeRange::OVER_TWO_WEEKS,
    ];

    pub fn label(&self) -> &'static str {
        match (self.min, self.max) {
            (0, 7) => "Até 7 dias",
            (7, 14) => "7-14 dias",
            _ => "Mais de 14 dias",
        }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, days: u16) -> bool {
        self.min <= days && days <= self.max
    }
}

/// Current search string plus optional facet selections.
///
/// Transient UI state: never persisted, reset via [`FilterState::clear`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub query: String,
    pub time: Option<TimeRange>,
    pub difficulty: Option<Difficulty>,
    pub light: Option<Light>,
    pub benefit: Option<String>,
}

impl FilterState {
    /// True when no predicate is active and filtering is the identity.
    pub fn is_default(&self) -> bool {
        self.query.is_empty() && !self.has_facets()
    }

    /// True when at least one facet (not the text query) is selected.
    pub fn has_facets(&self) -> bool {
        self.time.is_some()
            || self.difficulty.is_some()
            || self.light.is_some()
            || self.benefit.is_some()
    }

    /// Reset the query and every facet.
    pub fn clear(&mut self) {
        *self = FilterState::default();
    }

    /// Reset the facets, keeping the text query.
    pub fn clear_facets(&mut self) {
        self.time = None;
        self.difficulty = None;
        self.light = None;
        self.benefit = None;
    }

    /// Whether `species` satisfies every active predicate.
    pub fn matches(&self, species: &Species) -> bool {
        if !self.query.is_empty() && !matches_query(species, &self.query.to_lowercase()) {
            return false;
        }
        if let Some(time) = self.time
            && !time.contains(species.cultivation_days)
        {
            return false;
        }
        if let Some(difficulty) = self.difficulty
            && species.difficulty != difficulty
        {
            return false;
        }
        if let Some(light) = self.light
            && species.light != light
        {
            return false;
        }
        if let Some(benefit) = &self.benefit
            && !species.benefits.iter().any(|b| b == benefit)
        {
            return false;
        }
        true
    }
}

/// Case-insensitive substring match against name, id slug, flavor text and
/// benefit tags. The id slug is the unaccented form of the name, so queries
/// typed without accents ("ruc") still find "Rúcula".
fn matches_query(species: &Species, query_lower: &str) -> bool {
    if species.name.to_lowercase().contains(query_lower) || species.id.contains(query_lower) {
        return true;
    }
    if let Some(flavor) = species.flavor
        && flavor.to_lowercase().contains(query_lower)
    {
        return true;
    }
    species
        .benefits
        .iter()
        .any(|b| b.to_lowercase().contains(query_lower))
}

/// Narrow `list` to the ordered subsequence matching `filter`.
///
/// An empty result is a valid output; callers render an empty state.
pub fn filter_species<'a>(list: &'a [Species], filter: &FilterState) -> Vec<&'a Species> {
    list.iter().filter(|s| filter.matches(s)).collect()
}
