//! Per-screen UI state containers.
//!
//! These hold transient presentation state (selections, panel visibility,
//! search modes). Business data lives in the stores; nothing here is
//! persisted.

use ecomicro_core::FilterState;

use crate::data::tips::TipCategory;
use crate::state::TabId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomePanel {
    QuickAccess,
    Suggestions,
}

#[derive(Debug)]
pub struct HomeState {
    pub focused_panel: HomePanel,
    pub quick_index: usize,
    pub suggestion_index: usize,
}

impl Default for HomeState {
    fn default() -> Self {
        Self {
            focused_panel: HomePanel::QuickAccess,
            quick_index: 0,
            suggestion_index: 0,
        }
    }
}

#[derive(Debug, Default)]
pub struct OnboardingState {
    pub slide: usize,
}

/// Guide list state: selection, search mode and the filter panel.
#[derive(Debug, Default)]
pub struct GuideState {
    pub selected_index: usize,
    /// Keystrokes go to the search query while true.
    pub searching: bool,
    pub show_filters: bool,
    /// Highlighted row inside the filter panel (time, difficulty, light, benefit).
    pub filter_row: usize,
    pub filter: FilterState,
}

#[derive(Debug, Default)]
pub struct FavoritesState {
    pub selected_index: usize,
    pub show_filters: bool,
    /// Highlighted row inside the filter panel (benefit, time).
    pub filter_row: usize,
    pub filter: FilterState,
}

#[derive(Debug, Default)]
pub struct TipsState {
    pub selected_index: usize,
    pub searching: bool,
    pub query: String,
    pub category: Option<TipCategory>,
    /// Show the full text of the selected tip.
    pub expanded: bool,
}

/// Species detail overlay state.
#[derive(Debug)]
pub struct DetailState {
    pub species_id: String,
    pub selected_step: usize,
    /// Tab to return to on back-navigation.
    pub opened_from: TabId,
}

impl DetailState {
    pub fn new(species_id: &str, opened_from: TabId) -> Self {
        Self {
            species_id: species_id.to_string(),
            selected_step: 0,
            opened_from,
        }
    }
}
