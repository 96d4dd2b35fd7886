//! Main application state and the screen flow.

use crate::modals::{MessageModal, ModalState};
use crate::platform::{MemoryStorage, Storage, keys, load_or, save};
use crate::state::{
    DetailState, FavoritesState, FavoritesStore, GuideState, HomeState, OnboardingState,
    ProgressStore, TabId, TipsState,
};

/// Top-level flow: splash, first-run onboarding, then the tabbed main UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Splash,
    Onboarding,
    Main,
}

/// Main application state.
///
/// All business mutations (favorites, progress, onboarding flag) go through
/// methods here so persistence never leaks into presentation code.
pub struct AppState {
    storage: Box<dyn Storage>,
    pub screen: Screen,
    pub active_tab: TabId,
    /// Species detail overlay; `None` shows the active tab's screen.
    pub detail: Option<DetailState>,

    pub favorites: FavoritesStore,
    pub progress: ProgressStore,

    // Per-screen state
    pub home_state: HomeState,
    pub onboarding_state: OnboardingState,
    pub guide_state: GuideState,
    pub favorites_state: FavoritesState,
    pub tips_state: TipsState,

    /// Frame counter driving the splash loading bar.
    pub splash_ticks: u32,
    pub modal: ModalState,
    pub error_message: Option<String>,
    pub exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Box::new(MemoryStorage::new()))
    }
}

impl AppState {
    /// Build the state on top of a storage backend, loading the persisted
    /// stores exactly once.
    pub fn new(storage: Box<dyn Storage>) -> Self {
        let favorites = FavoritesStore::load(storage.as_ref());
        let progress = ProgressStore::load(storage.as_ref());

        Self {
            storage,
            screen: Screen::Splash,
            active_tab: TabId::Home,
            detail: None,
            favorites,
            progress,
            home_state: HomeState::default(),
            onboarding_state: OnboardingState::default(),
            guide_state: GuideState::default(),
            favorites_state: FavoritesState::default(),
            tips_state: TipsState::default(),
            splash_ticks: 0,
            modal: ModalState::None,
            error_message: None,
            exit: false,
        }
    }

    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    // ------------------------------------------------------------------
    // Flow transitions
    // ------------------------------------------------------------------

    /// Leave the splash screen. The persisted onboarding flag decides the
    /// next screen and is evaluated exactly once, here.
    pub fn advance_from_splash(&mut self) {
        if self.screen != Screen::Splash {
            return;
        }
        self.screen = if load_or(self.storage.as_ref(), keys::ONBOARDING_COMPLETE, false) {
            Screen::Main
        } else {
            Screen::Onboarding
        };
    }

    /// Finish (or skip) onboarding, remembering that it was seen.
    pub fn complete_onboarding(&mut self) {
        if self.screen != Screen::Onboarding {
            return;
        }
        save(self.storage.as_ref(), keys::ONBOARDING_COMPLETE, &true);
        self.screen = Screen::Main;
    }

    pub fn switch_tab(&mut self, tab: TabId) {
        self.detail = None;
        self.active_tab = tab;
    }

    pub fn next_tab(&mut self) {
        let next = (self.active_tab.index() + 1) % TabId::ALL.len();
        self.switch_tab(TabId::from_index(next).unwrap());
    }

    pub fn prev_tab(&mut self) {
        let current = self.active_tab.index();
        let prev = if current == 0 {
            TabId::ALL.len() - 1
        } else {
            current - 1
        };
        self.switch_tab(TabId::from_index(prev).unwrap());
    }

    /// Open the species detail overlay. The id is not validated here; an
    /// unknown id renders the not-found view instead of crashing.
    pub fn open_species(&mut self, id: &str) {
        self.detail = Some(DetailState::new(id, self.active_tab));
    }

    /// Back-navigation from the detail overlay to whichever tab opened it.
    pub fn close_detail(&mut self) {
        if let Some(detail) = self.detail.take() {
            self.active_tab = detail.opened_from;
        }
    }

    /// True while a screen owns the keyboard for text entry, so global
    /// shortcuts (tab digits, quit) must stand down.
    pub fn is_text_entry_active(&self) -> bool {
        (self.guide_state.searching && self.detail.is_none() && self.active_tab == TabId::Guide)
            || (self.tips_state.searching && self.detail.is_none() && self.active_tab == TabId::Tips)
    }

    // ------------------------------------------------------------------
    // Store mutations (persist on every change)
    // ------------------------------------------------------------------

    /// Flip a species in or out of the favorites. Returns the new membership.
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        self.favorites.toggle(self.storage.as_ref(), id)
    }

    pub fn remove_favorite(&mut self, id: &str) {
        self.favorites.remove(self.storage.as_ref(), id);
    }

    /// Flip completion of one timeline step. Returns the new state.
    pub fn toggle_step(&mut self, species_id: &str, step_index: usize) -> bool {
        self.progress
            .toggle_step(self.storage.as_ref(), species_id, step_index)
    }

    /// Flip the cultivated flag. Returns the new state.
    pub fn toggle_cultivated(&mut self, species_id: &str) -> bool {
        self.progress
            .toggle_cultivated(self.storage.as_ref(), species_id)
    }

    // ------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn notify(&mut self, title: &str, message: &str) {
        self.modal = ModalState::Message(MessageModal::info(title, message));
    }

    /// Hand text to the platform share channel. Failures are caught and
    /// reported as a transient notification, never fatal.
    pub fn share(&mut self, text: &str) {
        match crate::platform::share_text(text) {
            Ok(()) => self.notify("Compartilhar", "Conteúdo pronto para compartilhar."),
            Err(e) => self.set_error(format!("Não foi possível compartilhar: {e}")),
        }
    }

    pub fn tick_splash(&mut self) {
        self.splash_ticks = self.splash_ticks.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStorage;

    #[test]
    fn test_initial_screen_is_splash() {
        let state = AppState::default();
        assert_eq!(state.screen, Screen::Splash);
        assert_eq!(state.active_tab, TabId::Home);
    }

    #[test]
    fn test_first_run_goes_through_onboarding() {
        let mut state = AppState::default();
        state.advance_from_splash();
        assert_eq!(state.screen, Screen::Onboarding);

        state.complete_onboarding();
        assert_eq!(state.screen, Screen::Main);
    }

    #[test]
    fn test_returning_user_skips_onboarding() {
        let storage = MemoryStorage::new();
        save(&storage, keys::ONBOARDING_COMPLETE, &true);

        let mut state = AppState::new(Box::new(storage));
        state.advance_from_splash();
        assert_eq!(state.screen, Screen::Main);
    }

    #[test]
    fn test_completing_onboarding_sets_the_flag() {
        let mut state = AppState::default();
        state.advance_from_splash();
        state.complete_onboarding();
        assert!(load_or(state.storage(), keys::ONBOARDING_COMPLETE, false));
    }

    #[test]
    fn test_advance_from_splash_is_a_no_op_elsewhere() {
        let mut state = AppState::default();
        state.advance_from_splash();
        state.complete_onboarding();
        let before = state.screen;
        state.advance_from_splash();
        assert_eq!(state.screen, before);
    }

    #[test]
    fn test_toggle_favorite_is_its_own_inverse() {
        let mut state = AppState::default();
        assert!(state.toggle_favorite("rabanete-roxo"));
        assert!(state.favorites.is_favorite("rabanete-roxo"));
        assert!(!state.toggle_favorite("rabanete-roxo"));
        assert!(state.favorites.is_empty());
    }

    #[test]
    fn test_detail_back_restores_originating_tab() {
        let mut state = AppState::default();
        state.screen = Screen::Main;
        state.switch_tab(TabId::Guide);
        state.open_species("rucula");
        assert!(state.detail.is_some());

        state.close_detail();
        assert!(state.detail.is_none());
        assert_eq!(state.active_tab, TabId::Guide);
    }

    #[test]
    fn test_switching_tabs_closes_detail() {
        let mut state = AppState::default();
        state.screen = Screen::Main;
        state.switch_tab(TabId::Guide);
        state.open_species("rucula");

        state.switch_tab(TabId::Tips);
        assert!(state.detail.is_none());
        assert_eq!(state.active_tab, TabId::Tips);
    }

    #[test]
    fn test_opening_unknown_species_does_not_panic() {
        let mut state = AppState::default();
        state.screen = Screen::Main;
        state.open_species("nao-existe");
        assert!(ecomicro_core::species_by_id("nao-existe").is_none());
        state.close_detail();
    }

    #[test]
    fn test_tab_cycling_wraps() {
        let mut state = AppState::default();
        state.screen = Screen::Main;
        for _ in 0..TabId::ALL.len() {
            state.next_tab();
        }
        assert_eq!(state.active_tab, TabId::Home);

        state.prev_tab();
        assert_eq!(state.active_tab, TabId::Tips);
    }
}
