use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::components::{Component, EventResult, status_bar::StatusBar, tab_bar::TabBar};
use crate::event::{AppKeyEvent, KeyCode};
use crate::modals::{ModalResult, ModalState, handle_modal_key, render_modal};
use crate::platform::NativeStorage;
use crate::screens::{
    favorites::FavoritesScreen,
    guide::GuideScreen,
    home::HomeScreen,
    onboarding::OnboardingScreen,
    species_detail::SpeciesDetailScreen,
    splash::{SPLASH_DURATION_MS, SplashScreen},
    tips::TipsScreen,
};
use crate::state::{AppState, Screen, TabId};

/// Poll interval while idle.
const IDLE_TICK: Duration = Duration::from_millis(250);
/// Shorter poll while the splash animates its loading bar.
const SPLASH_TICK: Duration = Duration::from_millis(100);

pub struct App {
    state: AppState,
    /// When the splash auto-advances if the user doesn't dismiss it first.
    splash_deadline: Instant,
    tab_bar: TabBar,
    status_bar: StatusBar,
    splash_screen: SplashScreen,
    onboarding_screen: OnboardingScreen,
    home_screen: HomeScreen,
    guide_screen: GuideScreen,
    detail_screen: SpeciesDetailScreen,
    favorites_screen: FavoritesScreen,
    tips_screen: TipsScreen,
}

impl Default for App {
    fn default() -> Self {
        Self::with_state(AppState::default())
    }
}

impl App {
    /// Create the app persisting into the given data directory.
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self::with_state(AppState::new(Box::new(NativeStorage::new(data_dir))))
    }

    fn with_state(state: AppState) -> Self {
        Self {
            state,
            splash_deadline: Instant::now() + Duration::from_millis(SPLASH_DURATION_MS as u64),
            tab_bar: TabBar,
            status_bar: StatusBar,
            splash_screen: SplashScreen,
            onboarding_screen: OnboardingScreen,
            home_screen: HomeScreen,
            guide_screen: GuideScreen,
            detail_screen: SpeciesDetailScreen,
            favorites_screen: FavoritesScreen,
            tips_screen: TipsScreen,
        }
    }

    /// Runs the application's main loop until the user quits.
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        match self.state.screen {
            Screen::Splash => {
                self.state.tick_splash();
                self.splash_screen.render(frame, frame.area(), &self.state);
            }
            Screen::Onboarding => {
                self.onboarding_screen
                    .render(frame, frame.area(), &self.state);
            }
            Screen::Main => {
                // Main layout: tab bar, content, status bar
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(2), // Tab bar
                        Constraint::Min(0),    // Content
                        Constraint::Length(2), // Status bar
                    ])
                    .split(frame.area());

                self.tab_bar.render(frame, chunks[0], &self.state);
                self.render_active_screen(frame, chunks[1]);
                self.status_bar.render(frame, chunks[2], &self.state);
            }
        }

        // Modal overlay (if active)
        render_modal(frame, &self.state.modal);
    }

    fn render_active_screen(&mut self, frame: &mut Frame, area: Rect) {
        if self.state.detail.is_some() {
            self.detail_screen.render(frame, area, &self.state);
            return;
        }
        match self.state.active_tab {
            TabId::Home => self.home_screen.render(frame, area, &self.state),
            TabId::Guide => self.guide_screen.render(frame, area, &self.state),
            TabId::Favorites => self.favorites_screen.render(frame, area, &self.state),
            TabId::Tips => self.tips_screen.render(frame, area, &self.state),
        }
    }

    fn handle_events(&mut self) -> io::Result<()> {
        let timeout = if self.state.screen == Screen::Splash {
            self.splash_deadline
                .saturating_duration_since(Instant::now())
                .min(SPLASH_TICK)
        } else {
            IDLE_TICK
        };

        if event::poll(timeout)? {
            if let Event::Key(key_event) = event::read()?
                && key_event.kind == KeyEventKind::Press
            {
                self.handle_key_event(key_event.into());
            }
        }

        // One-shot auto-advance once the splash delay elapses. Leaving the
        // splash screen implicitly cancels the deadline check.
        if self.state.screen == Screen::Splash && Instant::now() >= self.splash_deadline {
            self.state.advance_from_splash();
        }

        Ok(())
    }

    fn handle_key_event(&mut self, key: AppKeyEvent) {
        // Handle modal first if active
        if !matches!(self.state.modal, ModalState::None) {
            if handle_modal_key(&key) == ModalResult::Dismissed {
                self.state.modal = ModalState::None;
            }
            return;
        }

        match self.state.screen {
            Screen::Splash => {
                self.splash_screen.handle_key(key, &mut self.state);
            }
            Screen::Onboarding => {
                self.onboarding_screen.handle_key(key, &mut self.state);
            }
            Screen::Main => self.handle_main_key(key),
        }
    }

    fn handle_main_key(&mut self, key: AppKeyEvent) {
        // Global key bindings
        match key.code {
            KeyCode::Char('q') if key.no_modifiers() && !self.state.is_text_entry_active() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('c') if key.ctrl() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Esc if self.state.error_message.is_some() => {
                self.state.clear_error();
                return;
            }
            _ => {}
        }

        // The detail overlay owns the keyboard while open.
        if self.state.detail.is_some() {
            let result = self.detail_screen.handle_key(key.clone(), &mut self.state);
            if result != EventResult::NotHandled {
                return;
            }
        }

        // Try tab bar first
        let result = self.tab_bar.handle_key(key.clone(), &mut self.state);
        if result != EventResult::NotHandled {
            return;
        }

        // Then try active screen
        let result = match self.state.active_tab {
            TabId::Home => self.home_screen.handle_key(key, &mut self.state),
            TabId::Guide => self.guide_screen.handle_key(key, &mut self.state),
            TabId::Favorites => self.favorites_screen.handle_key(key, &mut self.state),
            TabId::Tips => self.tips_screen.handle_key(key, &mut self.state),
        };

        if result == EventResult::Exit {
            self.state.exit = true;
        }
    }
}
