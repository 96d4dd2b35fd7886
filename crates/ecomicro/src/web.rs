//! Web entry point for EcoMicro using ratzilla.
//!
//! This module provides the WASM entry point that uses ratzilla for
//! rendering ratatui widgets in the browser.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use ratatui::Terminal;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::event::KeyEvent as RatzillaKeyEvent;
use ratzilla::{DomBackend, WebRenderer};
use wasm_bindgen::prelude::*;

use crate::components::status_bar::StatusBar;
use crate::components::tab_bar::TabBar;
use crate::components::{Component, EventResult};
use crate::event::{AppKeyEvent, KeyCode};
use crate::modals::{ModalResult, ModalState, handle_modal_key, render_modal};
use crate::platform::WebStorage;
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

/// Web application state wrapped for callback access.
struct WebApp {
    state: AppState,
    /// Pending splash auto-advance. Dropping the handle cancels the
    /// callback, so early dismissal or teardown never fires it late.
    splash_timer: Option<Timeout>,
    // UI components
    tab_bar: TabBar,
    status_bar: StatusBar,
    // Screen instances
    splash_screen: SplashScreen,
    onboarding_screen: OnboardingScreen,
    home_screen: HomeScreen,
    guide_screen: GuideScreen,
    detail_screen: SpeciesDetailScreen,
    favorites_screen: FavoritesScreen,
    tips_screen: TipsScreen,
}

impl WebApp {
    fn new() -> Self {
        Self {
            state: AppState::new(Box::new(WebStorage::new())),
            splash_timer: None,
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

    /// Splash timer fired: advance if the user hasn't already.
    fn on_splash_elapsed(&mut self) {
        self.splash_timer = None;
        self.state.advance_from_splash();
    }

    /// Handle a key event.
    fn handle_key(&mut self, key: AppKeyEvent) {
        // Handle modal first if active
        if !matches!(self.state.modal, ModalState::None) {
            if handle_modal_key(&key) == ModalResult::Dismissed {
                self.state.modal = ModalState::None;
            }
            return;
        }

        match self.state.screen {
            Screen::Splash => {
                // Early dismissal also cancels the pending timer.
                self.splash_timer = None;
                self.splash_screen.handle_key(key, &mut self.state);
            }
            Screen::Onboarding => {
                self.onboarding_screen.handle_key(key, &mut self.state);
            }
            Screen::Main => self.handle_main_key(key),
        }
    }

    fn handle_main_key(&mut self, key: AppKeyEvent) {
        match key.code {
            KeyCode::Char('q') if key.no_modifiers() && !self.state.is_text_entry_active() => {
                // Can't really exit in web; just log the request.
                tracing::info!("Exit requested (q pressed)");
                return;
            }
            KeyCode::Esc if self.state.error_message.is_some() => {
                self.state.clear_error();
                return;
            }
            _ => {}
        }

        if self.state.detail.is_some() {
            let result = self.detail_screen.handle_key(key.clone(), &mut self.state);
            if result != EventResult::NotHandled {
                return;
            }
        }

        let result = self.tab_bar.handle_key(key.clone(), &mut self.state);
        if result != EventResult::NotHandled {
            return;
        }

        let result = match self.state.active_tab {
            TabId::Home => self.home_screen.handle_key(key, &mut self.state),
            TabId::Guide => self.guide_screen.handle_key(key, &mut self.state),
            TabId::Favorites => self.favorites_screen.handle_key(key, &mut self.state),
            TabId::Tips => self.tips_screen.handle_key(key, &mut self.state),
        };

        if result == EventResult::Exit {
            tracing::info!("Exit requested from screen");
        }
    }

    /// Draw the UI using the shared screen renderers.
    fn draw(&mut self, frame: &mut ratatui::Frame) {
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

        render_modal(frame, &self.state.modal);
    }

    fn render_active_screen(&mut self, frame: &mut ratatui::Frame, area: Rect) {
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
}

/// Set up event listener to prevent default browser behavior for captured keys.
fn setup_prevent_default() {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let window = web_sys::window().expect("no global window");
    let document = window.document().expect("no document");

    let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
        // Tab switches panels and "/" opens search; keep them from the browser.
        if matches!(event.key().as_str(), "Tab" | "/") {
            event.prevent_default();
        }
    });

    document
        .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
        .expect("failed to add keydown listener");

    // Prevent the closure from being dropped
    closure.forget();
}

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging to browser console
    crate::init_logging_web();

    tracing::info!("EcoMicro web version starting");

    // Prevent default browser behavior for keys we capture (Tab, "/")
    setup_prevent_default();

    // Create the app state
    let app = Rc::new(RefCell::new(WebApp::new()));

    // Arm the one-shot splash timer; the handle lives in the app so that
    // dismissing the splash (or dropping the app) cancels it.
    let timer_app = Rc::clone(&app);
    let timeout = Timeout::new(SPLASH_DURATION_MS, move || {
        timer_app.borrow_mut().on_splash_elapsed();
    });
    app.borrow_mut().splash_timer = Some(timeout);

    // Create the terminal
    let backend = DomBackend::new().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let terminal: Terminal<DomBackend> =
        Terminal::new(backend).map_err(|e| JsValue::from_str(&e.to_string()))?;

    // Set up key event handler
    let key_app = Rc::clone(&app);
    terminal.on_key_event(move |key_event: RatzillaKeyEvent| {
        let key: AppKeyEvent = (&key_event).into();
        key_app.borrow_mut().handle_key(key);
    });

    // Set up draw callback
    terminal.draw_web(move |frame| {
        app.borrow_mut().draw(frame);
    });

    Ok(())
}
