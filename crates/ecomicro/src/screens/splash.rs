//! Splash screen shown at startup.
//!
//! Auto-advances after [`SPLASH_DURATION_MS`] unless the user dismisses it
//! earlier with any key. The timer itself lives with the platform entry
//! point; this screen only renders and handles the early dismissal.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::components::{Component, EventResult};
use crate::event::AppKeyEvent;
use crate::state::AppState;
use crate::util::styles::{ACCENT_COLOR, HELP_COLOR, PRIMARY_COLOR};

/// How long the splash stays up before advancing on its own.
pub const SPLASH_DURATION_MS: u32 = 3_000;

const LOADING_BAR_WIDTH: usize = 24;

pub struct SplashScreen;

impl SplashScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SplashScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SplashScreen {
    fn handle_key(&mut self, _key: AppKeyEvent, state: &mut AppState) -> EventResult {
        // Any key dismisses the splash early.
        state.advance_from_splash();
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(6),
                Constraint::Min(0),
                Constraint::Length(2),
            ])
            .split(area);

        // Animated fill driven by the frame counter.
        let filled = (state.splash_ticks as usize) % (LOADING_BAR_WIDTH + 1);
        let bar = format!(
            "{}{}",
            "█".repeat(filled),
            "░".repeat(LOADING_BAR_WIDTH - filled)
        );

        let logo = Paragraph::new(vec![
            Line::from(Span::styled("🌿", Style::default().fg(PRIMARY_COLOR))),
            Line::from(Span::styled(
                "Eco Micro",
                Style::default()
                    .fg(PRIMARY_COLOR)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Cultive saúde, colha vitalidade.",
                Style::default()
                    .fg(ACCENT_COLOR)
                    .add_modifier(Modifier::ITALIC),
            )),
            Line::from(""),
            Line::from(Span::styled(bar, Style::default().fg(PRIMARY_COLOR))),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(logo, chunks[1]);

        let hint = Paragraph::new(Line::from(Span::styled(
            "Pressione qualquer tecla para continuar",
            Style::default().fg(HELP_COLOR),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(hint, chunks[3]);
    }
}
