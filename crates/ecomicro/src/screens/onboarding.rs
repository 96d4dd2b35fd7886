//! First-run onboarding slides.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::components::{Component, EventResult};
use crate::event::{AppKeyEvent, KeyCode};
use crate::state::AppState;
use crate::util::styles::{ACCENT_COLOR, HELP_COLOR, PRIMARY_COLOR};

struct Slide {
    title: &'static str,
    text: &'static str,
}

const SLIDES: [Slide; 3] = [
    Slide {
        title: "Plante saúde em poucos dias",
        text: "Com o EcoMicro, cultivar alimentos supernutritivos em casa ficou fácil, rápido e acessível.",
    },
    Slide {
        title: "Passo a passo descomplicado",
        text: "Aprenda como cultivar dezenas de espécies com guias visuais, dicas práticas e vídeos curtos.",
    },
    Slide {
        title: "Transforme sua alimentação em 7 dias",
        text: "Colha microverdes frescos direto da sua casa. Sem agrotóxicos, sem complicação.",
    },
];

pub struct OnboardingScreen;

impl OnboardingScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OnboardingScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for OnboardingScreen {
    fn handle_key(&mut self, key: AppKeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Enter | KeyCode::Right | KeyCode::Char(' ') => {
                if state.onboarding_state.slide + 1 < SLIDES.len() {
                    state.onboarding_state.slide += 1;
                } else {
                    state.complete_onboarding();
                }
                EventResult::Handled
            }
            KeyCode::Left => {
                state.onboarding_state.slide = state.onboarding_state.slide.saturating_sub(1);
                EventResult::Handled
            }
            // "Pular": skipping also counts as having seen the onboarding.
            KeyCode::Esc | KeyCode::Char('p') => {
                state.complete_onboarding();
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let slide_index = state.onboarding_state.slide.min(SLIDES.len() - 1);
        let slide = &SLIDES[slide_index];

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(8),
                Constraint::Min(0),
                Constraint::Length(2),
            ])
            .split(area);

        let dots: String = (0..SLIDES.len())
            .map(|i| if i == slide_index { "●" } else { "○" })
            .collect::<Vec<_>>()
            .join(" ");

        let next_label = if slide_index + 1 < SLIDES.len() {
            "Próximo →"
        } else {
            "Começar agora"
        };

        let content = Paragraph::new(vec![
            Line::from(Span::styled(
                slide.title,
                Style::default()
                    .fg(PRIMARY_COLOR)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(slide.text, Style::default().fg(ACCENT_COLOR))),
            Line::from(""),
            Line::from(Span::styled(dots, Style::default().fg(PRIMARY_COLOR))),
            Line::from(""),
            Line::from(Span::styled(
                format!("[Enter] {next_label}"),
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(content, chunks[1]);

        let skip = Paragraph::new(Line::from(Span::styled(
            "[Esc] Pular",
            Style::default().fg(HELP_COLOR),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(skip, chunks[3]);
    }
}
