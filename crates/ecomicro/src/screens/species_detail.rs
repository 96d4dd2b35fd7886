//! Species detail: quick info, cultivation timeline and progress.

use ecomicro_core::{Species, species_by_id};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::components::icons::step_icon_glyph;
use crate::components::lists::{calculate_centered_scroll, handle_list_navigation};
use crate::components::{Component, EventResult};
use crate::event::{AppKeyEvent, KeyCode};
use crate::state::AppState;
use crate::util::styles::{
    ACCENT_COLOR, FAVORITE_COLOR, HELP_COLOR, PRIMARY_COLOR, difficulty_color,
};

/// Lines each timeline entry occupies in the list.
const LINES_PER_STEP: usize = 3;

pub struct SpeciesDetailScreen;

impl SpeciesDetailScreen {
    pub fn new() -> Self {
        Self
    }

    fn share_text(species: &Species) -> String {
        format!(
            "🌱 {} — microverde\nDuração: {}\nLuz: {}\nRegas: {}\nDificuldade: {}\nFoto: {}",
            species.name,
            species.cultivation_time,
            species.light.label(),
            species.watering,
            species.difficulty.label(),
            species.image,
        )
    }

    fn render_not_found(&self, frame: &mut Frame, area: Rect, species_id: &str) {
        let content = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Espécie não encontrada.",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("Nenhum registro para \"{species_id}\"."),
                Style::default().fg(HELP_COLOR),
            )),
            Line::from(""),
            Line::from(Span::styled("[Esc] Voltar", Style::default().fg(ACCENT_COLOR))),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(content, area);
    }

    fn render_quick_info(&self, frame: &mut Frame, area: Rect, species: &Species) {
        let cards = [
            ("⏱ Duração", species.cultivation_time.to_string()),
            ("☀ Luz", species.light.label().to_string()),
            ("💧 Regas", species.watering.to_string()),
            (
                "🧩 Dificuldade",
                format!(
                    "{} · {}",
                    species.difficulty.label(),
                    species.difficulty_level.label()
                ),
            ),
        ];

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(area);

        for (i, (label, value)) in cards.iter().enumerate() {
            let style = if i == 3 {
                Style::default().fg(difficulty_color(species.difficulty))
            } else {
                Style::default()
            };
            let card = Paragraph::new(vec![
                Line::from(Span::styled(*label, Style::default().fg(HELP_COLOR))),
                Line::from(Span::styled(value.clone(), style.add_modifier(Modifier::BOLD))),
            ])
            .block(Block::default().borders(Borders::ALL));
            frame.render_widget(card, chunks[i]);
        }
    }

    fn render_timeline(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        species: &Species,
        selected_step: usize,
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" 📆 Linha do Tempo ")
            .title_bottom(Line::from(Span::styled(
                " [j/k] etapa [Espaço] concluir ",
                Style::default().fg(HELP_COLOR),
            )));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if species.timeline.is_empty() {
            let empty = Paragraph::new(Span::styled(
                "Linha do tempo em preparação.",
                Style::default().fg(HELP_COLOR),
            ));
            frame.render_widget(empty, inner);
            return;
        }

        let visible_steps = (inner.height as usize / LINES_PER_STEP).max(1);
        let offset = calculate_centered_scroll(selected_step, species.timeline.len(), visible_steps);

        let mut lines = Vec::new();
        for (index, step) in species
            .timeline
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible_steps)
        {
            let selected = index == selected_step;
            let done = state.progress.is_step_done(species.id, index);
            let checkbox = if done { "[x]" } else { "[ ]" };
            let marker = if selected { "▶ " } else { "  " };

            let title_style = if done {
                Style::default().fg(PRIMARY_COLOR).add_modifier(Modifier::CROSSED_OUT)
            } else if selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(
                    checkbox,
                    if done {
                        Style::default().fg(PRIMARY_COLOR)
                    } else {
                        Style::default()
                    },
                ),
                Span::raw(format!(" {} ", step_icon_glyph(step.icon))),
                Span::styled(format!("Dia {} — {}", step.day, step.title), title_style),
            ]));
            lines.push(Line::from(Span::styled(
                format!("        {}", step.description),
                Style::default().fg(HELP_COLOR),
            )));
            match step.details {
                Some(details) => lines.push(Line::from(Span::styled(
                    format!("        {details}"),
                    Style::default().fg(HELP_COLOR).add_modifier(Modifier::ITALIC),
                ))),
                None => lines.push(Line::from("")),
            }
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_actions(&self, frame: &mut Frame, area: Rect, state: &AppState, species: &Species) {
        let favorite = state.favorites.is_favorite(species.id);
        let cultivated = state.progress.is_cultivated(species.id);

        let favorite_span = if favorite {
            Span::styled("♥ Favorito! [f]", Style::default().fg(FAVORITE_COLOR))
        } else {
            Span::styled("♡ Favoritar [f]", Style::default().fg(HELP_COLOR))
        };
        let cultivated_span = if cultivated {
            Span::styled("✔ Cultivado! [c]", Style::default().fg(PRIMARY_COLOR))
        } else {
            Span::styled("☐ Marcar Cultivado [c]", Style::default().fg(HELP_COLOR))
        };

        let actions = Paragraph::new(Line::from(vec![
            favorite_span,
            Span::raw("   "),
            cultivated_span,
            Span::raw("   "),
            Span::styled("↗ Compartilhar [s]", Style::default().fg(HELP_COLOR)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(actions, area);
    }
}

impl Default for SpeciesDetailScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SpeciesDetailScreen {
    fn handle_key(&mut self, key: AppKeyEvent, state: &mut AppState) -> EventResult {
        let Some(detail) = &state.detail else {
            return EventResult::NotHandled;
        };
        let species_id = detail.species_id.clone();
        let mut selected_step = detail.selected_step;

        match key.code {
            KeyCode::Esc | KeyCode::Backspace => {
                state.close_detail();
                return EventResult::Handled;
            }
            _ => {}
        }

        // Everything below needs a resolvable species; the not-found view
        // only supports back-navigation.
        let Some(species) = species_by_id(&species_id) else {
            return EventResult::NotHandled;
        };

        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => {
                if !species.timeline.is_empty() {
                    state.toggle_step(&species_id, selected_step);
                }
                EventResult::Handled
            }
            KeyCode::Char('f') => {
                state.toggle_favorite(&species_id);
                EventResult::Handled
            }
            KeyCode::Char('c') => {
                if state.toggle_cultivated(&species_id) {
                    state.notify("Parabéns!", &format!("{} marcado como cultivado. 🎉", species.name));
                }
                EventResult::Handled
            }
            KeyCode::Char('s') => {
                let text = Self::share_text(species);
                state.share(&text);
                EventResult::Handled
            }
            _ => {
                if handle_list_navigation(&key, &mut selected_step, species.timeline.len()) {
                    if let Some(detail) = &mut state.detail {
                        detail.selected_step = selected_step;
                    }
                    EventResult::Handled
                } else {
                    EventResult::NotHandled
                }
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(detail) = &state.detail else {
            return;
        };
        let Some(species) = species_by_id(&detail.species_id) else {
            self.render_not_found(frame, area, &detail.species_id);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(4), // Quick info cards
                Constraint::Length(1), // Progress gauge
                Constraint::Min(0),    // Timeline
                Constraint::Length(1), // Actions
            ])
            .split(area);

        let mut title_spans = vec![Span::styled(
            format!("🌱 {}", species.name),
            Style::default()
                .fg(ACCENT_COLOR)
                .add_modifier(Modifier::BOLD),
        )];
        if let Some(flavor) = species.flavor {
            title_spans.push(Span::styled(
                format!("  {flavor}"),
                Style::default().fg(HELP_COLOR).add_modifier(Modifier::ITALIC),
            ));
        }
        if let Some(video) = species.video {
            title_spans.push(Span::styled(
                format!("  🎬 {video}"),
                Style::default().fg(HELP_COLOR),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(title_spans)), chunks[0]);

        self.render_quick_info(frame, chunks[1], species);

        let total = species.timeline.len();
        let done = species
            .timeline
            .iter()
            .enumerate()
            .filter(|(i, _)| state.progress.is_step_done(species.id, *i))
            .count();
        let ratio = if total == 0 { 0.0 } else { done as f64 / total as f64 };
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(PRIMARY_COLOR))
            .label(format!("{done}/{total} etapas"))
            .ratio(ratio);
        frame.render_widget(gauge, chunks[2]);

        self.render_timeline(frame, chunks[3], state, species, detail.selected_step);
        self.render_actions(frame, chunks[4], state, species);
    }
}
