//! Cultivation guide: searchable, filterable species list.

use ecomicro_core::{
    Difficulty, Light, Species, TimeRange, benefit_tags, filter_species, species_list,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::components::lists::{cycle_value, handle_list_navigation};
use crate::components::{Component, EventResult};
use crate::event::{AppKeyEvent, KeyCode};
use crate::state::AppState;
use crate::util::styles::{
    ACCENT_COLOR, FAVORITE_COLOR, HELP_COLOR, PRIMARY_COLOR, difficulty_color, focused_block_with_help,
};

/// Rows of the facet filter panel, top to bottom.
const FILTER_ROWS: usize = 4;

pub struct GuideScreen;

impl GuideScreen {
    pub fn new() -> Self {
        Self
    }

    fn filtered(state: &AppState) -> Vec<&'static Species> {
        filter_species(species_list(), &state.guide_state.filter)
    }

    fn handle_search_key(key: &AppKeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                state.guide_state.searching = false;
            }
            KeyCode::Backspace => {
                state.guide_state.filter.query.pop();
                state.guide_state.selected_index = 0;
            }
            KeyCode::Char(c) => {
                state.guide_state.filter.query.push(c);
                state.guide_state.selected_index = 0;
            }
            _ => {}
        }
        // The search box owns the keyboard while open.
        EventResult::Handled
    }

    fn handle_filter_panel_key(key: &AppKeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('f') => {
                state.guide_state.show_filters = false;
                EventResult::Handled
            }
            KeyCode::Char('j') | KeyCode::Down => {
                state.guide_state.filter_row = (state.guide_state.filter_row + 1) % FILTER_ROWS;
                EventResult::Handled
            }
            KeyCode::Char('k') | KeyCode::Up => {
                state.guide_state.filter_row =
                    (state.guide_state.filter_row + FILTER_ROWS - 1) % FILTER_ROWS;
                EventResult::Handled
            }
            KeyCode::Char('h') | KeyCode::Left => {
                Self::cycle_facet(state, false);
                EventResult::Handled
            }
            KeyCode::Char('l') | KeyCode::Right => {
                Self::cycle_facet(state, true);
                EventResult::Handled
            }
            KeyCode::Char('x') => {
                state.guide_state.filter.clear_facets();
                state.guide_state.selected_index = 0;
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn cycle_facet(state: &mut AppState, forward: bool) {
        let filter = &mut state.guide_state.filter;
        match state.guide_state.filter_row {
            0 => filter.time = cycle_value(&filter.time, &TimeRange::ALL, forward),
            1 => filter.difficulty = cycle_value(&filter.difficulty, &Difficulty::ALL, forward),
            2 => filter.light = cycle_value(&filter.light, &Light::ALL, forward),
            _ => {
                let options: Vec<String> =
                    benefit_tags().iter().map(|tag| tag.to_string()).collect();
                filter.benefit = cycle_value(&filter.benefit, &options, forward);
            }
        }
        state.guide_state.selected_index = 0;
    }

    fn render_search_bar(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let guide = &state.guide_state;
        let mut spans = vec![Span::raw("🔍 ")];
        if guide.filter.query.is_empty() && !guide.searching {
            spans.push(Span::styled(
                "Procure por espécie... [/]",
                Style::default().fg(HELP_COLOR),
            ));
        } else {
            spans.push(Span::raw(guide.filter.query.clone()));
            if guide.searching {
                spans.push(Span::styled("▌", Style::default().fg(PRIMARY_COLOR)));
            }
        }
        if guide.filter.has_facets() {
            spans.push(Span::styled(
                "  ● filtros ativos",
                Style::default().fg(FAVORITE_COLOR),
            ));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if guide.searching {
                Style::default().fg(PRIMARY_COLOR)
            } else {
                Style::default()
            })
            .title(" Guia de Cultivo ");
        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }

    fn render_filter_panel(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let filter = &state.guide_state.filter;
        let rows = [
            (
                "⏱ Tempo de Cultivo",
                filter.time.map(|t| t.label().to_string()),
            ),
            (
                "🧩 Dificuldade",
                filter.difficulty.map(|d| d.label().to_string()),
            ),
            ("☀ Luz", filter.light.map(|l| l.label().to_string())),
            ("🎯 Benefício", filter.benefit.clone()),
        ];

        let lines: Vec<Line> = rows
            .iter()
            .enumerate()
            .map(|(i, (label, value))| {
                let selected = i == state.guide_state.filter_row;
                let marker = if selected { "▶ " } else { "  " };
                let value_span = match value {
                    Some(v) => Span::styled(
                        v.clone(),
                        Style::default()
                            .fg(PRIMARY_COLOR)
                            .add_modifier(Modifier::BOLD),
                    ),
                    None => Span::styled("Todos", Style::default().fg(HELP_COLOR)),
                };
                let label_style = if selected {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Line::from(vec![
                    Span::raw(marker),
                    Span::styled(format!("{label}: "), label_style),
                    value_span,
                ])
            })
            .collect();

        let panel = Paragraph::new(lines).block(focused_block_with_help(
            " Filtros ",
            true,
            "[h/l] alterar [x] limpar [Esc] fechar",
        ));
        frame.render_widget(panel, area);
    }

    fn render_species_list(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        filtered: &[&Species],
    ) {
        if filtered.is_empty() {
            self.render_empty_state(frame, area, state);
            return;
        }

        let items: Vec<ListItem> = filtered
            .iter()
            .map(|species| {
                let heart = if state.favorites.is_favorite(species.id) {
                    Span::styled("♥ ", Style::default().fg(FAVORITE_COLOR))
                } else {
                    Span::styled("♡ ", Style::default().fg(HELP_COLOR))
                };
                let badge = Span::styled(
                    format!(" [{}]", species.difficulty.label()),
                    Style::default().fg(difficulty_color(species.difficulty)),
                );
                ListItem::new(vec![
                    Line::from(vec![
                        heart,
                        Span::styled(species.name, Style::default().add_modifier(Modifier::BOLD)),
                        badge,
                    ]),
                    Line::from(Span::styled(
                        format!(
                            "   Pronto em {} dias · Luz {} · 💧 {}",
                            species.cultivation_days,
                            species.light.label(),
                            species.watering
                        ),
                        Style::default().fg(HELP_COLOR),
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(format!(
                " Espécies ({}) ",
                filtered.len()
            )))
            .highlight_style(Style::default().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD))
            .highlight_symbol("▶ ");

        let mut list_state = ListState::default();
        list_state.select(Some(
            state.guide_state.selected_index.min(filtered.len() - 1),
        ));
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn render_empty_state(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Nenhuma espécie encontrada",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Tente ajustar seus termos de busca ou filtros.",
                Style::default().fg(HELP_COLOR),
            )),
        ];
        if !state.guide_state.filter.is_default() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "[c] Limpar busca",
                Style::default().fg(ACCENT_COLOR),
            )));
        }

        let empty = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" Espécies (0) "));
        frame.render_widget(empty, area);
    }
}

impl Default for GuideScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for GuideScreen {
    fn handle_key(&mut self, key: AppKeyEvent, state: &mut AppState) -> EventResult {
        if state.guide_state.searching {
            return Self::handle_search_key(&key, state);
        }
        if state.guide_state.show_filters {
            return Self::handle_filter_panel_key(&key, state);
        }

        let filtered = Self::filtered(state);
        match key.code {
            KeyCode::Char('/') => {
                state.guide_state.searching = true;
                EventResult::Handled
            }
            KeyCode::Char('f') => {
                state.guide_state.show_filters = true;
                EventResult::Handled
            }
            KeyCode::Char('c') => {
                state.guide_state.filter.clear();
                state.guide_state.selected_index = 0;
                EventResult::Handled
            }
            KeyCode::Char(' ') => {
                if let Some(species) = filtered.get(state.guide_state.selected_index) {
                    state.toggle_favorite(species.id);
                }
                EventResult::Handled
            }
            KeyCode::Enter => {
                if let Some(species) = filtered.get(state.guide_state.selected_index) {
                    state.open_species(species.id);
                }
                EventResult::Handled
            }
            _ => {
                if handle_list_navigation(
                    &key,
                    &mut state.guide_state.selected_index,
                    filtered.len(),
                ) {
                    EventResult::Handled
                } else {
                    EventResult::NotHandled
                }
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let filtered = Self::filtered(state);

        let panel_height = if state.guide_state.show_filters {
            FILTER_ROWS as u16 + 2
        } else {
            0
        };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),            // Search bar
                Constraint::Length(panel_height), // Filter panel
                Constraint::Min(0),               // Species list
            ])
            .split(area);

        self.render_search_bar(frame, chunks[0], state);
        if state.guide_state.show_filters {
            self.render_filter_panel(frame, chunks[1], state);
        }
        self.render_species_list(frame, chunks[2], state, &filtered);
    }
}
