//! Favorites: the user's curated species list with its own facet filters.

use ecomicro_core::{Species, TimeRange, benefit_tags, species_list};
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
use crate::state::{AppState, TabId};
use crate::util::styles::{
    ACCENT_COLOR, FAVORITE_COLOR, HELP_COLOR, PRIMARY_COLOR, difficulty_color,
    focused_block_with_help,
};

/// Rows of the facet panel: benefit, time.
const FILTER_ROWS: usize = 2;

pub struct FavoritesScreen;

impl FavoritesScreen {
    pub fn new() -> Self {
        Self
    }

    /// Favorited species in catalog order, narrowed by the screen's facets.
    /// Favorited ids that don't resolve (e.g. tips) drop out naturally.
    fn filtered(state: &AppState) -> Vec<&'static Species> {
        species_list()
            .iter()
            .filter(|s| state.favorites.is_favorite(s.id))
            .filter(|s| state.favorites_state.filter.matches(s))
            .collect()
    }

    fn handle_filter_panel_key(key: &AppKeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('f') => {
                state.favorites_state.show_filters = false;
                EventResult::Handled
            }
            KeyCode::Char('j') | KeyCode::Down => {
                state.favorites_state.filter_row =
                    (state.favorites_state.filter_row + 1) % FILTER_ROWS;
                EventResult::Handled
            }
            KeyCode::Char('k') | KeyCode::Up => {
                state.favorites_state.filter_row =
                    (state.favorites_state.filter_row + FILTER_ROWS - 1) % FILTER_ROWS;
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
                state.favorites_state.filter.clear_facets();
                state.favorites_state.selected_index = 0;
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn cycle_facet(state: &mut AppState, forward: bool) {
        let filter = &mut state.favorites_state.filter;
        match state.favorites_state.filter_row {
            0 => {
                let options: Vec<String> =
                    benefit_tags().iter().map(|tag| tag.to_string()).collect();
                filter.benefit = cycle_value(&filter.benefit, &options, forward);
            }
            _ => filter.time = cycle_value(&filter.time, &TimeRange::ALL, forward),
        }
        state.favorites_state.selected_index = 0;
    }

    fn render_filter_panel(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let filter = &state.favorites_state.filter;
        let rows = [
            ("🎯 Benefício", filter.benefit.clone()),
            (
                "⏱ Tempo de Cultivo",
                filter.time.map(|t| t.label().to_string()),
            ),
        ];

        let lines: Vec<Line> = rows
            .iter()
            .enumerate()
            .map(|(i, (label, value))| {
                let selected = i == state.favorites_state.filter_row;
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
                Line::from(vec![
                    Span::raw(marker),
                    Span::raw(format!("{label}: ")),
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

    fn render_list(&self, frame: &mut Frame, area: Rect, state: &AppState, filtered: &[&Species]) {
        if state.favorites.is_empty() {
            self.render_empty_state(frame, area);
            return;
        }
        if filtered.is_empty() {
            let empty = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Nenhum favorito corresponde aos filtros.",
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "[x] limpa os filtros no painel.",
                    Style::default().fg(HELP_COLOR),
                )),
            ])
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" ⭐ Meus Microverdes Favoritos "));
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = filtered
            .iter()
            .map(|species| {
                let badge = Span::styled(
                    format!(" [{}]", species.difficulty.label()),
                    Style::default().fg(difficulty_color(species.difficulty)),
                );
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled("♥ ", Style::default().fg(FAVORITE_COLOR)),
                        Span::styled(species.name, Style::default().add_modifier(Modifier::BOLD)),
                        badge,
                    ]),
                    Line::from(Span::styled(
                        format!(
                            "   Pronto em {} dias · {}",
                            species.cultivation_days,
                            species.benefits.join(" · ")
                        ),
                        Style::default().fg(HELP_COLOR),
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(format!(
                " ⭐ Meus Microverdes Favoritos ({}) ",
                filtered.len()
            )))
            .highlight_style(Style::default().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD))
            .highlight_symbol("▶ ");

        let mut list_state = ListState::default();
        list_state.select(Some(
            state.favorites_state.selected_index.min(filtered.len() - 1),
        ));
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn render_empty_state(&self, frame: &mut Frame, area: Rect) {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Você ainda não favoritou nenhum microverde.",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Explore a biblioteca e toque no ⭐ para salvar seus preferidos.",
                Style::default().fg(HELP_COLOR),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "[b] Explorar Biblioteca",
                Style::default().fg(ACCENT_COLOR),
            )),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" ⭐ Meus Microverdes Favoritos "));
        frame.render_widget(empty, area);
    }
}

impl Default for FavoritesScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for FavoritesScreen {
    fn handle_key(&mut self, key: AppKeyEvent, state: &mut AppState) -> EventResult {
        if state.favorites_state.show_filters {
            return Self::handle_filter_panel_key(&key, state);
        }

        let filtered = Self::filtered(state);
        match key.code {
            KeyCode::Char('f') => {
                state.favorites_state.show_filters = true;
                EventResult::Handled
            }
            KeyCode::Char('b') => {
                state.switch_tab(TabId::Guide);
                EventResult::Handled
            }
            KeyCode::Char('d') => {
                if let Some(species) = filtered.get(state.favorites_state.selected_index) {
                    state.remove_favorite(species.id);
                }
                EventResult::Handled
            }
            KeyCode::Enter => {
                if let Some(species) = filtered.get(state.favorites_state.selected_index) {
                    state.open_species(species.id);
                }
                EventResult::Handled
            }
            _ => {
                if handle_list_navigation(
                    &key,
                    &mut state.favorites_state.selected_index,
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

        let panel_height = if state.favorites_state.show_filters {
            FILTER_ROWS as u16 + 2
        } else {
            0
        };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(panel_height), Constraint::Min(0)])
            .split(area);

        if state.favorites_state.show_filters {
            self.render_filter_panel(frame, chunks[0], state);
        }
        self.render_list(frame, chunks[1], state, &filtered);
    }
}
