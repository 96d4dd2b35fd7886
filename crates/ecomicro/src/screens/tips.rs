//! Tips library: categorized cultivation advice.

use ecomicro_core::species_by_id;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::components::lists::{cycle_value, handle_list_navigation};
use crate::components::{Component, EventResult};
use crate::data::tips::{TIP_OF_THE_DAY, Tip, TipCategory, filter_tips};
use crate::event::{AppKeyEvent, KeyCode};
use crate::state::AppState;
use crate::util::styles::{ACCENT_COLOR, FAVORITE_COLOR, HELP_COLOR, PRIMARY_COLOR};

pub struct TipsScreen;

impl TipsScreen {
    pub fn new() -> Self {
        Self
    }

    fn filtered(state: &AppState) -> Vec<&'static Tip> {
        filter_tips(state.tips_state.category, &state.tips_state.query)
    }

    fn handle_search_key(key: &AppKeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                state.tips_state.searching = false;
            }
            KeyCode::Backspace => {
                state.tips_state.query.pop();
                state.tips_state.selected_index = 0;
            }
            KeyCode::Char(c) => {
                state.tips_state.query.push(c);
                state.tips_state.selected_index = 0;
            }
            _ => {}
        }
        EventResult::Handled
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let tips = &state.tips_state;

        let mut search_spans = vec![Span::raw("🔍 ")];
        if tips.query.is_empty() && !tips.searching {
            search_spans.push(Span::styled(
                "Buscar por problema, dúvida ou tema... [/]",
                Style::default().fg(HELP_COLOR),
            ));
        } else {
            search_spans.push(Span::raw(tips.query.clone()));
            if tips.searching {
                search_spans.push(Span::styled("▌", Style::default().fg(PRIMARY_COLOR)));
            }
        }

        // Category chips, scrolled conceptually by h/l.
        let mut chip_spans: Vec<Span> = vec![match tips.category {
            None => Span::styled(
                "[Todas] ",
                Style::default()
                    .fg(PRIMARY_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
            Some(_) => Span::styled("Todas ", Style::default().fg(HELP_COLOR)),
        }];
        for category in TipCategory::ALL {
            let label = format!("{} {} ", category.glyph(), category.label());
            if tips.category == Some(category) {
                chip_spans.push(Span::styled(
                    format!("[{label}]"),
                    Style::default()
                        .fg(PRIMARY_COLOR)
                        .add_modifier(Modifier::BOLD),
                ));
            } else {
                chip_spans.push(Span::styled(label, Style::default().fg(HELP_COLOR)));
            }
        }

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                "🌿 Dicas de Cultivo Inteligente",
                Style::default()
                    .fg(ACCENT_COLOR)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(search_spans),
            Line::from(chip_spans),
        ])
        .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(header, area);
    }

    fn render_tips(&self, frame: &mut Frame, area: Rect, state: &AppState, filtered: &[&Tip]) {
        if filtered.is_empty() {
            let empty = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Nenhuma dica encontrada para esse filtro.",
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "Que tal explorar outro tema?",
                    Style::default().fg(HELP_COLOR),
                )),
            ])
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" Dicas (0) "));
            frame.render_widget(empty, area);
            return;
        }

        let selected = state.tips_state.selected_index.min(filtered.len() - 1);

        if state.tips_state.expanded {
            self.render_expanded_tip(frame, area, state, filtered[selected]);
            return;
        }

        let items: Vec<ListItem> = filtered
            .iter()
            .map(|tip| {
                let star = if state.favorites.is_favorite(tip.id) {
                    Span::styled("★ ", Style::default().fg(FAVORITE_COLOR))
                } else {
                    Span::styled("☆ ", Style::default().fg(HELP_COLOR))
                };
                ListItem::new(vec![
                    Line::from(vec![
                        star,
                        Span::styled(
                            format!("{} ", tip.category.glyph()),
                            Style::default(),
                        ),
                        Span::styled(tip.title, Style::default().add_modifier(Modifier::BOLD)),
                    ]),
                    Line::from(Span::styled(
                        format!("   {}", tip.description),
                        Style::default().fg(HELP_COLOR),
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" Dicas ({}) ", filtered.len())),
            )
            .highlight_style(Style::default().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD))
            .highlight_symbol("▶ ");

        let mut list_state = ListState::default();
        list_state.select(Some(selected));
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn render_expanded_tip(&self, frame: &mut Frame, area: Rect, state: &AppState, tip: &Tip) {
        let related: Vec<&str> = tip
            .related_species
            .iter()
            .filter_map(|id| species_by_id(id).map(|s| s.name))
            .collect();

        let star = if state.favorites.is_favorite(tip.id) {
            "★ salva"
        } else {
            "☆ [f] salvar"
        };

        let mut lines = vec![
            Line::from(Span::styled(
                format!("{} {}", tip.category.glyph(), tip.category.label()),
                Style::default().fg(PRIMARY_COLOR),
            )),
            Line::from(""),
            Line::from(Span::raw(tip.full_description)),
            Line::from(""),
            Line::from(vec![
                Span::styled("💡 Bônus: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(tip.bonus_tip),
            ]),
        ];
        if !related.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("Espécies relacionadas: {}", related.join(", ")),
                Style::default().fg(HELP_COLOR),
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("{star}   [Enter] voltar à lista"),
            Style::default().fg(HELP_COLOR),
        )));

        let detail = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", tip.title)),
            );
        frame.render_widget(detail, area);
    }

    fn render_tip_of_the_day(&self, frame: &mut Frame, area: Rect) {
        let block = Paragraph::new(Line::from(vec![
            Span::styled(
                "💡 Dica do Dia: ",
                Style::default()
                    .fg(PRIMARY_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(TIP_OF_THE_DAY),
            Span::styled("  [s] compartilhar", Style::default().fg(HELP_COLOR)),
        ]))
        .block(Block::default().borders(Borders::TOP));
        frame.render_widget(block, area);
    }
}

impl Default for TipsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for TipsScreen {
    fn handle_key(&mut self, key: AppKeyEvent, state: &mut AppState) -> EventResult {
        if state.tips_state.searching {
            return Self::handle_search_key(&key, state);
        }

        let filtered = Self::filtered(state);
        match key.code {
            KeyCode::Char('/') => {
                state.tips_state.searching = true;
                state.tips_state.expanded = false;
                EventResult::Handled
            }
            KeyCode::Char('h') | KeyCode::Left => {
                state.tips_state.category =
                    cycle_value(&state.tips_state.category, &TipCategory::ALL, false);
                state.tips_state.selected_index = 0;
                state.tips_state.expanded = false;
                EventResult::Handled
            }
            KeyCode::Char('l') | KeyCode::Right => {
                state.tips_state.category =
                    cycle_value(&state.tips_state.category, &TipCategory::ALL, true);
                state.tips_state.selected_index = 0;
                state.tips_state.expanded = false;
                EventResult::Handled
            }
            KeyCode::Enter => {
                if !filtered.is_empty() {
                    state.tips_state.expanded = !state.tips_state.expanded;
                }
                EventResult::Handled
            }
            KeyCode::Esc if state.tips_state.expanded => {
                state.tips_state.expanded = false;
                EventResult::Handled
            }
            KeyCode::Char('f') => {
                // Tips share the favorites set, as ids that never resolve
                // against the species catalog.
                if let Some(tip) = filtered.get(state.tips_state.selected_index) {
                    state.toggle_favorite(tip.id);
                }
                EventResult::Handled
            }
            KeyCode::Char('s') => {
                state.share(&format!("💡 Dica do Dia — EcoMicro\n{TIP_OF_THE_DAY}"));
                EventResult::Handled
            }
            _ => {
                if handle_list_navigation(
                    &key,
                    &mut state.tips_state.selected_index,
                    filtered.len(),
                ) {
                    state.tips_state.expanded = false;
                    EventResult::Handled
                } else {
                    EventResult::NotHandled
                }
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let filtered = Self::filtered(state);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header: title, search, chips
                Constraint::Min(0),    // Tip list or expanded tip
                Constraint::Length(2), // Tip of the day
            ])
            .split(area);

        self.render_header(frame, chunks[0], state);
        self.render_tips(frame, chunks[1], state, &filtered);
        self.render_tip_of_the_day(frame, chunks[2]);
    }
}
