//! Home screen: greeting, quick access and suggestions.

use ecomicro_core::species_list;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::components::lists::handle_list_navigation;
use crate::components::{Component, EventResult};
use crate::data::tips::TipCategory;
use crate::event::{AppKeyEvent, KeyCode};
use crate::state::{AppState, HomePanel, TabId};
use crate::util::styles::{ACCENT_COLOR, HELP_COLOR, PRIMARY_COLOR, focused_block_with_help};

/// Where a quick-access entry takes the user.
#[derive(Debug, Clone, Copy)]
enum QuickTarget {
    Guide,
    Tips(Option<TipCategory>),
}

struct QuickAccess {
    glyph: &'static str,
    label: &'static str,
    target: QuickTarget,
}

const QUICK_ACCESS: [QuickAccess; 5] = [
    QuickAccess {
        glyph: "🌱",
        label: "Guia de Cultivo",
        target: QuickTarget::Guide,
    },
    QuickAccess {
        glyph: "📚",
        label: "Biblioteca",
        target: QuickTarget::Guide,
    },
    QuickAccess {
        glyph: "❤️",
        label: "Benefícios",
        target: QuickTarget::Tips(None),
    },
    QuickAccess {
        glyph: "🐛",
        label: "Controle de Pragas",
        target: QuickTarget::Tips(Some(TipCategory::Pests)),
    },
    QuickAccess {
        glyph: "✂️",
        label: "Colheita",
        target: QuickTarget::Tips(None),
    },
];

/// How many catalog entries feed the suggestions strip.
const SUGGESTION_COUNT: usize = 4;

pub struct HomeScreen;

impl HomeScreen {
    pub fn new() -> Self {
        Self
    }

    fn activate_quick_access(state: &mut AppState, index: usize) {
        match QUICK_ACCESS[index].target {
            QuickTarget::Guide => state.switch_tab(TabId::Guide),
            QuickTarget::Tips(category) => {
                state.tips_state.category = category;
                state.tips_state.selected_index = 0;
                state.switch_tab(TabId::Tips);
            }
        }
    }

    fn render_quick_access(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let focused = state.home_state.focused_panel == HomePanel::QuickAccess;

        let items: Vec<ListItem> = QUICK_ACCESS
            .iter()
            .map(|item| {
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{} ", item.glyph)),
                    Span::raw(item.label),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(focused_block_with_help(
                " Acesso Rápido ",
                focused,
                "[j/k] navegar [Enter] abrir",
            ))
            .highlight_style(
                Style::default()
                    .fg(PRIMARY_COLOR)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let mut list_state = ListState::default();
        if focused {
            list_state.select(Some(state.home_state.quick_index));
        }
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn render_suggestions(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let focused = state.home_state.focused_panel == HomePanel::Suggestions;

        let items: Vec<ListItem> = species_list()
            .iter()
            .take(SUGGESTION_COUNT)
            .map(|species| {
                let benefit = species
                    .flavor
                    .or_else(|| species.benefits.first().copied())
                    .unwrap_or("");
                ListItem::new(vec![
                    Line::from(Span::styled(
                        species.name,
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(benefit, Style::default().fg(HELP_COLOR))),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(focused_block_with_help(
                " 🌟 Sugestões para você ",
                focused,
                "[j/k] navegar [Enter] ver guia",
            ))
            .highlight_style(
                Style::default()
                    .fg(PRIMARY_COLOR)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let mut list_state = ListState::default();
        if focused {
            list_state.select(Some(state.home_state.suggestion_index));
        }
        frame.render_stateful_widget(list, area, &mut list_state);
    }
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for HomeScreen {
    fn handle_key(&mut self, key: AppKeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Tab => {
                state.home_state.focused_panel = match state.home_state.focused_panel {
                    HomePanel::QuickAccess => HomePanel::Suggestions,
                    HomePanel::Suggestions => HomePanel::QuickAccess,
                };
                return EventResult::Handled;
            }
            KeyCode::Enter => {
                match state.home_state.focused_panel {
                    HomePanel::QuickAccess => {
                        Self::activate_quick_access(state, state.home_state.quick_index);
                    }
                    HomePanel::Suggestions => {
                        let index = state.home_state.suggestion_index;
                        if let Some(species) = species_list().iter().take(SUGGESTION_COUNT).nth(index)
                        {
                            state.open_species(species.id);
                        }
                    }
                }
                return EventResult::Handled;
            }
            _ => {}
        }

        let handled = match state.home_state.focused_panel {
            HomePanel::QuickAccess => handle_list_navigation(
                &key,
                &mut state.home_state.quick_index,
                QUICK_ACCESS.len(),
            ),
            HomePanel::Suggestions => handle_list_navigation(
                &key,
                &mut state.home_state.suggestion_index,
                species_list().len().min(SUGGESTION_COUNT),
            ),
        };

        if handled {
            EventResult::Handled
        } else {
            EventResult::NotHandled
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),                         // Greeting
                Constraint::Length(QUICK_ACCESS.len() as u16 + 2), // Quick access
                Constraint::Min(0),                            // Suggestions
            ])
            .split(area);

        let greeting = Paragraph::new(Line::from(Span::styled(
            "🌱 Bem-vindo ao EcoMicro! Vamos cultivar juntos?",
            Style::default()
                .fg(ACCENT_COLOR)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(greeting, chunks[0]);

        self.render_quick_access(frame, chunks[1], state);
        self.render_suggestions(frame, chunks[2], state);
    }
}
