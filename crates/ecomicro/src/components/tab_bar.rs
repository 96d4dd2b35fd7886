use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
};

use super::{Component, EventResult};
use crate::event::{AppKeyEvent, KeyCode};
use crate::state::{AppState, TabId};
use crate::util::styles::{HELP_COLOR, PRIMARY_COLOR};

pub struct TabBar;

impl Component for TabBar {
    fn handle_key(&mut self, key: AppKeyEvent, state: &mut AppState) -> EventResult {
        // Don't intercept digits while a search box owns the keyboard.
        if state.is_text_entry_active() {
            return EventResult::NotHandled;
        }

        match key.code {
            KeyCode::Char('1') => {
                state.switch_tab(TabId::Home);
                EventResult::Handled
            }
            KeyCode::Char('2') => {
                state.switch_tab(TabId::Guide);
                EventResult::Handled
            }
            KeyCode::Char('3') => {
                state.switch_tab(TabId::Favorites);
                EventResult::Handled
            }
            KeyCode::Char('4') => {
                state.switch_tab(TabId::Tips);
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let titles: Vec<Line> = TabId::ALL
            .iter()
            .enumerate()
            .map(|(idx, tab)| {
                let content = format!("[{}] {}", idx + 1, tab.name());

                if *tab == state.active_tab {
                    Line::from(Span::styled(
                        content,
                        Style::default()
                            .fg(PRIMARY_COLOR)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::styled(content, Style::default().fg(HELP_COLOR)))
                }
            })
            .collect();

        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::BOTTOM).title(" 🌱 EcoMicro "))
            .select(state.active_tab.index())
            .highlight_style(
                Style::default()
                    .fg(PRIMARY_COLOR)
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_widget(tabs, area);
    }
}
