use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{Component, EventResult};
use crate::event::AppKeyEvent;
use crate::state::{AppState, TabId};
use crate::util::styles::HELP_COLOR;

pub struct StatusBar;

impl StatusBar {
    fn help_text(state: &AppState) -> &'static str {
        if state.detail.is_some() {
            return "j/k: etapa | Espaço: concluir | f: favoritar | c: cultivado | s: compartilhar | Esc: voltar";
        }
        match state.active_tab {
            TabId::Home => "1-4: abas | Tab: painel | j/k: navegar | Enter: abrir | q: sair",
            TabId::Guide => {
                "/: buscar | f: filtros | j/k: navegar | Espaço: favoritar | Enter: ver guia | q: sair"
            }
            TabId::Favorites => {
                "f: filtros | j/k: navegar | d: remover | Enter: ver guia | b: explorar | q: sair"
            }
            TabId::Tips => "/: buscar | h/l: categoria | j/k: navegar | Enter: expandir | s: dica do dia | q: sair",
        }
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: AppKeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let content = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("Erro: ", Style::default().fg(Color::Red)),
                Span::raw(error.as_str()),
            ])
        } else {
            Line::from(Span::styled(
                Self::help_text(state),
                Style::default().fg(HELP_COLOR),
            ))
        };

        let paragraph = Paragraph::new(content).block(Block::default().borders(Borders::TOP));

        frame.render_widget(paragraph, area);
    }
}
