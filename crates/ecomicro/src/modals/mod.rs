//! Modal overlays rendered on top of the active screen.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::event::{AppKeyEvent, KeyCode};

const MODAL_WIDTH: u16 = 50;
const MODAL_MIN_HEIGHT: u16 = 7;

#[derive(Debug, Default)]
pub enum ModalState {
    #[default]
    None,
    Message(MessageModal),
}

/// Transient notification requiring a single dismissal.
#[derive(Debug)]
pub struct MessageModal {
    pub title: String,
    pub message: String,
    pub is_error: bool,
}

impl MessageModal {
    pub fn info(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            is_error: false,
        }
    }

    pub fn error(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            is_error: true,
        }
    }
}

/// Result of routing a key to the active modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalResult {
    Dismissed,
    Continue,
}

/// Handle key events while a modal is visible.
pub fn handle_modal_key(key: &AppKeyEvent) -> ModalResult {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => ModalResult::Dismissed,
        _ => ModalResult::Continue,
    }
}

/// Render the active modal, if any, centered over the frame.
pub fn render_modal(frame: &mut Frame, modal: &ModalState) {
    let ModalState::Message(modal) = modal else {
        return;
    };

    // Height grows with the message so long text wraps instead of clipping.
    let message_lines = modal.message.len() / (MODAL_WIDTH as usize - 4) + 1;
    let height = (MODAL_MIN_HEIGHT + message_lines as u16).min(frame.area().height.saturating_sub(2));

    let border_color = if modal.is_error {
        Color::Red
    } else {
        Color::Green
    };

    let area = centered_rect(MODAL_WIDTH, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} ", modal.title));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacing
            Constraint::Min(1),    // Message
            Constraint::Length(1), // Help text
        ])
        .split(inner);

    let message = Paragraph::new(modal.message.as_str()).wrap(Wrap { trim: true });
    frame.render_widget(message, chunks[1]);

    let help = Paragraph::new(Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" ou "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" para fechar"),
    ]));
    frame.render_widget(help, chunks[2]);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_and_esc_dismiss() {
        for code in [KeyCode::Enter, KeyCode::Esc] {
            let key = AppKeyEvent {
                code,
                ctrl: false,
                alt: false,
                shift: false,
            };
            assert_eq!(handle_modal_key(&key), ModalResult::Dismissed);
        }
    }

    #[test]
    fn test_other_keys_keep_modal_open() {
        let key = AppKeyEvent {
            code: KeyCode::Char('x'),
            ctrl: false,
            alt: false,
            shift: false,
        };
        assert_eq!(handle_modal_key(&key), ModalResult::Continue);
    }

    #[test]
    fn test_centered_rect_stays_inside_area() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(50, 7, area);
        assert!(rect.x + rect.width <= area.width);
        assert!(rect.y + rect.height <= area.height);
    }
}
