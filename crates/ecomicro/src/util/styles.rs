//! Common styling utilities for TUI components

use ecomicro_core::Difficulty;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Primary brand color (eco green)
pub const PRIMARY_COLOR: Color = Color::Green;

/// Accent color for titles on dark backgrounds
pub const ACCENT_COLOR: Color = Color::LightGreen;

/// Standard color for focused panels
pub const FOCUS_COLOR: Color = Color::Yellow;

/// Standard color for help text
pub const HELP_COLOR: Color = Color::DarkGray;

/// Color for favorite markers
pub const FAVORITE_COLOR: Color = Color::Yellow;

/// Badge color for a difficulty level.
pub fn difficulty_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Easy => Color::Green,
        Difficulty::Medium => Color::Yellow,
        Difficulty::Hard => Color::Red,
    }
}

/// Create a block with a title that shows focused state via border color.
///
/// When focused, the border is yellow. When unfocused, it's the default color.
pub fn focused_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title.to_string())
}

/// Create a block with title and bottom help text that shows focused state.
///
/// The help text is only shown when the panel is focused.
pub fn focused_block_with_help(title: &str, focused: bool, help_text: &str) -> Block<'static> {
    let mut block = focused_block(title, focused);

    if focused && !help_text.is_empty() {
        block = block.title_bottom(Line::from(format!(" {} ", help_text)).fg(HELP_COLOR));
    }

    block
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_colors() {
        assert_eq!(difficulty_color(Difficulty::Easy), Color::Green);
        assert_eq!(difficulty_color(Difficulty::Medium), Color::Yellow);
        assert_eq!(difficulty_color(Difficulty::Hard), Color::Red);
    }

    #[test]
    fn test_focused_block_carries_title() {
        let block = focused_block("Teste", true);
        assert!(format!("{:?}", block).contains("Teste"));
    }
}
