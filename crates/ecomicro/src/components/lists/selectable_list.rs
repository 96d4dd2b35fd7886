//! Generic selectable list and facet input helpers.

use crate::event::{AppKeyEvent, KeyCode};

/// Calculate centered scroll offset for a list.
///
/// Returns the scroll offset that keeps the selected item centered when possible,
/// while handling edge cases near the beginning and end of the list.
pub fn calculate_centered_scroll(
    selected_idx: usize,
    total_items: usize,
    visible_count: usize,
) -> usize {
    if total_items <= visible_count {
        return 0;
    }

    let center = visible_count / 2;

    if selected_idx <= center {
        // Near the top: selection moves down from top
        0
    } else if selected_idx >= total_items.saturating_sub(visible_count.saturating_sub(center)) {
        // Near the bottom: keep at least half visible
        total_items.saturating_sub(visible_count)
    } else {
        // Middle: center the selection
        selected_idx.saturating_sub(center)
    }
}

/// Handle j/k or Up/Down list navigation.
///
/// Moves selection up or down with wrapping at boundaries.
/// Returns `true` if the key was handled.
pub fn handle_list_navigation(key: &AppKeyEvent, selected: &mut usize, total: usize) -> bool {
    if total == 0 {
        return false;
    }

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            *selected = (*selected + 1) % total;
            true
        }
        KeyCode::Char('k') | KeyCode::Up => {
            *selected = if *selected == 0 {
                total - 1
            } else {
                *selected - 1
            };
            true
        }
        _ => false,
    }
}

/// Cycle an optional facet selection through `options`.
///
/// Forward order is `None → options[0] → ... → options[last] → None`;
/// backward reverses it. With no options the selection stays `None`.
pub fn cycle_value<T: Clone + PartialEq>(
    current: &Option<T>,
    options: &[T],
    forward: bool,
) -> Option<T> {
    if options.is_empty() {
        return None;
    }
    let position = current
        .as_ref()
        .and_then(|value| options.iter().position(|o| o == value));

    if forward {
        match position {
            None => Some(options[0].clone()),
            Some(i) if i + 1 < options.len() => Some(options[i + 1].clone()),
            Some(_) => None,
        }
    } else {
        match position {
            None => Some(options[options.len() - 1].clone()),
            Some(0) => None,
            Some(i) => Some(options[i - 1].clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> AppKeyEvent {
        AppKeyEvent {
            code,
            ctrl: false,
            alt: false,
            shift: false,
        }
    }

    #[test]
    fn test_calculate_centered_scroll_few_items() {
        // When total items fit in viewport, no scroll needed
        assert_eq!(calculate_centered_scroll(0, 5, 10), 0);
        assert_eq!(calculate_centered_scroll(4, 5, 10), 0);
    }

    #[test]
    fn test_calculate_centered_scroll_beginning() {
        assert_eq!(calculate_centered_scroll(0, 20, 10), 0);
        assert_eq!(calculate_centered_scroll(4, 20, 10), 0);
    }

    #[test]
    fn test_calculate_centered_scroll_middle() {
        let offset = calculate_centered_scroll(10, 20, 10);
        assert!(offset > 0 && offset < 10);
    }

    #[test]
    fn test_calculate_centered_scroll_end() {
        assert_eq!(calculate_centered_scroll(19, 20, 10), 10);
        assert_eq!(calculate_centered_scroll(18, 20, 10), 10);
    }

    #[test]
    fn test_handle_list_navigation_down_and_wrap() {
        let mut selected = 0usize;
        assert!(handle_list_navigation(&key(KeyCode::Char('j')), &mut selected, 3));
        assert_eq!(selected, 1);

        selected = 2;
        assert!(handle_list_navigation(&key(KeyCode::Down), &mut selected, 3));
        assert_eq!(selected, 0);
    }

    #[test]
    fn test_handle_list_navigation_up_and_wrap() {
        let mut selected = 1usize;
        assert!(handle_list_navigation(&key(KeyCode::Char('k')), &mut selected, 3));
        assert_eq!(selected, 0);

        assert!(handle_list_navigation(&key(KeyCode::Up), &mut selected, 3));
        assert_eq!(selected, 2);
    }

    #[test]
    fn test_handle_list_navigation_empty() {
        let mut selected = 0usize;
        assert!(!handle_list_navigation(&key(KeyCode::Char('j')), &mut selected, 0));
    }

    #[test]
    fn test_cycle_value_forward_round_trip() {
        let options = ["a", "b"];
        let mut current: Option<&str> = None;
        current = cycle_value(&current, &options, true);
        assert_eq!(current, Some("a"));
        current = cycle_value(&current, &options, true);
        assert_eq!(current, Some("b"));
        current = cycle_value(&current, &options, true);
        assert_eq!(current, None);
    }

    #[test]
    fn test_cycle_value_backward() {
        let options = ["a", "b"];
        let current: Option<&str> = None;
        assert_eq!(cycle_value(&current, &options, false), Some("b"));
        assert_eq!(cycle_value(&Some("a"), &options, false), None);
    }

    #[test]
    fn test_cycle_value_empty_options() {
        let options: [&str; 0] = [];
        assert_eq!(cycle_value(&None, &options, true), None);
    }
}
