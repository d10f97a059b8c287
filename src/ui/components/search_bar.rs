//! The quick-filter search bar.
//!
//! A single-line text input with cursor handling and a placeholder. The
//! bar has an active (editing) state; when inactive it still displays
//! the current query so the user can see what the grid is filtered by.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::Theme;

/// Placeholder shown while the search box is empty.
const PLACEHOLDER: &str = "Type to search...";

/// The search bar state.
#[derive(Debug, Clone)]
pub struct SearchBar {
    /// The current search text.
    value: String,
    /// Cursor byte offset within the value.
    cursor: usize,
    /// Whether the bar is accepting input.
    active: bool,
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchBar {
    /// Create an empty, inactive search bar.
    pub fn new() -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            active: false,
        }
    }

    /// The current search text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the search text and move the cursor to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.len();
    }

    /// Clear the search text.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Whether the search text is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Whether the search text is empty or whitespace-only.
    ///
    /// A blank query means the grid shows no rows at all.
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Start accepting input.
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Stop accepting input, keeping the text.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Whether the bar is accepting input.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Handle keyboard input.
    ///
    /// Returns true if the text changed.
    pub fn handle_input(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.value.insert(self.cursor, c);
                self.cursor += c.len_utf8();
                true
            }
            (KeyCode::Backspace, _) => {
                if let Some(prev) = self.prev_boundary() {
                    self.value.remove(prev);
                    self.cursor = prev;
                    true
                } else {
                    false
                }
            }
            (KeyCode::Delete, _) => {
                if self.cursor < self.value.len() {
                    self.value.remove(self.cursor);
                    true
                } else {
                    false
                }
            }
            (KeyCode::Left, _) => {
                if let Some(prev) = self.prev_boundary() {
                    self.cursor = prev;
                }
                false
            }
            (KeyCode::Right, _) => {
                if self.cursor < self.value.len() {
                    let c = self.value[self.cursor..]
                        .chars()
                        .next()
                        .map(char::len_utf8)
                        .unwrap_or(1);
                    self.cursor += c;
                }
                false
            }
            (KeyCode::Home, _) => {
                self.cursor = 0;
                false
            }
            (KeyCode::End, _) => {
                self.cursor = self.value.len();
                false
            }
            // Ctrl+U clears the line, readline style.
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                let changed = !self.value.is_empty();
                self.clear();
                changed
            }
            _ => false,
        }
    }

    /// The byte offset of the char boundary before the cursor.
    fn prev_boundary(&self) -> Option<usize> {
        self.value[..self.cursor].char_indices().last().map(|(i, _)| i)
    }

    /// Render the search bar.
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        const LABEL: &str = "Search: ";

        let input_span = if self.is_empty() {
            Span::styled(PLACEHOLDER, Style::default().fg(theme.muted))
        } else {
            Span::styled(self.value.clone(), Style::default().fg(theme.fg))
        };

        let label_style = if self.active {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted)
        };

        let line = Line::from(vec![Span::styled(LABEL, label_style), input_span]);
        frame.render_widget(Paragraph::new(line), area);

        if self.active {
            let cursor_col = LABEL.len() + self.value[..self.cursor].chars().count();
            frame.set_cursor_position(Position::new(
                area.x + cursor_col as u16,
                area.y,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(bar: &mut SearchBar, s: &str) {
        for c in s.chars() {
            bar.handle_input(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_new_is_empty_and_inactive() {
        let bar = SearchBar::new();
        assert!(bar.is_empty());
        assert!(bar.is_blank());
        assert!(!bar.is_active());
    }

    #[test]
    fn test_typing_appends() {
        let mut bar = SearchBar::new();
        type_str(&mut bar, "abc");
        assert_eq!(bar.value(), "abc");
    }

    #[test]
    fn test_backspace() {
        let mut bar = SearchBar::new();
        type_str(&mut bar, "abc");
        assert!(bar.handle_input(key(KeyCode::Backspace)));
        assert_eq!(bar.value(), "ab");
    }

    #[test]
    fn test_backspace_on_empty_is_noop() {
        let mut bar = SearchBar::new();
        assert!(!bar.handle_input(key(KeyCode::Backspace)));
    }

    #[test]
    fn test_insert_at_cursor() {
        let mut bar = SearchBar::new();
        type_str(&mut bar, "ac");
        bar.handle_input(key(KeyCode::Left));
        type_str(&mut bar, "b");
        assert_eq!(bar.value(), "abc");
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut bar = SearchBar::new();
        type_str(&mut bar, "abc");
        bar.handle_input(key(KeyCode::Home));
        assert!(bar.handle_input(key(KeyCode::Delete)));
        assert_eq!(bar.value(), "bc");
    }

    #[test]
    fn test_home_end_navigation() {
        let mut bar = SearchBar::new();
        type_str(&mut bar, "abc");
        bar.handle_input(key(KeyCode::Home));
        type_str(&mut bar, "x");
        assert_eq!(bar.value(), "xabc");
        bar.handle_input(key(KeyCode::End));
        type_str(&mut bar, "y");
        assert_eq!(bar.value(), "xabcy");
    }

    #[test]
    fn test_multibyte_input() {
        let mut bar = SearchBar::new();
        type_str(&mut bar, "Vezzali é");
        assert!(bar.handle_input(key(KeyCode::Backspace)));
        assert_eq!(bar.value(), "Vezzali ");
    }

    #[test]
    fn test_ctrl_u_clears() {
        let mut bar = SearchBar::new();
        type_str(&mut bar, "swimming");
        let changed =
            bar.handle_input(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert!(changed);
        assert!(bar.is_empty());
    }

    #[test]
    fn test_is_blank_for_whitespace() {
        let mut bar = SearchBar::new();
        type_str(&mut bar, "   ");
        assert!(!bar.is_empty());
        assert!(bar.is_blank());
    }

    #[test]
    fn test_activate_deactivate_keeps_text() {
        let mut bar = SearchBar::new();
        bar.activate();
        assert!(bar.is_active());
        type_str(&mut bar, "usa");
        bar.deactivate();
        assert!(!bar.is_active());
        assert_eq!(bar.value(), "usa");
    }

    #[test]
    fn test_set_value_moves_cursor_to_end() {
        let mut bar = SearchBar::new();
        bar.set_value("rowing");
        type_str(&mut bar, "!");
        assert_eq!(bar.value(), "rowing!");
    }
}
