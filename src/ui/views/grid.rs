//! The results grid view.
//!
//! Binds the column definitions and the current page of visible rows to
//! a ratatui `Table`. Owns presentation-only state: row selection,
//! column selection for resizing, and per-column width overrides.
//!
//! The view renders one of four things: the load-error panel, the
//! "please search" placeholder (search box empty), the "no rows"
//! placeholder (search active but nothing matches), or the table.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::api::types::RowData;
use crate::grid::{Column, MIN_COLUMN_WIDTH};
use crate::ui::theme::Theme;

/// Placeholder shown while the search box is empty.
const EMPTY_SEARCH_MESSAGE: &str = "Please search for data. Enter a search term above.";

/// Placeholder shown when a search matches nothing.
const NO_ROWS_MESSAGE: &str = "No rows to show";

/// Upper bound for manual column widening.
const MAX_COLUMN_WIDTH: u16 = 40;

/// Actions the grid view hands back to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAction {
    /// Open the column filter panel.
    OpenFilter,
    /// Reset the column filter model.
    ClearFilters,
    /// Re-fetch the dataset.
    Refresh,
    /// Go to the next page.
    NextPage,
    /// Go to the previous page.
    PrevPage,
    /// Go to the first page.
    FirstPage,
    /// Go to the last page.
    LastPage,
}

/// The results grid view.
pub struct GridView {
    /// Row selection within the current page.
    table_state: TableState,
    /// The column currently selected for resizing.
    selected_column: usize,
    /// Manual width overrides; `None` means flexible width.
    width_overrides: [Option<u16>; Column::ALL.len()],
    theme: Theme,
}

impl Default for GridView {
    fn default() -> Self {
        Self::new()
    }
}

impl GridView {
    /// Create a new grid view.
    pub fn new() -> Self {
        let mut table_state = TableState::default();
        table_state.select(Some(0));
        Self {
            table_state,
            selected_column: 0,
            width_overrides: [None; Column::ALL.len()],
            theme: Theme::default(),
        }
    }

    /// The selected row index within the current page.
    pub fn selected_row(&self) -> usize {
        self.table_state.selected().unwrap_or(0)
    }

    /// The column currently selected for resizing.
    pub fn selected_column(&self) -> Column {
        Column::ALL[self.selected_column]
    }

    /// The manual width override for a column, if any.
    pub fn width_override(&self, column: Column) -> Option<u16> {
        let idx = Column::ALL.iter().position(|c| *c == column)?;
        self.width_overrides[idx]
    }

    /// Reset the row selection to the top of the page.
    pub fn select_first_row(&mut self) {
        self.table_state.select(Some(0));
    }

    fn move_row(&mut self, delta: isize, page_len: usize) {
        if page_len == 0 {
            return;
        }
        let current = self.selected_row().min(page_len - 1) as isize;
        let next = (current + delta).clamp(0, page_len as isize - 1);
        self.table_state.select(Some(next as usize));
    }

    fn next_column(&mut self) {
        self.selected_column = (self.selected_column + 1) % Column::ALL.len();
    }

    fn prev_column(&mut self) {
        if self.selected_column == 0 {
            self.selected_column = Column::ALL.len() - 1;
        } else {
            self.selected_column -= 1;
        }
    }

    /// Widen the selected column by one cell.
    fn widen_column(&mut self) {
        let slot = &mut self.width_overrides[self.selected_column];
        let current = slot.unwrap_or(MIN_COLUMN_WIDTH * 2);
        *slot = Some((current + 1).min(MAX_COLUMN_WIDTH));
    }

    /// Narrow the selected column by one cell, clamping at the floor.
    fn narrow_column(&mut self) {
        let slot = &mut self.width_overrides[self.selected_column];
        let current = slot.unwrap_or(MIN_COLUMN_WIDTH * 2);
        *slot = Some(current.saturating_sub(1).max(MIN_COLUMN_WIDTH));
    }

    /// Drop the selected column's override, restoring flexible width.
    fn reset_column_width(&mut self) {
        self.width_overrides[self.selected_column] = None;
    }

    /// Handle keyboard input.
    ///
    /// `page_len` is the number of rows on the current page. Returns an
    /// action if the application should react.
    pub fn handle_input(&mut self, key: KeyEvent, page_len: usize) -> Option<GridAction> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('f'), KeyModifiers::NONE) => return Some(GridAction::OpenFilter),
            (KeyCode::Char('c'), KeyModifiers::NONE) => return Some(GridAction::ClearFilters),
            (KeyCode::Char('r'), KeyModifiers::NONE) => return Some(GridAction::Refresh),
            (KeyCode::Char('n'), KeyModifiers::NONE) => return Some(GridAction::NextPage),
            (KeyCode::Char('p'), KeyModifiers::NONE) => return Some(GridAction::PrevPage),
            (KeyCode::Home, _) => return Some(GridAction::FirstPage),
            (KeyCode::End, _) => return Some(GridAction::LastPage),
            (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => {
                self.move_row(1, page_len);
            }
            (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => {
                self.move_row(-1, page_len);
            }
            (KeyCode::Char('g'), KeyModifiers::NONE) => {
                self.move_row(isize::MIN / 2, page_len);
            }
            (KeyCode::Char('G'), KeyModifiers::SHIFT) => {
                self.move_row(isize::MAX / 2, page_len);
            }
            (KeyCode::Char('l'), KeyModifiers::NONE) | (KeyCode::Right, _) => {
                self.next_column();
            }
            (KeyCode::Char('h'), KeyModifiers::NONE) | (KeyCode::Left, _) => {
                self.prev_column();
            }
            (KeyCode::Char('>'), _) => self.widen_column(),
            (KeyCode::Char('<'), _) => self.narrow_column(),
            (KeyCode::Char('='), _) => self.reset_column_width(),
            _ => {}
        }
        None
    }

    /// Column width constraints: manual override or flexible share.
    fn column_constraints(&self) -> Vec<Constraint> {
        self.width_overrides
            .iter()
            .map(|w| match w {
                Some(width) => Constraint::Length(*width),
                None => Constraint::Fill(1),
            })
            .collect()
    }

    /// Render the grid.
    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        page_rows: &[&RowData],
        search_blank: bool,
        load_error: Option<&str>,
    ) {
        if let Some(message) = load_error {
            self.render_load_error(frame, area, message);
            return;
        }

        if search_blank {
            self.render_placeholder(frame, area, EMPTY_SEARCH_MESSAGE);
            return;
        }

        if page_rows.is_empty() {
            self.render_placeholder(frame, area, NO_ROWS_MESSAGE);
            return;
        }

        // Keep the selection inside the page after filtering shrank it.
        if self.selected_row() >= page_rows.len() {
            self.table_state.select(Some(page_rows.len() - 1));
        }

        let header = Row::new(Column::ALL.iter().enumerate().map(|(i, col)| {
            let style = if i == self.selected_column {
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            Cell::from(Span::styled(col.title(), style))
        }))
        .bottom_margin(1);

        let rows = page_rows.iter().map(|row| {
            Row::new(
                Column::ALL
                    .iter()
                    .map(|col| Cell::from(col.display(row))),
            )
        });

        let table = Table::new(rows, self.column_constraints())
            .header(header)
            .highlight_style(
                Style::default()
                    .bg(self.theme.highlight)
                    .fg(ratatui::style::Color::Black),
            )
            .block(Block::default().borders(Borders::ALL));

        frame.render_stateful_widget(table, area, &mut self.table_state);
    }

    fn render_placeholder(&self, frame: &mut Frame, area: Rect, message: &str) {
        let widget = Paragraph::new(Line::from(Span::styled(
            message,
            Style::default().fg(self.theme.muted),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(widget, area);
    }

    fn render_load_error(&self, frame: &mut Frame, area: Rect, message: &str) {
        let lines = vec![
            Line::raw(""),
            Line::styled(
                "Failed to load results",
                Style::default()
                    .fg(self.theme.error)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
            Line::raw(message.to_string()),
            Line::raw(""),
            Line::styled("Press 'r' to retry", Style::default().fg(self.theme.muted)),
        ];
        let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.theme.error)),
        );
        frame.render_widget(widget, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_new_selects_first_row_and_column() {
        let view = GridView::new();
        assert_eq!(view.selected_row(), 0);
        assert_eq!(view.selected_column(), Column::Athlete);
    }

    #[test]
    fn test_action_keys() {
        let mut view = GridView::new();
        assert_eq!(
            view.handle_input(key(KeyCode::Char('f')), 10),
            Some(GridAction::OpenFilter)
        );
        assert_eq!(
            view.handle_input(key(KeyCode::Char('c')), 10),
            Some(GridAction::ClearFilters)
        );
        assert_eq!(
            view.handle_input(key(KeyCode::Char('r')), 10),
            Some(GridAction::Refresh)
        );
        assert_eq!(
            view.handle_input(key(KeyCode::Char('n')), 10),
            Some(GridAction::NextPage)
        );
        assert_eq!(
            view.handle_input(key(KeyCode::Char('p')), 10),
            Some(GridAction::PrevPage)
        );
        assert_eq!(
            view.handle_input(key(KeyCode::Home), 10),
            Some(GridAction::FirstPage)
        );
        assert_eq!(
            view.handle_input(key(KeyCode::End), 10),
            Some(GridAction::LastPage)
        );
    }

    #[test]
    fn test_row_navigation_clamps() {
        let mut view = GridView::new();
        view.handle_input(key(KeyCode::Char('j')), 3);
        view.handle_input(key(KeyCode::Char('j')), 3);
        assert_eq!(view.selected_row(), 2);

        // Already at the bottom of the page.
        view.handle_input(key(KeyCode::Char('j')), 3);
        assert_eq!(view.selected_row(), 2);

        view.handle_input(key(KeyCode::Char('k')), 3);
        assert_eq!(view.selected_row(), 1);
    }

    #[test]
    fn test_row_navigation_on_empty_page() {
        let mut view = GridView::new();
        view.handle_input(key(KeyCode::Char('j')), 0);
        assert_eq!(view.selected_row(), 0);
    }

    #[test]
    fn test_first_last_row() {
        let mut view = GridView::new();
        view.handle_input(
            KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT),
            25,
        );
        assert_eq!(view.selected_row(), 24);

        view.handle_input(key(KeyCode::Char('g')), 25);
        assert_eq!(view.selected_row(), 0);
    }

    #[test]
    fn test_column_selection_wraps() {
        let mut view = GridView::new();
        view.handle_input(key(KeyCode::Char('h')), 10);
        assert_eq!(view.selected_column(), Column::Total);

        view.handle_input(key(KeyCode::Char('l')), 10);
        assert_eq!(view.selected_column(), Column::Athlete);
    }

    #[test]
    fn test_resize_respects_floor() {
        let mut view = GridView::new();
        for _ in 0..50 {
            view.handle_input(key(KeyCode::Char('<')), 10);
        }
        assert_eq!(
            view.width_override(Column::Athlete),
            Some(MIN_COLUMN_WIDTH)
        );
    }

    #[test]
    fn test_resize_respects_ceiling() {
        let mut view = GridView::new();
        for _ in 0..100 {
            view.handle_input(key(KeyCode::Char('>')), 10);
        }
        assert_eq!(view.width_override(Column::Athlete), Some(MAX_COLUMN_WIDTH));
    }

    #[test]
    fn test_width_reset_restores_flex() {
        let mut view = GridView::new();
        view.handle_input(key(KeyCode::Char('>')), 10);
        assert!(view.width_override(Column::Athlete).is_some());

        view.handle_input(key(KeyCode::Char('=')), 10);
        assert!(view.width_override(Column::Athlete).is_none());
    }

    #[test]
    fn test_resize_targets_selected_column() {
        let mut view = GridView::new();
        view.handle_input(key(KeyCode::Char('l')), 10);
        view.handle_input(key(KeyCode::Char('>')), 10);
        assert!(view.width_override(Column::Age).is_some());
        assert!(view.width_override(Column::Athlete).is_none());
    }

    #[test]
    fn test_default_constraints_are_flexible() {
        let view = GridView::new();
        let constraints = view.column_constraints();
        assert_eq!(constraints.len(), 10);
        assert!(constraints.iter().all(|c| *c == Constraint::Fill(1)));
    }
}
