//! Column filter panel.
//!
//! A modal editor for the per-column filter model. Each column gets an
//! editor matching its filter kind: a contains field for text columns,
//! min/max fields for numeric columns, from/to fields for the date
//! column. Enter applies the whole model at once; Esc discards edits.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tracing::debug;

use crate::grid::{Column, ColumnFilter, FilterKind, FilterModel};
use crate::ui::theme::Theme;

/// Date entry format, matching the dataset's own date column.
const DATE_INPUT_FORMAT: &str = "%d/%m/%Y";

/// Actions that can be returned from the filter panel.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterPanelAction {
    /// Apply the edited filter model and close the panel.
    Apply(FilterModel),
    /// Close the panel without applying.
    Cancel,
}

/// One column's editable filter inputs.
#[derive(Debug, Clone)]
struct FilterEditor {
    column: Column,
    /// Contains / min / from, depending on the column's filter kind.
    low: String,
    /// Max / to; unused for text columns.
    high: String,
}

impl FilterEditor {
    fn new(column: Column) -> Self {
        Self {
            column,
            low: String::new(),
            high: String::new(),
        }
    }

    /// Number of editable fields for this column's filter kind.
    fn field_count(&self) -> usize {
        match self.column.filter_kind() {
            FilterKind::Text => 1,
            FilterKind::Number | FilterKind::Date => 2,
        }
    }

    /// Build the column filter from the current inputs, if they
    /// constrain anything. Unparseable numbers and dates are dropped.
    fn build(&self) -> Option<ColumnFilter> {
        let filter = match self.column.filter_kind() {
            FilterKind::Text => ColumnFilter::Text {
                contains: self.low.trim().to_string(),
            },
            FilterKind::Number => ColumnFilter::Number {
                min: parse_number(&self.low, self.column),
                max: parse_number(&self.high, self.column),
            },
            FilterKind::Date => ColumnFilter::Date {
                from: parse_date(&self.low, self.column),
                to: parse_date(&self.high, self.column),
            },
        };
        filter.is_active().then_some(filter)
    }

    /// Populate the inputs from an existing filter.
    fn load(&mut self, filter: Option<&ColumnFilter>) {
        self.low.clear();
        self.high.clear();
        match filter {
            Some(ColumnFilter::Text { contains }) => {
                self.low = contains.clone();
            }
            Some(ColumnFilter::Number { min, max }) => {
                self.low = min.map(|v| v.to_string()).unwrap_or_default();
                self.high = max.map(|v| v.to_string()).unwrap_or_default();
            }
            Some(ColumnFilter::Date { from, to }) => {
                self.low = from
                    .map(|d| d.format(DATE_INPUT_FORMAT).to_string())
                    .unwrap_or_default();
                self.high = to
                    .map(|d| d.format(DATE_INPUT_FORMAT).to_string())
                    .unwrap_or_default();
            }
            None => {}
        }
    }
}

fn parse_number(input: &str, column: Column) -> Option<i64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            debug!(column = column.title(), input = trimmed, "Ignoring unparseable number");
            None
        }
    }
}

fn parse_date(input: &str, column: Column) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(trimmed, DATE_INPUT_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            debug!(column = column.title(), input = trimmed, "Ignoring unparseable date");
            None
        }
    }
}

/// The column filter panel.
pub struct FilterPanelView {
    /// Whether the panel is visible.
    visible: bool,
    /// Index of the focused column editor.
    focused_column: usize,
    /// Which field of the focused editor has focus (0 = low, 1 = high).
    focused_field: usize,
    /// One editor per column, in display order.
    editors: Vec<FilterEditor>,
    theme: Theme,
}

impl Default for FilterPanelView {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterPanelView {
    /// Create a new, hidden filter panel.
    pub fn new() -> Self {
        Self {
            visible: false,
            focused_column: 0,
            focused_field: 0,
            editors: Column::ALL.iter().map(|c| FilterEditor::new(*c)).collect(),
            theme: Theme::default(),
        }
    }

    /// Show the panel, pre-filled from the given model.
    pub fn show_with_model(&mut self, model: &FilterModel) {
        self.visible = true;
        self.focused_column = 0;
        self.focused_field = 0;
        for editor in &mut self.editors {
            editor.load(model.get(editor.column));
        }
    }

    /// Hide the panel.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Whether the panel is visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    fn focused_editor_mut(&mut self) -> &mut FilterEditor {
        &mut self.editors[self.focused_column]
    }

    fn focused_input_mut(&mut self) -> &mut String {
        let field = self.focused_field;
        let editor = self.focused_editor_mut();
        if field == 0 {
            &mut editor.low
        } else {
            &mut editor.high
        }
    }

    fn next_column(&mut self) {
        self.focused_column = (self.focused_column + 1) % self.editors.len();
        self.focused_field = 0;
    }

    fn prev_column(&mut self) {
        if self.focused_column == 0 {
            self.focused_column = self.editors.len() - 1;
        } else {
            self.focused_column -= 1;
        }
        self.focused_field = 0;
    }

    fn next_field(&mut self) {
        let fields = self.editors[self.focused_column].field_count();
        self.focused_field = (self.focused_field + 1) % fields;
    }

    /// Build the filter model from all editors.
    fn build_model(&self) -> FilterModel {
        let mut model = FilterModel::new();
        for editor in &self.editors {
            if let Some(filter) = editor.build() {
                model.set(editor.column, filter);
            }
        }
        model
    }

    /// Clear every input in the panel.
    fn clear_all(&mut self) {
        for editor in &mut self.editors {
            editor.low.clear();
            editor.high.clear();
        }
    }

    /// Handle keyboard input.
    ///
    /// Returns an action if one should be performed.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<FilterPanelAction> {
        match (key.code, key.modifiers) {
            (KeyCode::Enter, KeyModifiers::NONE) => {
                let model = self.build_model();
                self.hide();
                return Some(FilterPanelAction::Apply(model));
            }
            (KeyCode::Esc, KeyModifiers::NONE) => {
                self.hide();
                return Some(FilterPanelAction::Cancel);
            }
            (KeyCode::Tab, KeyModifiers::NONE) | (KeyCode::Down, _) => {
                self.next_column();
            }
            (KeyCode::BackTab, _) | (KeyCode::Up, _) => {
                self.prev_column();
            }
            (KeyCode::Left, _) | (KeyCode::Right, _) => {
                self.next_field();
            }
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                self.focused_input_mut().clear();
            }
            (KeyCode::Char('x'), KeyModifiers::CONTROL) => {
                self.clear_all();
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.focused_input_mut().push(c);
            }
            (KeyCode::Backspace, _) => {
                self.focused_input_mut().pop();
            }
            _ => {}
        }
        None
    }

    /// Render the filter panel as a centered modal.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if !self.visible {
            return;
        }

        let width = area.width.saturating_sub(4).min(66);
        let height = (self.editors.len() as u16 + 5).min(area.height);
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        let panel = Rect::new(x, y, width, height);

        frame.render_widget(Clear, panel);

        let block = Block::default()
            .title(" Column Filters ")
            .title_style(Style::default().add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent));
        let inner = block.inner(panel);
        frame.render_widget(block, panel);

        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(2)])
            .split(inner);

        let lines: Vec<Line> = self
            .editors
            .iter()
            .enumerate()
            .map(|(i, editor)| self.editor_line(i, editor))
            .collect();
        frame.render_widget(Paragraph::new(lines), sections[0]);

        let help = Line::from(vec![
            Span::styled("Tab/↓↑", Style::default().fg(self.theme.accent)),
            Span::raw(": column  "),
            Span::styled("←/→", Style::default().fg(self.theme.accent)),
            Span::raw(": field  "),
            Span::styled("Enter", Style::default().fg(self.theme.accent)),
            Span::raw(": apply  "),
            Span::styled("^U", Style::default().fg(self.theme.accent)),
            Span::raw(": clear field  "),
            Span::styled("^X", Style::default().fg(self.theme.accent)),
            Span::raw(": clear all  "),
            Span::styled("Esc", Style::default().fg(self.theme.accent)),
            Span::raw(": cancel"),
        ]);
        frame.render_widget(
            Paragraph::new(help).style(Style::default().fg(self.theme.muted)),
            sections[1],
        );
    }

    fn editor_line(&self, index: usize, editor: &FilterEditor) -> Line<'static> {
        let focused = index == self.focused_column;
        let title_style = if focused {
            Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.theme.fg)
        };

        let mut spans = vec![Span::styled(
            format!("{:<9}", editor.column.title()),
            title_style,
        )];

        let field_style = |field: usize| {
            if focused && self.focused_field == field {
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::UNDERLINED)
            } else {
                Style::default().fg(self.theme.fg)
            }
        };

        match editor.column.filter_kind() {
            FilterKind::Text => {
                spans.push(Span::raw(" contains "));
                spans.push(Span::styled(
                    format!("[{}]", editor.low),
                    field_style(0),
                ));
            }
            FilterKind::Number => {
                spans.push(Span::raw(" min "));
                spans.push(Span::styled(format!("[{}]", editor.low), field_style(0)));
                spans.push(Span::raw("  max "));
                spans.push(Span::styled(format!("[{}]", editor.high), field_style(1)));
            }
            FilterKind::Date => {
                spans.push(Span::raw(" from "));
                spans.push(Span::styled(format!("[{}]", editor.low), field_style(0)));
                spans.push(Span::raw("  to "));
                spans.push(Span::styled(format!("[{}]", editor.high), field_style(1)));
            }
        }

        Line::from(spans)
    }
}
