//! Main application state and event loop model.
//!
//! This module implements The Elm Architecture (TEA) pattern: all state
//! lives in [`App`], all changes flow through [`App::update`], and
//! [`App::view`] renders as a function of the state.
//!
//! The core invariant of the whole application lives here: the grid
//! shows rows only while the search box holds a non-blank query. The
//! visible set is always `rows → quick filter → column filter model`,
//! re-derived whenever any of the three inputs changes.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info, trace, warn};

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::api::types::RowData;
use crate::error::AppError;
use crate::events::Event;
use crate::grid::{quick_filter_matches, FilterModel, Paginator};
use crate::tasks::DataMessage;
use crate::ui::theme::Theme;
use crate::ui::{
    FilterPanelAction, FilterPanelView, GridAction, GridView, LoadingIndicator,
    NotificationManager, SearchBar,
};

/// The current view/screen state of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// The initial dataset fetch is in flight.
    #[default]
    Loading,
    /// Displaying the results grid.
    Grid,
    /// The column filter panel is open.
    FilterPanel,
    /// Help screen is displayed.
    Help,
    /// Application is in the process of exiting.
    Exiting,
}

/// The main application struct that holds all state.
pub struct App {
    /// The current view state.
    state: AppState,
    /// Whether the application should quit.
    should_quit: bool,
    /// The loaded dataset; replaced wholesale on fetch.
    rows: Vec<RowData>,
    /// Indices into `rows` that pass the search and the filter model.
    visible: Vec<usize>,
    /// The load failure shown in place of the grid, if any.
    load_error: Option<String>,
    /// The quick-filter search bar.
    search: SearchBar,
    /// The per-column filter model.
    filter_model: FilterModel,
    /// Page cursor over the visible rows.
    paginator: Paginator,
    /// The results grid view.
    grid_view: GridView,
    /// The column filter panel.
    filter_panel: FilterPanelView,
    /// Spinner for the in-flight fetch.
    loading: LoadingIndicator,
    /// Toast messages.
    notifications: NotificationManager,
    /// Set when the user asked for a re-fetch; drained by the main loop.
    pending_refresh: bool,
    theme: Theme,
}

impl App {
    /// Create a new application instance.
    pub fn new() -> Self {
        debug!("Creating new application instance");

        let mut loading = LoadingIndicator::with_message("Loading results...");
        loading.start();

        Self {
            state: AppState::Loading,
            should_quit: false,
            rows: Vec::new(),
            visible: Vec::new(),
            load_error: None,
            search: SearchBar::new(),
            filter_model: FilterModel::new(),
            paginator: Paginator::new(),
            grid_view: GridView::new(),
            filter_panel: FilterPanelView::new(),
            loading,
            notifications: NotificationManager::new(),
            pending_refresh: false,
            theme: Theme::default(),
        }
    }

    /// Returns whether the application should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the current application state.
    pub fn state(&self) -> AppState {
        self.state
    }

    /// The loaded rows.
    pub fn rows(&self) -> &[RowData] {
        &self.rows
    }

    /// Number of loaded rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of rows that pass the search and the filter model.
    pub fn visible_row_count(&self) -> usize {
        self.visible.len()
    }

    /// The current search text.
    pub fn search_text(&self) -> &str {
        self.search.value()
    }

    /// The current column filter model.
    pub fn filter_model(&self) -> &FilterModel {
        &self.filter_model
    }

    /// The page cursor.
    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    /// The load error, if the last fetch failed.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Get a reference to the notification manager.
    pub fn notifications(&self) -> &NotificationManager {
        &self.notifications
    }

    /// Consume the pending-refresh flag.
    ///
    /// The main loop calls this once per frame and spawns a fetch when
    /// it returns true.
    pub fn take_pending_refresh(&mut self) -> bool {
        std::mem::take(&mut self.pending_refresh)
    }

    // ========================================================================
    // Data lifecycle
    // ========================================================================

    /// Handle a message from a background task.
    pub fn handle_data_message(&mut self, message: DataMessage) {
        match message {
            DataMessage::RowsFetched(Ok(rows)) => {
                info!(count = rows.len(), "Dataset loaded");
                self.set_rows(rows);
            }
            DataMessage::RowsFetched(Err(e)) => {
                let err = AppError::from(e);
                warn!(error = %err, "Dataset load failed");
                let message = err.user_message();
                if err.is_recoverable() {
                    self.notifications.error(message.clone());
                }
                self.set_load_error(message);
            }
        }
    }

    /// Replace the loaded rows and re-derive the visible set under the
    /// search and filters already in place.
    pub fn set_rows(&mut self, rows: Vec<RowData>) {
        let count = rows.len();
        self.rows = rows;
        self.load_error = None;
        self.loading.stop();
        if self.state == AppState::Loading {
            self.state = AppState::Grid;
        }
        self.refresh_visible();
        self.notifications.info(format!("Loaded {} rows", count));
    }

    /// Record a failed load; rendered in place of the grid.
    pub fn set_load_error(&mut self, message: impl Into<String>) {
        self.load_error = Some(message.into());
        self.loading.stop();
        if self.state == AppState::Loading {
            self.state = AppState::Grid;
        }
    }

    /// Replace the search text directly (the interactive path goes
    /// through the search bar's key handling).
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search.set_value(text);
        self.refresh_visible();
    }

    /// Replace the column filter model and re-derive the visible set.
    pub fn set_filter_model(&mut self, model: FilterModel) {
        self.filter_model = model;
        self.refresh_visible();
    }

    /// Reset the column filter model.
    ///
    /// The search text and the loaded rows are untouched.
    pub fn clear_filters(&mut self) {
        if self.filter_model.is_empty() {
            self.notifications.info("No column filters to clear");
            return;
        }
        debug!("Clearing column filter model");
        self.filter_model.clear();
        self.refresh_visible();
        self.notifications.success("Column filters cleared");
    }

    /// Re-derive the visible set: blank search means no rows at all,
    /// otherwise quick filter and column filters apply on top of the
    /// full loaded set.
    fn refresh_visible(&mut self) {
        self.visible = if self.search.is_blank() {
            Vec::new()
        } else {
            let query = self.search.value();
            self.rows
                .iter()
                .enumerate()
                .filter(|(_, row)| {
                    quick_filter_matches(row, query) && self.filter_model.matches(row)
                })
                .map(|(i, _)| i)
                .collect()
        };
        self.paginator.set_total_rows(self.visible.len());
    }

    fn request_refresh(&mut self) {
        info!("Refresh requested");
        self.pending_refresh = true;
        self.load_error = None;
        self.state = AppState::Loading;
        self.loading.start_with_message("Reloading results...");
    }

    // ========================================================================
    // Event handling
    // ========================================================================

    /// Update the application state based on an event.
    ///
    /// All state changes flow through this method.
    pub fn update(&mut self, event: Event) {
        match event {
            Event::Quit => {
                info!("Quit event received");
                self.should_quit = true;
                self.state = AppState::Exiting;
            }
            Event::Key(key_event) => {
                trace!(key = ?key_event.code, modifiers = ?key_event.modifiers, "Key event");
                self.handle_key_event(key_event);
            }
            Event::Resize(width, height) => {
                trace!(width, height, "Terminal resize event");
            }
            Event::Tick => {
                self.loading.tick();
                self.notifications.tick();
            }
        }
    }

    /// Handle keyboard input events.
    fn handle_key_event(&mut self, key_event: KeyEvent) {
        // The filter panel is modal and takes input first.
        if self.filter_panel.is_visible() {
            if let Some(action) = self.filter_panel.handle_input(key_event) {
                match action {
                    FilterPanelAction::Apply(model) => {
                        let count = model.len();
                        debug!(filters = count, "Applying column filter model");
                        self.set_filter_model(model);
                        self.state = AppState::Grid;
                        if count == 0 {
                            self.notifications.warning("No column filters set");
                        } else {
                            self.notifications
                                .success(format!("{} column filter(s) applied", count));
                        }
                    }
                    FilterPanelAction::Cancel => {
                        debug!("Filter panel cancelled");
                        self.state = AppState::Grid;
                    }
                }
            }
            return;
        }

        // The search bar swallows all input while editing.
        if self.search.is_active() {
            match key_event.code {
                KeyCode::Esc | KeyCode::Enter => self.search.deactivate(),
                _ => {
                    if self.search.handle_input(key_event) {
                        trace!(query = self.search.value(), "Search text changed");
                        self.refresh_visible();
                    }
                }
            }
            return;
        }

        // Global key bindings.
        match (key_event.code, key_event.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.should_quit = true;
                self.state = AppState::Exiting;
                return;
            }
            (KeyCode::Char('?'), KeyModifiers::NONE | KeyModifiers::SHIFT)
                if matches!(self.state, AppState::Grid | AppState::Loading) =>
            {
                self.state = AppState::Help;
                return;
            }
            _ => {}
        }

        match self.state {
            AppState::Loading | AppState::Grid => {
                match (key_event.code, key_event.modifiers) {
                    (KeyCode::Char('q'), KeyModifiers::NONE) => {
                        self.should_quit = true;
                        self.state = AppState::Exiting;
                        return;
                    }
                    (KeyCode::Char('/'), KeyModifiers::NONE) => {
                        self.search.activate();
                        return;
                    }
                    _ => {}
                }

                let page_len = self.paginator.page_range().len();
                if let Some(action) = self.grid_view.handle_input(key_event, page_len) {
                    self.handle_grid_action(action);
                }
            }
            AppState::Help => {
                if key_event.code == KeyCode::Esc
                    || (key_event.code == KeyCode::Char('q')
                        && key_event.modifiers == KeyModifiers::NONE)
                {
                    self.state = AppState::Grid;
                }
            }
            AppState::FilterPanel | AppState::Exiting => {}
        }
    }

    fn handle_grid_action(&mut self, action: GridAction) {
        match action {
            GridAction::OpenFilter => {
                debug!("Opening filter panel");
                self.filter_panel.show_with_model(&self.filter_model);
                self.state = AppState::FilterPanel;
            }
            GridAction::ClearFilters => self.clear_filters(),
            GridAction::Refresh => self.request_refresh(),
            GridAction::NextPage => {
                if self.paginator.next_page() {
                    self.grid_view.select_first_row();
                }
            }
            GridAction::PrevPage => {
                if self.paginator.prev_page() {
                    self.grid_view.select_first_row();
                }
            }
            GridAction::FirstPage => {
                if self.paginator.first_page() {
                    self.grid_view.select_first_row();
                }
            }
            GridAction::LastPage => {
                if self.paginator.last_page() {
                    self.grid_view.select_first_row();
                }
            }
        }
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Render the application UI.
    ///
    /// The view is a pure function of the current state.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(1), // Search bar
                Constraint::Min(1),    // Content
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        self.render_title(frame, chunks[0]);
        self.search.render(frame, chunks[1], &self.theme);
        self.render_content(frame, chunks[2]);
        self.render_status_bar(frame, chunks[3]);

        self.notifications.render(frame, area);
        self.filter_panel.render(frame, area);
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new("Podium — Olympic Results")
            .style(
                Style::default()
                    .fg(self.theme.highlight)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        frame.render_widget(title, area);
    }

    fn render_content(&mut self, frame: &mut Frame, area: Rect) {
        match self.state {
            AppState::Help => {
                let paragraph = Paragraph::new(self.render_help_view())
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::NONE));
                frame.render_widget(paragraph, area);
            }
            AppState::Exiting => {
                let paragraph = Paragraph::new(vec![
                    Line::raw(""),
                    Line::styled("Goodbye!", Style::default().fg(Color::Green)),
                ])
                .alignment(Alignment::Center);
                frame.render_widget(paragraph, area);
            }
            AppState::Loading => {
                frame.render_widget(Block::default().borders(Borders::ALL), area);
                self.loading.render(frame, area, &self.theme);
            }
            AppState::Grid | AppState::FilterPanel => {
                let page_rows: Vec<&RowData> = self
                    .paginator
                    .page_slice(&self.visible)
                    .iter()
                    .map(|&i| &self.rows[i])
                    .collect();
                let search_blank = self.search.is_blank();
                self.grid_view.render(
                    frame,
                    area,
                    &page_rows,
                    search_blank,
                    self.load_error.as_deref(),
                );
            }
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let state_str = match self.state {
            AppState::Loading => "Loading",
            AppState::Grid => "Browse",
            AppState::FilterPanel => "Filters",
            AppState::Help => "Help",
            AppState::Exiting => "Exiting...",
        };

        let counts = format!(
            " Page {}/{} ({}/page) · {} matching / {} loaded · {} filter(s) ",
            self.paginator.current_page() + 1,
            self.paginator.page_count(),
            self.paginator.page_size(),
            self.paginator.total_rows(),
            self.rows.len(),
            self.filter_model.len(),
        );

        let hints = if self.search.is_active() {
            "Enter/Esc: done editing"
        } else {
            "/: search  c: clear filters  f: filters  r: reload  n/p: page  ?: help  q: quit"
        };

        let footer = Line::from(vec![
            Span::styled(
                format!(" {} ", state_str),
                Style::default().fg(Color::Black).bg(self.theme.highlight),
            ),
            Span::styled(counts, Style::default().fg(self.theme.muted)),
            Span::styled(hints, Style::default().fg(self.theme.muted)),
        ]);

        frame.render_widget(Paragraph::new(footer), area);
    }

    fn render_help_view(&self) -> Vec<Line<'static>> {
        vec![
            Line::raw(""),
            Line::styled("Help", Style::default().fg(self.theme.highlight)),
            Line::raw(""),
            Line::styled("Global:", Style::default().fg(Color::Yellow)),
            Line::raw("  Ctrl+C  - Quit application"),
            Line::raw("  ?       - Show this help"),
            Line::raw("  /       - Edit the search text"),
            Line::raw(""),
            Line::styled("Grid:", Style::default().fg(Color::Yellow)),
            Line::raw("  j / ↓   - Move down"),
            Line::raw("  k / ↑   - Move up"),
            Line::raw("  g / G   - First / last row of the page"),
            Line::raw("  h / l   - Select column"),
            Line::raw("  < / >   - Narrow / widen selected column"),
            Line::raw("  =       - Reset selected column width"),
            Line::raw("  n / p   - Next / previous page"),
            Line::raw("  Home/End - First / last page"),
            Line::raw("  f       - Open column filters"),
            Line::raw("  c       - Clear column filters"),
            Line::raw("  r       - Reload the dataset"),
            Line::raw("  q       - Quit application"),
            Line::raw(""),
            Line::styled(
                "Press Esc or q to close this help screen",
                Style::default().fg(self.theme.muted),
            ),
        ]
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
