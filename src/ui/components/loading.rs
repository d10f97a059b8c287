//! Loading indicator component.
//!
//! An animated spinner shown while the dataset fetch is in flight.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::Theme;

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// A loading indicator with an animated spinner.
#[derive(Debug, Clone)]
pub struct LoadingIndicator {
    /// The message to display.
    message: String,
    /// Current spinner frame index.
    frame: usize,
    /// Whether the indicator is active.
    active: bool,
}

impl Default for LoadingIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingIndicator {
    /// Create a new loading indicator.
    pub fn new() -> Self {
        Self {
            message: "Loading...".to_string(),
            frame: 0,
            active: false,
        }
    }

    /// Create a loading indicator with a custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            frame: 0,
            active: false,
        }
    }

    /// Get the current message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Set the message.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Start the indicator.
    pub fn start(&mut self) {
        self.active = true;
        self.frame = 0;
    }

    /// Start with a specific message.
    pub fn start_with_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.start();
    }

    /// Stop the indicator.
    pub fn stop(&mut self) {
        self.active = false;
    }

    /// Whether the indicator is active.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Advance the spinner animation by one frame.
    pub fn tick(&mut self) {
        if self.active {
            self.frame = (self.frame + 1) % SPINNER_FRAMES.len();
        }
    }

    /// Render the spinner centered in `area`, if active.
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if !self.active || area.height == 0 {
            return;
        }

        let text = format!("{} {}", SPINNER_FRAMES[self.frame], self.message);
        let widget = Paragraph::new(text)
            .style(Style::default().fg(theme.highlight))
            .alignment(Alignment::Center);

        // Vertically center a single line.
        let y = area.y + area.height / 2;
        let line_area = Rect::new(area.x, y.min(area.y + area.height.saturating_sub(1)), area.width, 1);
        frame.render_widget(widget, line_area);
    }
}
