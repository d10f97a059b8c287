//! Theme and styling configuration.

use ratatui::style::Color;

/// Color theme for the application.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary foreground color.
    pub fg: Color,
    /// Muted/secondary text color.
    pub muted: Color,
    /// Highlight color for selected items.
    pub highlight: Color,
    /// Accent color for active inputs and focused borders.
    pub accent: Color,
    /// Error color.
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: Color::White,
            muted: Color::DarkGray,
            highlight: Color::Cyan,
            accent: Color::Yellow,
            error: Color::Red,
        }
    }
}
