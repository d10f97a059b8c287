//! Notification/toast component for user feedback.
//!
//! Transient messages (filters applied, rows loaded, recoverable
//! errors) shown briefly in the top-right corner.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Maximum number of notifications shown at once.
const MAX_VISIBLE: usize = 3;

/// Default display duration.
const DEFAULT_DURATION: Duration = Duration::from_secs(3);

/// The type of notification, which determines its appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    /// Informational message.
    Info,
    /// Success message.
    Success,
    /// Warning message.
    Warning,
    /// Error message.
    Error,
}

impl NotificationType {
    /// Get the color for this notification type.
    pub fn color(&self) -> Color {
        match self {
            NotificationType::Info => Color::Blue,
            NotificationType::Success => Color::Green,
            NotificationType::Warning => Color::Yellow,
            NotificationType::Error => Color::Red,
        }
    }

    /// Get the icon for this notification type.
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationType::Info => "ℹ",
            NotificationType::Success => "✓",
            NotificationType::Warning => "⚠",
            NotificationType::Error => "✗",
        }
    }
}

/// A single notification message.
#[derive(Debug, Clone)]
pub struct Notification {
    /// The message text.
    pub message: String,
    /// The notification type.
    pub notification_type: NotificationType,
    /// When the notification was created.
    created_at: Instant,
    /// How long it should be displayed.
    duration: Duration,
}

impl Notification {
    /// Create a new notification with the default duration.
    pub fn new(message: impl Into<String>, notification_type: NotificationType) -> Self {
        Self {
            message: message.into(),
            notification_type,
            created_at: Instant::now(),
            duration: DEFAULT_DURATION,
        }
    }

    /// Create an info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Info)
    }

    /// Create a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Success)
    }

    /// Create a warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Warning)
    }

    /// Create an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Error)
    }

    /// Override the display duration.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Whether the notification has outlived its duration.
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

/// Manages the queue of active notifications.
#[derive(Debug, Default)]
pub struct NotificationManager {
    notifications: VecDeque<Notification>,
}

impl NotificationManager {
    /// Create an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a notification.
    pub fn push(&mut self, notification: Notification) {
        self.notifications.push_back(notification);
        while self.notifications.len() > MAX_VISIBLE {
            self.notifications.pop_front();
        }
    }

    /// Add an info notification.
    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Notification::info(message));
    }

    /// Add a success notification.
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Notification::success(message));
    }

    /// Add a warning notification.
    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(Notification::warning(message));
    }

    /// Add an error notification.
    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Notification::error(message));
    }

    /// Number of active notifications.
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    /// Whether there are no active notifications.
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Drop expired notifications. Call once per tick.
    pub fn tick(&mut self) {
        self.notifications.retain(|n| !n.is_expired());
    }

    /// Render active notifications stacked in the top-right corner.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let width = 40.min(area.width);
        if width < 10 {
            return;
        }

        let mut y = area.y + 1;
        for notification in self.notifications.iter() {
            let height = 3;
            if y + height > area.y + area.height {
                break;
            }

            let rect = Rect::new(area.x + area.width - width, y, width, height);
            let color = notification.notification_type.color();

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color));
            let line = Line::from(vec![
                Span::styled(
                    format!("{} ", notification.notification_type.icon()),
                    Style::default().fg(color),
                ),
                Span::raw(notification.message.clone()),
            ]);

            frame.render_widget(Clear, rect);
            frame.render_widget(Paragraph::new(line).block(block), rect);

            y += height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_len() {
        let mut manager = NotificationManager::new();
        assert!(manager.is_empty());

        manager.info("loaded 58 rows");
        manager.success("filters applied");
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn test_queue_is_bounded() {
        let mut manager = NotificationManager::new();
        for i in 0..10 {
            manager.info(format!("message {}", i));
        }
        assert_eq!(manager.len(), MAX_VISIBLE);
    }

    #[test]
    fn test_tick_drops_expired() {
        let mut manager = NotificationManager::new();
        manager.push(Notification::info("gone").with_duration(Duration::ZERO));
        manager.push(Notification::info("stays"));
        assert_eq!(manager.len(), 2);

        manager.tick();
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_notification_types() {
        assert_eq!(NotificationType::Error.color(), Color::Red);
        assert_eq!(NotificationType::Success.icon(), "✓");
    }

    #[test]
    fn test_is_expired() {
        let n = Notification::info("x").with_duration(Duration::ZERO);
        assert!(n.is_expired());

        let n = Notification::info("x");
        assert!(!n.is_expired());
    }
}
