//! Event handling for the application.
//!
//! Terminal input is polled on a fixed tick and converted into
//! application-level events.

mod handler;

pub use handler::EventHandler;

/// An application-level event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key press.
    Key(crossterm::event::KeyEvent),
    /// The terminal was resized to (width, height).
    Resize(u16, u16),
    /// Nothing happened within the tick interval.
    Tick,
    /// The application was asked to quit.
    Quit,
}
