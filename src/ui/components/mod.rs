//! Reusable UI components.

mod loading;
mod notification;
mod search_bar;

pub use loading::LoadingIndicator;
pub use notification::{Notification, NotificationManager, NotificationType};
pub use search_bar::SearchBar;
