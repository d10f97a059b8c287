//! Centralized error types for Podium.
//!
//! A small unified hierarchy with user-friendly messages. All error
//! types use `thiserror` for ergonomic handling.

use thiserror::Error;

use crate::api::error::ApiError;

/// The main application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Data loading errors.
    #[error("{0}")]
    Api(#[from] ApiError),

    /// IO errors (terminal, file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Get a user-friendly message for display.
    ///
    /// Suitable for showing in the UI, without technical jargon or
    /// stack traces.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Api(e) => match e {
                ApiError::NotFound(_) => {
                    "The results dataset was not found at its usual address.".to_string()
                }
                ApiError::RateLimited => {
                    "Too many requests. Please wait a moment and try again.".to_string()
                }
                ApiError::ServerError(_) => {
                    "The dataset host returned an error. Please try again later.".to_string()
                }
                ApiError::Network(_) => {
                    "Connection failed. Please check your internet connection.".to_string()
                }
                ApiError::InvalidResponse(_) => {
                    "The dataset could not be read. The feed may have changed format.".to_string()
                }
            },
            AppError::Io(_) => "A terminal or file operation failed.".to_string(),
        }
    }

    /// Check if this error is recoverable.
    ///
    /// Recoverable errors can be retried from the UI; the user keeps
    /// working.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::Api(_))
    }
}
