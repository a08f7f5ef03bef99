//! lingocards - multilingual flashcard generator
//!
//! A terminal client that sends language-learning parameters to a remote
//! generation service and lets the user browse the returned flashcards.

use std::fmt;

pub mod app;
pub mod client;
pub mod config;
pub mod logging;
pub mod models;
pub mod plain;

// Common error types
#[derive(Debug)]
pub enum LingoError {
    /// The service answered with a non-success status
    RequestFailure {
        /// HTTP status code
        status: u16,
        /// Server-provided message, or a status-derived fallback
        message: String,
    },
    /// Network or body parsing failure before a usable reply was obtained
    TransportFailure(String),
    /// Generation parameters rejected before sending
    InvalidRequest(String),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// TUI rendering or interaction error
    TuiError(String),
    /// I/O operation failed
    IoError(std::io::Error),
}

impl fmt::Display for LingoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LingoError::RequestFailure { message, .. } => write!(f, "{}", message),
            LingoError::TransportFailure(msg) => write!(f, "Transport error: {}", msg),
            LingoError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            LingoError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            LingoError::TuiError(msg) => write!(f, "TUI error: {}", msg),
            LingoError::IoError(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for LingoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LingoError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LingoError {
    fn from(err: std::io::Error) -> Self {
        LingoError::IoError(err)
    }
}

impl From<reqwest::Error> for LingoError {
    fn from(err: reqwest::Error) -> Self {
        LingoError::TransportFailure(err.to_string())
    }
}

impl From<serde_json::Error> for LingoError {
    fn from(err: serde_json::Error) -> Self {
        LingoError::TransportFailure(format!("Malformed response body: {}", err))
    }
}

impl From<toml::de::Error> for LingoError {
    fn from(err: toml::de::Error) -> Self {
        LingoError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for LingoError {
    fn from(err: toml::ser::Error) -> Self {
        LingoError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for lingocards operations
pub type Result<T> = std::result::Result<T, LingoError>;

/// Error handling utilities
pub mod error {
    use super::LingoError;

    /// Message shown in the generator screen's error banner
    pub fn user_friendly_message(error: &LingoError) -> String {
        let detail = match error {
            LingoError::RequestFailure { message, .. } => message.clone(),
            LingoError::TransportFailure(_) => {
                "the generation service could not be reached or sent an unreadable reply".to_string()
            }
            LingoError::InvalidRequest(msg) => msg.clone(),
            _ => error.to_string(),
        };
        format!(
            "Failed to generate flashcards: {}. Please try again or check your API key.",
            detail.trim_end_matches('.')
        )
    }

    /// Whether the error came back from the service itself
    pub fn is_server_reported(error: &LingoError) -> bool {
        matches!(error, LingoError::RequestFailure { .. })
    }
}

// Common types and constants
pub const APP_NAME: &str = "lingocards";
pub const CONFIG_FILE: &str = "lingocards.toml";
pub const LOG_FILE: &str = "lingocards.log";
pub const ENDPOINT_ENV: &str = "LINGOCARDS_ENDPOINT";
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/generate-flashcards";
