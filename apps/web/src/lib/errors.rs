//! Error taxonomy for API calls. A server that answered (`Http`, `Rejected`)
//! is kept apart from a request that never completed (`Network`, `Timeout`)
//! so callers never have to guess whether a response body exists.

use serde::Deserialize;
use std::fmt;

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    /// The server answered with a non-2xx status. `message` is the `message`
    /// field of the JSON error body, when the body carried one.
    Http {
        status: u16,
        message: Option<String>,
    },
    /// The server answered 2xx but the envelope reported `success: false`.
    Rejected(Option<String>),
    Parse(String),
    Serialization(String),
}

impl AppError {
    /// Builds an `Http` error from a raw response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        AppError::Http {
            status,
            message: server_message(body),
        }
    }

    /// Message supplied by the server, if it answered with one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            AppError::Http { message, .. } | AppError::Rejected(message) => message.as_deref(),
            _ => None,
        }
    }

    /// Message describing a request that never produced a response.
    pub fn transport_message(&self) -> Option<&str> {
        match self {
            AppError::Network(message) | AppError::Timeout(message) => Some(message),
            _ => None,
        }
    }

    /// True when the request never reached a server response.
    pub fn is_transport(&self) -> bool {
        self.transport_message().is_some()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http {
                status,
                message: Some(message),
            } => write!(formatter, "Request failed ({status}): {message}"),
            AppError::Http {
                status,
                message: None,
            } => write!(formatter, "Request failed ({status})"),
            AppError::Rejected(Some(message)) => write!(formatter, "Request rejected: {message}"),
            AppError::Rejected(None) => write!(formatter, "Request rejected"),
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Extracts the `message` field of a JSON error body, sanitized for display.
/// Bodies that are not JSON, or carry a blank message, yield `None`.
pub fn server_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body.trim()).ok()?;
    parsed.message.as_deref().and_then(sanitize_message)
}

/// Trims and truncates a server message; blank messages are dropped.
pub fn sanitize_message(message: &str) -> Option<String> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(MAX_ERROR_CHARS).collect())
    }
}
