//! Client error types

use std::time::Duration;

use reqwest::StatusCode;
use shared::ValidationError;
use thiserror::Error;

/// Generic toast text for failures the user cannot act on
pub const NETWORK_ERROR_MESSAGE: &str =
    "Unable to reach the server. Please check your internet connection and try again.";

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// No response within the configured timeout
    #[error("Request timed out after {} seconds", .0.as_secs_f64())]
    Timeout(Duration),

    /// Connection, DNS or TLS failure
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Response was not JSON
    #[error("Server returned a non-JSON response ({status}, content-type: {content_type})")]
    NonJson {
        status: StatusCode,
        content_type: String,
    },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Backend rejected the request; `message` is its own text
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    /// Client-side check failed before anything was sent
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A submission of the same form is still in flight
    #[error("A request is already in progress")]
    Busy,

    /// Session storage failure
    #[error("Session error: {0}")]
    Session(#[from] std::io::Error),

    /// Client misconfigured
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Map a reqwest failure, keeping timeouts distinct
    pub(crate) fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout)
        } else if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else {
            Self::Network(err)
        }
    }

    /// Text to show the user in a toast
    pub fn user_message(&self) -> String {
        match self {
            Self::Timeout(_) => {
                "The request timed out. Please check your connection and try again.".to_string()
            }
            Self::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
            Self::NonJson { .. } => {
                "The server returned an unexpected non-JSON response. Please try again later."
                    .to_string()
            }
            Self::InvalidResponse(_) | Self::Serialization(_) => {
                "The server response could not be read. Please try again later.".to_string()
            }
            Self::Api { message, .. } => message.clone(),
            Self::Validation(err) => err.to_string(),
            Self::Busy => "Please wait for the current request to finish.".to_string(),
            Self::Session(_) => {
                "Your session could not be saved. Please sign in again.".to_string()
            }
            Self::Config(msg) => msg.clone(),
        }
    }

    /// Backend status, when the backend answered
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } | Self::NonJson { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the session token was rejected
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
