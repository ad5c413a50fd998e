//! Client-side validation errors
//!
//! Raised before any network call when a form or booking flow is missing
//! something the backend would reject anyway.

use thiserror::Error;

/// Validation failure for a single field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Required field is empty
    #[error("{field} is required")]
    Required { field: String },

    /// Field exceeds its length limit
    #[error("{field} is too long ({len} chars, max {max})")]
    TooLong { field: String, len: usize, max: usize },

    /// Field has a value, but not an acceptable one
    #[error("{field}: {message}")]
    Invalid { field: String, message: String },
}

impl ValidationError {
    /// Create a Required error
    pub fn required(field: impl Into<String>) -> Self {
        Self::Required {
            field: field.into(),
        }
    }

    /// Create an Invalid error
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            Self::Required { field }
            | Self::TooLong { field, .. }
            | Self::Invalid { field, .. } => field,
        }
    }
}

/// Result type for validation
pub type ValidationResult<T = ()> = Result<T, ValidationError>;
