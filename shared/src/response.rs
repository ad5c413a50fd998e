//! API Response types
//!
//! Standardized response envelope used by every marketplace endpoint

use serde::{Deserialize, Serialize};

/// Unified API response structure
///
/// All API responses follow this format:
/// ```json
/// {
///     "success": true,
///     "message": "Venue created",
///     "data": { ... }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the backend accepted the request
    pub success: bool,
    /// Human-readable message
    #[serde(default)]
    pub message: String,
    /// Response data (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: "Success".to_string(),
            data: Some(data),
        }
    }

    /// Create a failed response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_response_deserialize() {
        let json = r#"{"success":true,"message":"OK","data":42}"#;
        let response: ApiResponse<i32> = serde_json::from_str(json).unwrap();
        assert!(response.success);
        assert_eq!(response.data, Some(42));
    }

    #[test]
    fn test_api_response_deserialize_without_message_or_data() {
        let json = r#"{"success":false}"#;
        let response: ApiResponse<i32> = serde_json::from_str(json).unwrap();
        assert!(!response.success);
        assert_eq!(response.message, "");
        assert!(response.data.is_none());
    }

    #[test]
    fn test_api_response_error_skips_data() {
        let response = ApiResponse::<()>::error("Slug already taken");
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"success":false,"message":"Slug already taken"}"#);
    }
}
