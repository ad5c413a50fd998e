//! Auth-related types shared by the API client
//!
//! Request/response DTOs for the OTP login flow and the signed-in user.

use serde::{Deserialize, Serialize};

use crate::error::ValidationResult;
use crate::validation::{validate_otp, validate_phone};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Ask the backend to send a login OTP
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendOtpRequest {
    pub phone: String,
}

impl SendOtpRequest {
    pub fn validate(&self) -> ValidationResult {
        validate_phone(&self.phone, "phone")
    }
}

/// Verify a login OTP
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOtpRequest {
    pub phone: String,
    pub otp: String,
}

impl VerifyOtpRequest {
    pub fn validate(&self) -> ValidationResult {
        validate_phone(&self.phone, "phone")?;
        validate_otp(&self.otp, "otp")
    }
}

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Organizer,
    Admin,
}

/// Signed-in user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: UserRole,
}

impl UserProfile {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// Verify OTP response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
    /// Token expiry (Unix seconds)
    #[serde(default)]
    pub expires_at: Option<i64>,
}
