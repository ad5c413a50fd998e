//! OTP login
//!
//! The backend issues and checks the OTP. This side only validates input,
//! keeps the returned token and drops it on logout.

use shared::client::{LoginResponse, SendOtpRequest, UserProfile, VerifyOtpRequest};

use crate::session::Session;
use crate::{ClientResult, HttpClient};

impl HttpClient {
    /// `POST /auth/send-otp`
    pub async fn send_otp(&self, phone: &str) -> ClientResult<String> {
        let request = SendOtpRequest {
            phone: phone.trim().to_string(),
        };
        request.validate()?;
        self.post_message("auth/send-otp", &request).await
    }

    /// `POST /auth/verify-otp`, storing the session on success
    pub async fn verify_otp(&self, phone: &str, otp: &str) -> ClientResult<UserProfile> {
        let request = VerifyOtpRequest {
            phone: phone.trim().to_string(),
            otp: otp.trim().to_string(),
        };
        request.validate()?;

        let login: LoginResponse = self.post("auth/verify-otp", &request).await?;
        let user = login.user.clone();
        self.session().set(Session::from(login)).await?;
        tracing::info!(user_id = %user.id, "Signed in");
        Ok(user)
    }

    /// `GET /auth/me`
    pub async fn me(&self) -> ClientResult<UserProfile> {
        self.get("auth/me").await
    }

    /// `POST /auth/logout`
    ///
    /// The local session is cleared even when the backend call fails.
    pub async fn logout(&self) -> ClientResult<()> {
        if let Err(e) = self.post_empty("auth/logout").await {
            tracing::warn!("Logout request failed: {e}");
        }
        self.session().clear().await?;
        tracing::info!("Signed out");
        Ok(())
    }
}
