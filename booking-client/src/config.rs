//! Client configuration

use std::path::PathBuf;
use std::time::Duration;

/// Default request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default backend address for local development
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Prefix of every backend route
pub const API_PREFIX: &str = "/api/v1";

/// Client configuration for connecting to the marketplace backend
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | MARKETPLACE_API_URL | http://localhost:8000 | Backend base URL |
/// | REQUEST_TIMEOUT_SECS | 30 | Per-request timeout |
/// | SESSION_FILE | (unset) | Where the signed-in session is persisted |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "https://api.example.com")
    pub base_url: String,

    /// Request timeout
    pub timeout: Duration,

    /// Session file; `None` keeps the session in memory only
    pub session_file: Option<PathBuf>,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            session_file: None,
        }
    }

    /// Load configuration from the environment (and `.env`, if present)
    ///
    /// Unset or unparsable variables fall back to their defaults.
    pub fn from_env() -> Self {
        if let Err(e) = dotenv::dotenv() {
            tracing::debug!("No .env loaded: {e}");
        }

        let base_url =
            std::env::var("MARKETPLACE_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let timeout_secs = std::env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        let session_file = std::env::var("SESSION_FILE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            session_file,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Persist the session to `path`
    pub fn with_session_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_file = Some(path.into());
        self
    }

    /// Full URL of an API path, e.g. `"events"` or `"/admin/play/42"`
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}{}/{}",
            self.base_url.trim_end_matches('/'),
            API_PREFIX,
            path.trim_start_matches('/')
        )
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<super::HttpClient> {
        super::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
