//! HTTP client for the marketplace REST API
//!
//! Every typed endpoint goes through [`HttpClient::request`], which injects
//! the bearer token, enforces a JSON content type and translates the body
//! into the `{success, message, data}` envelope.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::session::{SessionStorage, SessionStore};
use crate::{ApiResponse, ClientConfig, ClientError, ClientResult};

/// HTTP client for making requests to the marketplace backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: ClientConfig,
    session: SessionStore,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to build HTTP client: {e}")))?;

        let session = match &config.session_file {
            Some(path) => SessionStore::persistent(SessionStorage::new(path)),
            None => SessionStore::in_memory(),
        };

        Ok(Self {
            client,
            config: config.clone(),
            session,
        })
    }

    /// Share a session with another client
    pub fn with_session(mut self, session: SessionStore) -> Self {
        self.session = session;
        self
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build authorization header value
    async fn auth_header(&self) -> Option<String> {
        self.session.token().await.map(|t| format!("Bearer {t}"))
    }

    /// Start a request to an API path with the bearer token attached
    pub(crate) async fn builder(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.endpoint(path);
        tracing::debug!(%method, %url, "API request");

        let mut request = self.client.request(method, url);
        if let Some(auth) = self.auth_header().await {
            request = request.header(AUTHORIZATION, auth);
        }
        request
    }

    /// Make a request and return the raw envelope
    ///
    /// A non-2xx JSON answer is not an `Err`: it comes back as an envelope
    /// with `success = false` carrying the backend's `message`.
    pub async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ClientResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.dispatch(method, path, body)
            .await
            .map(|(_, envelope)| envelope)
    }

    async fn dispatch<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ClientResult<(StatusCode, ApiResponse<T>)>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut request = self.builder(method, path).await;
        if let Some(body) = body {
            request = request.json(body);
        }
        self.execute(request).await
    }

    /// Send a prepared request and translate the response into an envelope
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> ClientResult<(StatusCode, ApiResponse<T>)> {
        let timeout = self.config.timeout;
        let response = request.send().await.map_err(|e| {
            tracing::warn!("API request failed: {e}");
            ClientError::from_reqwest(e, timeout)
        })?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if !content_type.contains("json") {
            tracing::warn!(%status, %content_type, "API returned non-JSON response");
            return Err(ClientError::NonJson {
                status,
                content_type: if content_type.is_empty() {
                    "none".to_string()
                } else {
                    content_type
                },
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError::from_reqwest(e, timeout))?;
        let body: Value = serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::InvalidResponse(format!("Malformed JSON body: {e}")))?;

        tracing::debug!(%status, "API response");

        if !status.is_success() {
            let message = error_message(&body, status);
            tracing::warn!(%status, %message, "API request rejected");
            return Ok((status, ApiResponse::error(message)));
        }

        parse_envelope(body).map(|envelope| (status, envelope))
    }

    // ========== Convenience wrappers ==========

    /// GET and unwrap `data`
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let (status, envelope) = self.dispatch::<T, ()>(Method::GET, path, None).await?;
        into_data(status, envelope)
    }

    /// POST a JSON body and unwrap `data`
    pub async fn post<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let (status, envelope) = self.dispatch(Method::POST, path, Some(body)).await?;
        into_data(status, envelope)
    }

    /// PUT a JSON body and unwrap `data`
    pub async fn put<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let (status, envelope) = self.dispatch(Method::PUT, path, Some(body)).await?;
        into_data(status, envelope)
    }

    /// PATCH a JSON body and unwrap `data`
    pub async fn patch<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let (status, envelope) = self.dispatch(Method::PATCH, path, Some(body)).await?;
        into_data(status, envelope)
    }

    /// POST a JSON body, returning the backend's message
    pub async fn post_message<B>(&self, path: &str, body: &B) -> ClientResult<String>
    where
        B: Serialize + ?Sized,
    {
        let (status, envelope) = self
            .dispatch::<Value, B>(Method::POST, path, Some(body))
            .await?;
        into_message(status, envelope)
    }

    /// DELETE, returning the backend's message
    pub async fn delete(&self, path: &str) -> ClientResult<String> {
        let (status, envelope) = self
            .dispatch::<Value, ()>(Method::DELETE, path, None)
            .await?;
        into_message(status, envelope)
    }

    /// POST without a body, returning the backend's message
    pub async fn post_empty(&self, path: &str) -> ClientResult<String> {
        let (status, envelope) = self
            .dispatch::<Value, ()>(Method::POST, path, None)
            .await?;
        into_message(status, envelope)
    }
}

/// Message of a rejected request, falling back to the status line
fn error_message(body: &Value, status: StatusCode) -> String {
    ["message", "detail", "error"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()))
}

/// A 2xx body is either a full envelope or a bare payload
fn parse_envelope<T: DeserializeOwned>(body: Value) -> ClientResult<ApiResponse<T>> {
    let is_envelope = body.as_object().is_some_and(|o| o.contains_key("success"));
    if is_envelope {
        serde_json::from_value(body)
            .map_err(|e| ClientError::InvalidResponse(format!("Unexpected response shape: {e}")))
    } else {
        serde_json::from_value(body)
            .map(ApiResponse::ok)
            .map_err(|e| ClientError::InvalidResponse(format!("Unexpected response shape: {e}")))
    }
}

/// Fail on `success = false`, keeping the backend's message
pub(crate) fn ensure_success<T>(
    status: StatusCode,
    envelope: ApiResponse<T>,
) -> ClientResult<ApiResponse<T>> {
    if envelope.success {
        Ok(envelope)
    } else {
        Err(ClientError::Api {
            status,
            message: envelope.message,
        })
    }
}

pub(crate) fn into_data<T>(status: StatusCode, envelope: ApiResponse<T>) -> ClientResult<T> {
    ensure_success(status, envelope)?
        .data
        .ok_or_else(|| ClientError::InvalidResponse("Missing response data".to_string()))
}

pub(crate) fn into_message<T>(
    status: StatusCode,
    envelope: ApiResponse<T>,
) -> ClientResult<String> {
    ensure_success(status, envelope).map(|e| e.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_message_prefers_backend_message() {
        let body = json!({"success": false, "message": "Slug already taken"});
        assert_eq!(
            error_message(&body, StatusCode::CONFLICT),
            "Slug already taken"
        );
    }

    #[test]
    fn test_error_message_falls_back_to_detail_then_status() {
        let body = json!({"detail": "Not authenticated"});
        assert_eq!(
            error_message(&body, StatusCode::UNAUTHORIZED),
            "Not authenticated"
        );
        assert_eq!(
            error_message(&json!({}), StatusCode::INTERNAL_SERVER_ERROR),
            "Request failed with status 500"
        );
    }

    #[test]
    fn test_parse_envelope_and_bare_payload() {
        let envelope: ApiResponse<Vec<u32>> =
            parse_envelope(json!({"success": true, "message": "ok", "data": [1, 2]})).unwrap();
        assert_eq!(envelope.data, Some(vec![1, 2]));
        assert_eq!(envelope.message, "ok");

        let bare: ApiResponse<Vec<u32>> = parse_envelope(json!([3])).unwrap();
        assert!(bare.success);
        assert_eq!(bare.data, Some(vec![3]));
    }

    #[test]
    fn test_into_data_rejects_failed_envelope() {
        let err = into_data(StatusCode::GONE, ApiResponse::<u32>::error("Offer expired"))
            .unwrap_err();
        assert_eq!(err.user_message(), "Offer expired");
        assert_eq!(err.status(), Some(StatusCode::GONE));

        let err = into_data(
            StatusCode::OK,
            ApiResponse::<u32> {
                success: true,
                message: String::new(),
                data: None,
            },
        )
        .unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(_)));
    }
}
