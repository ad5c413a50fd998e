//! Signed-in session
//!
//! Holds the bearer token the API client injects into every request. The
//! session can be persisted to a JSON file so a restart keeps the user
//! signed in, the way the browser kept it in a cookie.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use shared::client::{LoginResponse, UserProfile};
use tokio::sync::RwLock;

/// Stored session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: Option<UserProfile>,
    /// Unix seconds
    pub expires_at: Option<i64>,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user: None,
            expires_at: None,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at
            .is_some_and(|expires_at| chrono::Utc::now().timestamp() > expires_at)
    }
}

impl From<LoginResponse> for Session {
    fn from(login: LoginResponse) -> Self {
        Self {
            token: login.token,
            user: Some(login.user),
            expires_at: login.expires_at,
        }
    }
}

/// Session file storage
#[derive(Debug, Clone)]
pub struct SessionStorage {
    path: PathBuf,
}

impl SessionStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Make sure the parent directory exists
    pub async fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        Ok(())
    }

    pub async fn save(&self, session: &Session) -> std::io::Result<()> {
        self.ensure_dir().await?;
        let json = serde_json::to_string_pretty(session)?;
        tokio::fs::write(&self.path, json).await
    }

    /// Load the session; a missing or unreadable file means "signed out"
    ///
    /// Blocking: meant for startup, before any request is made.
    pub fn load(&self) -> Option<Session> {
        if !self.path.exists() {
            return None;
        }
        let json = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&json) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "Ignoring unreadable session file: {e}"
                );
                None
            }
        }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub async fn delete(&self) -> std::io::Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Shared session handle used by the HTTP client
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    current: Arc<RwLock<Option<Session>>>,
    storage: Option<SessionStorage>,
}

impl SessionStore {
    /// In-memory store
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// File-backed store, loading any saved, unexpired session
    pub fn persistent(storage: SessionStorage) -> Self {
        let saved = storage.load().filter(|s| !s.is_expired());
        Self {
            current: Arc::new(RwLock::new(saved)),
            storage: Some(storage),
        }
    }

    /// Bearer token of an unexpired session
    pub async fn token(&self) -> Option<String> {
        self.current
            .read()
            .await
            .as_ref()
            .filter(|s| !s.is_expired())
            .map(|s| s.token.clone())
    }

    pub async fn current(&self) -> Option<Session> {
        self.current.read().await.clone()
    }

    pub async fn is_signed_in(&self) -> bool {
        self.token().await.is_some()
    }

    pub async fn set(&self, session: Session) -> std::io::Result<()> {
        if let Some(storage) = &self.storage {
            storage.save(&session).await?;
        }
        *self.current.write().await = Some(session);
        Ok(())
    }

    pub async fn clear(&self) -> std::io::Result<()> {
        *self.current.write().await = None;
        if let Some(storage) = &self.storage {
            storage.delete().await?;
        }
        Ok(())
    }
}
