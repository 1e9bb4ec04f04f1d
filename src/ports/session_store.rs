//! Session Store Port - Interface for keeping conversation sessions.
//!
//! Sessions are handed out as shared, individually locked handles so two
//! requests for the same session serialize while different sessions run
//! concurrently.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::conversation::Session;
use crate::domain::foundation::{DomainError, ErrorCode, SessionKey};

/// Shared handle to one session. Lock it for the whole message.
pub type SessionHandle = Arc<Mutex<Session>>;

/// Errors that can occur during session storage operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Session store unavailable: {0}")]
    Unavailable(String),
}

impl From<SessionStoreError> for DomainError {
    fn from(err: SessionStoreError) -> Self {
        DomainError::new(ErrorCode::InternalError, err.to_string())
    }
}

/// Port for session lookup and lifecycle.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the session for `key`, if one exists.
    async fn get(&self, key: &SessionKey) -> Result<Option<SessionHandle>, SessionStoreError>;

    /// Returns the session for `key`, creating a fresh one in `Start` if absent.
    async fn get_or_create(&self, key: &SessionKey) -> Result<SessionHandle, SessionStoreError>;

    /// Drops the session for `key`. Returns whether one existed.
    async fn delete(&self, key: &SessionKey) -> Result<bool, SessionStoreError>;

    /// Number of live sessions.
    async fn count(&self) -> Result<usize, SessionStoreError>;
}
