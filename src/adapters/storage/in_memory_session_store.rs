//! In-Memory Session Store Adapter
//!
//! Keeps sessions in a process-local map. Each session sits behind its own
//! mutex so messages for one session serialize without blocking others.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::domain::conversation::Session;
use crate::domain::foundation::SessionKey;
use crate::ports::{SessionHandle, SessionStore, SessionStoreError};

/// In-memory storage for sessions
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionKey, SessionHandle>>>,
}

impl InMemorySessionStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all sessions (useful for tests)
    pub async fn clear(&self) {
        self.sessions.write().await.clear();
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, key: &SessionKey) -> Result<Option<SessionHandle>, SessionStoreError> {
        Ok(self.sessions.read().await.get(key).cloned())
    }

    async fn get_or_create(&self, key: &SessionKey) -> Result<SessionHandle, SessionStoreError> {
        if let Some(handle) = self.sessions.read().await.get(key) {
            return Ok(Arc::clone(handle));
        }

        let mut sessions = self.sessions.write().await;
        let handle = sessions.entry(key.clone()).or_insert_with(|| {
            tracing::debug!(session_id = %key, "Session created");
            Arc::new(Mutex::new(Session::new(key.clone())))
        });
        Ok(Arc::clone(handle))
    }

    async fn delete(&self, key: &SessionKey) -> Result<bool, SessionStoreError> {
        Ok(self.sessions.write().await.remove(key).is_some())
    }

    async fn count(&self) -> Result<usize, SessionStoreError> {
        Ok(self.sessions.read().await.len())
    }
}
