//! ResetSessionHandler - Drops a session so the next message starts over.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, SessionKey};
use crate::ports::SessionStore;

/// Command to reset a session.
#[derive(Debug, Clone)]
pub struct ResetSessionCommand {
    pub session_key: SessionKey,
}

/// Handler for session resets.
pub struct ResetSessionHandler {
    sessions: Arc<dyn SessionStore>,
}

impl ResetSessionHandler {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }

    /// Returns whether a session existed.
    pub async fn handle(&self, cmd: ResetSessionCommand) -> Result<bool, DomainError> {
        let existed = self.sessions.delete(&cmd.session_key).await?;
        tracing::info!(session_id = %cmd.session_key, existed, "Session reset");
        Ok(existed)
    }
}
