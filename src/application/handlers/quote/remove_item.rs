//! RemoveItemHandler - Removes one confirmed item from a quote.

use std::sync::Arc;

use crate::domain::conversation::ConversationState;
use crate::domain::foundation::{DomainError, SessionKey};
use crate::ports::SessionStore;

use super::{ensure_editable, existing_session};

/// Command to remove the item at a 0-based `index`.
#[derive(Debug, Clone)]
pub struct RemoveItemCommand {
    pub session_key: SessionKey,
    pub index: usize,
}

#[derive(Debug, Clone)]
pub struct RemoveItemResult {
    pub removed_name: String,
    pub remaining: usize,
    pub state: ConversationState,
}

/// Handler for item removal.
///
/// Emptying the ledger from the review menus sends the conversation back
/// to `Start`, as removal through the chat does.
pub struct RemoveItemHandler {
    sessions: Arc<dyn SessionStore>,
}

impl RemoveItemHandler {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn handle(&self, cmd: RemoveItemCommand) -> Result<RemoveItemResult, DomainError> {
        let handle = existing_session(self.sessions.as_ref(), &cmd.session_key).await?;
        let mut session = handle.lock().await;
        ensure_editable(&session)?;

        let removed = session.ledger_mut().remove(cmd.index)?;

        let in_review = matches!(
            session.state(),
            ConversationState::ItemAddedMenu | ConversationState::FinalReview
        );
        if session.ledger().is_empty() && in_review {
            session.transition_to(ConversationState::Start)?;
        }

        tracing::info!(
            session_id = %cmd.session_key,
            index = cmd.index,
            remaining = session.ledger().len(),
            "Quote item removed"
        );

        Ok(RemoveItemResult {
            removed_name: removed.name().to_string(),
            remaining: session.ledger().len(),
            state: session.state(),
        })
    }
}
