//! SendMessageHandler - Command handler for one chat message.

use std::sync::Arc;

use crate::domain::conversation::{ChatReply, ConversationState};
use crate::domain::foundation::{DomainError, SessionKey};
use crate::ports::SessionStore;

use super::conversation_machine::ConversationStateMachine;

/// Command to process a chat message.
#[derive(Debug, Clone)]
pub struct SendMessageCommand {
    pub session_key: SessionKey,
    pub message: String,
}

/// Reply plus the state the session ended in.
#[derive(Debug, Clone)]
pub struct SendMessageResult {
    pub reply: ChatReply,
    pub state: ConversationState,
}

/// Handler for chat messages.
///
/// Holds the session lock for the whole message, so messages for the same
/// session are processed one at a time.
pub struct SendMessageHandler {
    sessions: Arc<dyn SessionStore>,
    machine: Arc<ConversationStateMachine>,
}

impl SendMessageHandler {
    pub fn new(sessions: Arc<dyn SessionStore>, machine: Arc<ConversationStateMachine>) -> Self {
        Self { sessions, machine }
    }

    pub async fn handle(&self, cmd: SendMessageCommand) -> Result<SendMessageResult, DomainError> {
        let handle = self.sessions.get_or_create(&cmd.session_key).await?;
        let mut session = handle.lock().await;

        let reply = self.machine.advance(&mut session, &cmd.message).await;

        Ok(SendMessageResult {
            reply,
            state: session.state(),
        })
    }
}
