//! Chat command handlers.

mod conversation_machine;
mod reset_session;
mod send_message;

pub use conversation_machine::{ConversationStateMachine, DEFAULT_DOWNLOAD_BASE};
pub use reset_session::{ResetSessionCommand, ResetSessionHandler};
pub use send_message::{SendMessageCommand, SendMessageHandler, SendMessageResult};
