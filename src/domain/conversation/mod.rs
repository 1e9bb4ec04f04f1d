//! Conversation module - dialogue state and the texts it produces.

pub mod command;
pub mod prompts;
mod reply;
mod session;
mod state;

pub use reply::{ChatReply, ExportInfo, MenuOption};
pub use session::Session;
pub use state::ConversationState;
