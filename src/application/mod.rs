//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! The chat side drives the conversation state machine; the quote side
//! reads and edits a session's ledger directly.

pub mod handlers;

pub use handlers::{
    // Chat handlers
    ConversationStateMachine, ResetSessionCommand, ResetSessionHandler,
    SendMessageCommand, SendMessageHandler, SendMessageResult,
    // Quote handlers
    DownloadDocumentHandler, EditItemDimensionsHandler, GetQuoteHandler,
    ListComponentOptionsHandler, RemoveItemHandler, SwapItemComponentHandler,
};
