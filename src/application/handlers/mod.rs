//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod chat;
pub mod quote;

pub use chat::{
    ConversationStateMachine, ResetSessionCommand, ResetSessionHandler, SendMessageCommand,
    SendMessageHandler, SendMessageResult, DEFAULT_DOWNLOAD_BASE,
};
pub use quote::{
    ComponentOptions, DownloadDocumentHandler, DownloadDocumentQuery, EditItemDimensionsCommand,
    EditItemDimensionsHandler, GetQuoteHandler, GetQuoteQuery, ListComponentOptionsHandler,
    ListComponentOptionsQuery, QuoteSnapshot, RemoveItemCommand, RemoveItemHandler,
    RemoveItemResult, SwapItemComponentCommand, SwapItemComponentHandler,
};
