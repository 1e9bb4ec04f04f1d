//! HTTP adapter for the chat endpoints.
//!
//! - `POST /chat` - Advance a conversation by one message
//! - `POST /reset/:session_id` - Drop a conversation

mod dto;
mod handlers;
mod routes;

pub use dto::{ChatRequest, ChatResponse, MenuOptionResponse, ResetResponse};
pub use handlers::ChatHandlers;
pub use routes::chat_routes;
