//! HTTP adapter for quote endpoints.
//!
//! Exposes a session's ledger outside the chat. Items and components are
//! addressed by 0-based index.
//!
//! - `GET /quotes/:session_id` - Full quote
//! - `GET /quotes/:session_id/status` - State, item count and total
//! - `DELETE /quotes/:session_id/items/:index` - Remove an item
//! - `POST /quotes/:session_id/items/:index/dimensions` - Resize an item
//! - `GET /quotes/:session_id/items/:index/components/:component_index` - Options
//! - `POST /quotes/:session_id/items/:index/components/:component_index` - Swap
//! - `GET /quotes/:session_id/document` - Last exported document

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ComponentLineResponse, ComponentOptionsResponse, EditDimensionsRequest, OptionResponse,
    QuoteItemResponse, QuoteResponse, QuoteStatusResponse, RemoveItemResponse,
    SwapComponentRequest,
};
pub use handlers::QuoteHandlers;
pub use routes::quote_routes;
