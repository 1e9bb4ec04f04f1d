//! HTTP routes for quote endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{
    download_document, edit_dimensions, get_quote, get_status, list_component_options,
    remove_item, swap_component, QuoteHandlers,
};

/// Creates the quote router, nested under `/quotes`.
pub fn quote_routes(handlers: QuoteHandlers) -> Router {
    Router::new()
        .route("/quotes/:session_id", get(get_quote))
        .route("/quotes/:session_id/status", get(get_status))
        .route("/quotes/:session_id/document", get(download_document))
        .route("/quotes/:session_id/items/:index", delete(remove_item))
        .route("/quotes/:session_id/items/:index/dimensions", post(edit_dimensions))
        .route(
            "/quotes/:session_id/items/:index/components/:component_index",
            get(list_component_options).post(swap_component),
        )
        .with_state(handlers)
}
