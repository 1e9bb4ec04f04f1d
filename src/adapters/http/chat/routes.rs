//! HTTP routes for chat endpoints.

use axum::{routing::post, Router};

use super::handlers::{reset_session, send_message, ChatHandlers};

/// Creates the chat router.
pub fn chat_routes(handlers: ChatHandlers) -> Router {
    Router::new()
        .route("/chat", post(send_message))
        .route("/reset/:session_id", post(reset_session))
        .with_state(handlers)
}
