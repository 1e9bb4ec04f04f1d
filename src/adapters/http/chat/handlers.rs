//! HTTP handlers for chat endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::handle_domain_error;
use crate::application::handlers::chat::{
    ResetSessionCommand, ResetSessionHandler, SendMessageCommand, SendMessageHandler,
};
use crate::domain::foundation::SessionKey;

use super::dto::{ChatRequest, ChatResponse, ResetResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ChatHandlers {
    send_handler: Arc<SendMessageHandler>,
    reset_handler: Arc<ResetSessionHandler>,
}

impl ChatHandlers {
    pub fn new(send_handler: Arc<SendMessageHandler>, reset_handler: Arc<ResetSessionHandler>) -> Self {
        Self {
            send_handler,
            reset_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /chat - Advance the conversation by one message
///
/// Conversation errors come back as reply text with status 200.
pub async fn send_message(
    State(handlers): State<ChatHandlers>,
    Json(req): Json<ChatRequest>,
) -> Response {
    let cmd = SendMessageCommand {
        session_key: SessionKey::new(req.session_id.unwrap_or_default()),
        message: req.message,
    };

    match handlers.send_handler.handle(cmd).await {
        Ok(result) => (StatusCode::OK, Json(ChatResponse::from(result.reply))).into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// POST /reset/:session_id - Drop a conversation
pub async fn reset_session(
    State(handlers): State<ChatHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_key = SessionKey::new(session_id);
    let cmd = ResetSessionCommand {
        session_key: session_key.clone(),
    };

    match handlers.reset_handler.handle(cmd).await {
        Ok(existed) => {
            let message = if existed {
                "Sessao reiniciada."
            } else {
                "Nenhuma sessao ativa."
            };
            let response = ResetResponse {
                session_id: session_key.to_string(),
                existed,
                message: message.to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_domain_error(e),
    }
}
