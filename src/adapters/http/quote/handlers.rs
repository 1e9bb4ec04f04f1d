//! HTTP handlers for quote endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{handle_domain_error, parse_index};
use crate::application::handlers::quote::{
    DownloadDocumentHandler, DownloadDocumentQuery, EditItemDimensionsCommand,
    EditItemDimensionsHandler, GetQuoteHandler, GetQuoteQuery, ListComponentOptionsHandler,
    ListComponentOptionsQuery, RemoveItemCommand, RemoveItemHandler, SwapItemComponentCommand,
    SwapItemComponentHandler,
};
use crate::domain::foundation::{ErrorCode, SessionKey};

use super::dto::{
    ComponentOptionsResponse, EditDimensionsRequest, QuoteItemResponse, QuoteResponse,
    QuoteStatusResponse, RemoveItemResponse, SwapComponentRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct QuoteHandlers {
    get_handler: Arc<GetQuoteHandler>,
    remove_handler: Arc<RemoveItemHandler>,
    resize_handler: Arc<EditItemDimensionsHandler>,
    options_handler: Arc<ListComponentOptionsHandler>,
    swap_handler: Arc<SwapItemComponentHandler>,
    download_handler: Arc<DownloadDocumentHandler>,
}

impl QuoteHandlers {
    pub fn new(
        get_handler: Arc<GetQuoteHandler>,
        remove_handler: Arc<RemoveItemHandler>,
        resize_handler: Arc<EditItemDimensionsHandler>,
        options_handler: Arc<ListComponentOptionsHandler>,
        swap_handler: Arc<SwapItemComponentHandler>,
        download_handler: Arc<DownloadDocumentHandler>,
    ) -> Self {
        Self {
            get_handler,
            remove_handler,
            resize_handler,
            options_handler,
            swap_handler,
            download_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /quotes/:session_id - Full quote; unknown sessions read as empty
pub async fn get_quote(
    State(handlers): State<QuoteHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_key = SessionKey::new(session_id);
    let query = GetQuoteQuery {
        session_key: session_key.clone(),
    };

    match handlers.get_handler.handle(query).await {
        Ok(snapshot) => (StatusCode::OK, Json(QuoteResponse::from(snapshot))).into_response(),
        Err(e) if e.code == ErrorCode::SessionNotFound => {
            (StatusCode::OK, Json(QuoteResponse::empty(&session_key))).into_response()
        }
        Err(e) => handle_domain_error(e),
    }
}

/// GET /quotes/:session_id/status - State, item count and total
pub async fn get_status(
    State(handlers): State<QuoteHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let query = GetQuoteQuery {
        session_key: SessionKey::new(session_id),
    };

    match handlers.get_handler.handle(query).await {
        Ok(snapshot) => (StatusCode::OK, Json(QuoteStatusResponse::from(snapshot))).into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// DELETE /quotes/:session_id/items/:index - Remove an item
pub async fn remove_item(
    State(handlers): State<QuoteHandlers>,
    Path((session_id, index)): Path<(String, String)>,
) -> Response {
    let index = match parse_index(&index, "item index") {
        Ok(index) => index,
        Err(response) => return response,
    };
    let cmd = RemoveItemCommand {
        session_key: SessionKey::new(session_id),
        index,
    };

    match handlers.remove_handler.handle(cmd).await {
        Ok(result) => (StatusCode::OK, Json(RemoveItemResponse::from(result))).into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// POST /quotes/:session_id/items/:index/dimensions - Resize an item
pub async fn edit_dimensions(
    State(handlers): State<QuoteHandlers>,
    Path((session_id, index)): Path<(String, String)>,
    Json(req): Json<EditDimensionsRequest>,
) -> Response {
    let index = match parse_index(&index, "item index") {
        Ok(index) => index,
        Err(response) => return response,
    };
    let cmd = EditItemDimensionsCommand {
        session_key: SessionKey::new(session_id),
        index,
        width_mm: req.width_mm,
        height_mm: req.height_mm,
        depth_mm: req.depth_mm,
    };

    match handlers.resize_handler.handle(cmd).await {
        Ok(item) => (StatusCode::OK, Json(QuoteItemResponse::new(index, &item))).into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// GET /quotes/:session_id/items/:index/components/:component_index - Options
pub async fn list_component_options(
    State(handlers): State<QuoteHandlers>,
    Path((session_id, index, component_index)): Path<(String, String, String)>,
) -> Response {
    let (index, component_index) = match (
        parse_index(&index, "item index"),
        parse_index(&component_index, "component index"),
    ) {
        (Ok(index), Ok(component_index)) => (index, component_index),
        (Err(response), _) | (_, Err(response)) => return response,
    };
    let query = ListComponentOptionsQuery {
        session_key: SessionKey::new(session_id),
        index,
        component_index,
    };

    match handlers.options_handler.handle(query).await {
        Ok(result) => {
            (StatusCode::OK, Json(ComponentOptionsResponse::from(result))).into_response()
        }
        Err(e) => handle_domain_error(e),
    }
}

/// POST /quotes/:session_id/items/:index/components/:component_index - Swap
pub async fn swap_component(
    State(handlers): State<QuoteHandlers>,
    Path((session_id, index, component_index)): Path<(String, String, String)>,
    Json(req): Json<SwapComponentRequest>,
) -> Response {
    let (index, component_index) = match (
        parse_index(&index, "item index"),
        parse_index(&component_index, "component index"),
    ) {
        (Ok(index), Ok(component_index)) => (index, component_index),
        (Err(response), _) | (_, Err(response)) => return response,
    };
    let cmd = SwapItemComponentCommand {
        session_key: SessionKey::new(session_id),
        index,
        component_index,
        option_id: req.option_id,
    };

    match handlers.swap_handler.handle(cmd).await {
        Ok(item) => (StatusCode::OK, Json(QuoteItemResponse::new(index, &item))).into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// GET /quotes/:session_id/document - Last exported document
pub async fn download_document(
    State(handlers): State<QuoteHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let query = DownloadDocumentQuery {
        session_key: SessionKey::new(session_id),
    };

    match handlers.download_handler.handle(query).await {
        Ok(document) => {
            let disposition = format!("attachment; filename=\"{}\"", document.filename);
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, document.content_type),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                document.content,
            )
                .into_response()
        }
        Err(e) => handle_domain_error(e),
    }
}
