//! HTTP adapters - REST API implementations.
//!
//! Each endpoint group has its own module; [`api_router`] wires them to the
//! application handlers and applies the tower-http layers.

pub mod chat;
pub mod error;
pub mod health;
pub mod quote;

use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::application::handlers::chat::{
    ConversationStateMachine, ResetSessionHandler, SendMessageHandler,
};
use crate::application::handlers::quote::{
    DownloadDocumentHandler, EditItemDimensionsHandler, GetQuoteHandler,
    ListComponentOptionsHandler, RemoveItemHandler, SwapItemComponentHandler,
};
use crate::config::ServerConfig;
use crate::ports::{CatalogProvider, QuoteExporter, SessionStore};

pub use chat::{chat_routes, ChatHandlers};
pub use error::{handle_domain_error, ErrorResponse};
pub use health::health_routes;
pub use quote::{quote_routes, QuoteHandlers};

/// Ports the API is built from.
#[derive(Clone)]
pub struct AppServices {
    pub catalog: Arc<dyn CatalogProvider>,
    pub exporter: Arc<dyn QuoteExporter>,
    pub sessions: Arc<dyn SessionStore>,
    /// Prefix of the download URLs put in chat replies.
    pub download_base: String,
}

impl AppServices {
    fn chat_handlers(&self) -> ChatHandlers {
        let machine = ConversationStateMachine::new(self.catalog.clone(), self.exporter.clone())
            .with_download_base(self.download_base.clone());
        ChatHandlers::new(
            Arc::new(SendMessageHandler::new(self.sessions.clone(), Arc::new(machine))),
            Arc::new(ResetSessionHandler::new(self.sessions.clone())),
        )
    }

    fn quote_handlers(&self) -> QuoteHandlers {
        QuoteHandlers::new(
            Arc::new(GetQuoteHandler::new(self.sessions.clone())),
            Arc::new(RemoveItemHandler::new(self.sessions.clone())),
            Arc::new(EditItemDimensionsHandler::new(self.sessions.clone())),
            Arc::new(ListComponentOptionsHandler::new(
                self.sessions.clone(),
                self.catalog.clone(),
            )),
            Arc::new(SwapItemComponentHandler::new(
                self.sessions.clone(),
                self.catalog.clone(),
            )),
            Arc::new(DownloadDocumentHandler::new(
                self.sessions.clone(),
                self.exporter.clone(),
            )),
        )
    }
}

/// Builds the full API router.
pub fn api_router(services: AppServices, server: &ServerConfig) -> Router {
    Router::new()
        .merge(chat_routes(services.chat_handlers()))
        .merge(quote_routes(services.quote_handlers()))
        .merge(health_routes(services.sessions.clone()))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(build_cors_layer(&server.allowed_origins()))
        .layer(TraceLayer::new_for_http())
}

/// Permissive when no origins are configured.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(parsed)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any)
}
