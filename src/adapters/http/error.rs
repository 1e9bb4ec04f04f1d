//! Shared error body and DomainError to status mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};

/// JSON error body returned by every REST endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        let details = if err.details.is_empty() {
            None
        } else {
            serde_json::to_value(&err.details).ok()
        };
        Self {
            code: err.code.to_string(),
            message: err.message.clone(),
            details,
        }
    }
}

/// Status code for a domain error code.
///
/// Unknown sessions and documents are 404; a bad item, component or option
/// reference inside an existing quote is a 400.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::SessionNotFound | ErrorCode::DocumentNotFound | ErrorCode::FurnitureNotFound => {
            StatusCode::NOT_FOUND
        }
        ErrorCode::ValidationFailed
        | ErrorCode::InvalidDimensions
        | ErrorCode::ItemNotFound
        | ErrorCode::ComponentNotFound
        | ErrorCode::OptionNotFound
        | ErrorCode::CategoryNotFound => StatusCode::BAD_REQUEST,
        ErrorCode::InvalidStateTransition => StatusCode::CONFLICT,
        ErrorCode::CatalogUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::ExportFailed => StatusCode::BAD_GATEWAY,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Converts a domain error into a JSON error response.
pub fn handle_domain_error(err: DomainError) -> Response {
    let status = status_for(err.code);
    if status.is_server_error() {
        tracing::error!(code = %err.code, error = %err.message, "Request failed");
    }
    (status, Json(ErrorResponse::from(&err))).into_response()
}

/// Parses a path segment as a 0-based index.
pub fn parse_index(raw: &str, name: &str) -> Result<usize, Response> {
    raw.parse::<usize>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(format!("Invalid {}: {}", name, raw))),
        )
            .into_response()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_not_found_maps_to_404() {
        let response = handle_domain_error(DomainError::new(ErrorCode::SessionNotFound, "x"));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn bad_item_reference_maps_to_400() {
        for code in [
            ErrorCode::ItemNotFound,
            ErrorCode::ComponentNotFound,
            ErrorCode::OptionNotFound,
            ErrorCode::CategoryNotFound,
            ErrorCode::InvalidDimensions,
        ] {
            assert_eq!(status_for(code), StatusCode::BAD_REQUEST, "{code}");
        }
    }

    #[test]
    fn finalized_quote_maps_to_409() {
        assert_eq!(status_for(ErrorCode::InvalidStateTransition), StatusCode::CONFLICT);
    }

    #[test]
    fn details_are_carried_into_the_body() {
        let err = DomainError::new(ErrorCode::ItemNotFound, "Quote item not found")
            .with_detail("index", "7");
        let body = ErrorResponse::from(&err);
        assert_eq!(body.code, "ITEM_NOT_FOUND");
        assert_eq!(body.details.unwrap()["index"], "7");
    }

    #[test]
    fn parse_index_rejects_non_numbers() {
        assert_eq!(parse_index("2", "index").unwrap(), 2);
        let response = parse_index("-1", "index").unwrap_err();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
