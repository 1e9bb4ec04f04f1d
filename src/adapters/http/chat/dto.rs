//! HTTP DTOs for chat endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::conversation::{ChatReply, MenuOption};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One user message. Both fields may be omitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuOptionResponse {
    pub id: String,
    pub label: String,
}

impl From<MenuOption> for MenuOptionResponse {
    fn from(option: MenuOption) -> Self {
        Self {
            id: option.id,
            label: option.label,
        }
    }
}

/// Flat reply envelope.
///
/// `options` is present for closed menus; the `pdf_*` and `download_url`
/// fields only after a successful export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<MenuOptionResponse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_ready: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

impl From<ChatReply> for ChatResponse {
    fn from(reply: ChatReply) -> Self {
        let (pdf_ready, pdf_filename, download_url) = match reply.export {
            Some(export) => (Some(true), Some(export.filename), Some(export.download_url)),
            None => (None, None, None),
        };
        Self {
            response: reply.text,
            options: reply
                .options
                .map(|options| options.into_iter().map(Into::into).collect()),
            pdf_ready,
            pdf_filename,
            download_url,
        }
    }
}

/// Result of a session reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetResponse {
    pub session_id: String,
    pub existed: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::ExportInfo;

    #[test]
    fn missing_fields_default() {
        let req: ChatRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.message, "");
        assert!(req.session_id.is_none());
    }

    #[test]
    fn plain_reply_omits_optional_fields() {
        let json = serde_json::to_value(ChatResponse::from(ChatReply::text("oi"))).unwrap();
        assert_eq!(json, serde_json::json!({ "response": "oi" }));
    }

    #[test]
    fn menu_reply_carries_options() {
        let reply = ChatReply::with_options("Escolha", vec![MenuOption::new("1", "Dimensao")]);
        let json = serde_json::to_value(ChatResponse::from(reply)).unwrap();
        assert_eq!(json["options"][0]["id"], "1");
        assert_eq!(json["options"][0]["label"], "Dimensao");
        assert!(json.get("pdf_ready").is_none());
    }

    #[test]
    fn export_reply_flattens_document_fields() {
        let reply = ChatReply::exported(
            "Pronto",
            ExportInfo {
                filename: "orcamento_a.md".to_string(),
                download_url: "/quotes/a/document".to_string(),
            },
        );
        let response = ChatResponse::from(reply);
        assert_eq!(response.pdf_ready, Some(true));
        assert_eq!(response.pdf_filename.as_deref(), Some("orcamento_a.md"));
        assert_eq!(response.download_url.as_deref(), Some("/quotes/a/document"));
    }
}
