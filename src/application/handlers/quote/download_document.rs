//! DownloadDocumentHandler - Fetches the exported quote document.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, SessionKey};
use crate::ports::{ExportedDocument, QuoteExporter, SessionStore};

use super::existing_session;

#[derive(Debug, Clone)]
pub struct DownloadDocumentQuery {
    pub session_key: SessionKey,
}

/// Returns the bytes of the last document exported for a session.
pub struct DownloadDocumentHandler {
    sessions: Arc<dyn SessionStore>,
    exporter: Arc<dyn QuoteExporter>,
}

impl DownloadDocumentHandler {
    pub fn new(sessions: Arc<dyn SessionStore>, exporter: Arc<dyn QuoteExporter>) -> Self {
        Self { sessions, exporter }
    }

    pub async fn handle(&self, query: DownloadDocumentQuery) -> Result<ExportedDocument, DomainError> {
        let filename = {
            let handle = existing_session(self.sessions.as_ref(), &query.session_key).await?;
            let session = handle.lock().await;
            session
                .exported_document()
                .map(str::to_owned)
                .ok_or_else(|| document_not_found(&query.session_key))?
        };

        self.exporter.fetch(&filename).await.map_err(|err| {
            if err.is_not_found() {
                document_not_found(&query.session_key)
            } else {
                DomainError::new(ErrorCode::ExportFailed, err.to_string())
            }
        })
    }
}

fn document_not_found(key: &SessionKey) -> DomainError {
    DomainError::new(ErrorCode::DocumentNotFound, "No exported document for this session")
        .with_detail("session_id", key.as_str())
}
