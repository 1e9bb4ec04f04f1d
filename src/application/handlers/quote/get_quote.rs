//! GetQuoteHandler - Query handler for a session's quote.

use std::sync::Arc;

use crate::domain::configuration::Configuration;
use crate::domain::conversation::ConversationState;
use crate::domain::foundation::{DomainError, SessionKey};
use crate::domain::quote::QuoteLedger;
use crate::ports::SessionStore;

use super::existing_session;

/// Query for a session's quote.
#[derive(Debug, Clone)]
pub struct GetQuoteQuery {
    pub session_key: SessionKey,
}

/// Point-in-time copy of a session's quote.
#[derive(Debug, Clone)]
pub struct QuoteSnapshot {
    pub session_key: SessionKey,
    pub state: ConversationState,
    pub ledger: QuoteLedger,
    pub in_progress: Option<Configuration>,
    pub exported_document: Option<String>,
}

impl QuoteSnapshot {
    pub fn grand_total(&self) -> f64 {
        self.ledger.grand_total()
    }

    pub fn is_finalized(&self) -> bool {
        self.state == ConversationState::Finalized
    }
}

/// Handler for quote queries.
pub struct GetQuoteHandler {
    sessions: Arc<dyn SessionStore>,
}

impl GetQuoteHandler {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn handle(&self, query: GetQuoteQuery) -> Result<QuoteSnapshot, DomainError> {
        let handle = existing_session(self.sessions.as_ref(), &query.session_key).await?;
        let session = handle.lock().await;

        Ok(QuoteSnapshot {
            session_key: session.key().clone(),
            state: session.state(),
            ledger: session.ledger().clone(),
            in_progress: session.configuration().cloned(),
            exported_document: session.exported_document().map(str::to_owned),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::quote::test_support::store_with_two_items;
    use crate::domain::foundation::ErrorCode;

    #[tokio::test]
    async fn snapshot_copies_ledger_and_state() {
        let store = store_with_two_items("a").await;
        let handler = GetQuoteHandler::new(store);

        let snapshot = handler
            .handle(GetQuoteQuery {
                session_key: SessionKey::new("a"),
            })
            .await
            .unwrap();

        assert_eq!(snapshot.state, ConversationState::FinalReview);
        assert_eq!(snapshot.ledger.len(), 2);
        assert!(snapshot.in_progress.is_none());
        assert!(!snapshot.is_finalized());
        // wardrobe 1800 + 504, rack 650 + 242
        assert!((snapshot.grand_total() - 3196.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let store = store_with_two_items("a").await;
        let handler = GetQuoteHandler::new(store);

        let err = handler
            .handle(GetQuoteQuery {
                session_key: SessionKey::new("b"),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::SessionNotFound);
    }
}
