//! Quote handlers - direct access to a session's ledger outside the chat.
//!
//! Items are addressed by 0-based ledger index. Edits are refused once the
//! quote is finalized.

mod download_document;
mod edit_item;
mod get_quote;
mod remove_item;

pub use download_document::{DownloadDocumentHandler, DownloadDocumentQuery};
pub use edit_item::{
    ComponentOptions, EditItemDimensionsCommand, EditItemDimensionsHandler, ListComponentOptionsHandler,
    ListComponentOptionsQuery, SwapItemComponentCommand, SwapItemComponentHandler,
};
pub use get_quote::{GetQuoteHandler, GetQuoteQuery, QuoteSnapshot};
pub use remove_item::{RemoveItemCommand, RemoveItemHandler, RemoveItemResult};

use crate::domain::conversation::Session;
use crate::domain::foundation::{DomainError, ErrorCode, SessionKey};
use crate::ports::{SessionHandle, SessionStore};

async fn existing_session(
    sessions: &dyn SessionStore,
    key: &SessionKey,
) -> Result<SessionHandle, DomainError> {
    sessions.get(key).await?.ok_or_else(|| {
        DomainError::new(ErrorCode::SessionNotFound, "Session not found")
            .with_detail("session_id", key.as_str())
    })
}

fn ensure_editable(session: &Session) -> Result<(), DomainError> {
    if session.is_finalized() {
        return Err(DomainError::new(
            ErrorCode::InvalidStateTransition,
            "Quote is finalized and can no longer change",
        )
        .with_detail("session_id", session.key().as_str()));
    }
    Ok(())
}
