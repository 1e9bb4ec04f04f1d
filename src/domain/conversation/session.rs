//! Session aggregate - one quoting conversation.
//!
//! Holds the dialogue state, the configuration being edited, the category
//! picked in the substitution sub-flow and the quote ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::configuration::Configuration;
use crate::domain::foundation::{DomainError, ErrorCode, SessionKey, StateMachine};
use crate::domain::quote::QuoteLedger;

use super::state::ConversationState;

/// Session aggregate.
///
/// # Invariants
///
/// - `configuration` is `Some` whenever `state.has_configuration()`
/// - `selected_category` is only meaningful in `ChooseComponent`
/// - `state` only changes through [`Session::transition_to`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    key: SessionKey,
    state: ConversationState,
    configuration: Option<Configuration>,
    selected_category: Option<String>,
    ledger: QuoteLedger,
    exported_document: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Session {
    /// Creates an empty session in `Start`.
    pub fn new(key: SessionKey) -> Self {
        let now = Utc::now();
        Self {
            key,
            state: ConversationState::Start,
            configuration: None,
            selected_category: None,
            ledger: QuoteLedger::new(),
            exported_document: None,
            created_at: now,
            updated_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn key(&self) -> &SessionKey {
        &self.key
    }

    pub fn state(&self) -> ConversationState {
        self.state
    }

    pub fn configuration(&self) -> Option<&Configuration> {
        self.configuration.as_ref()
    }

    /// The in-progress configuration, required by the editing states.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if no configuration is in progress
    pub fn active_configuration(&self) -> Result<&Configuration, DomainError> {
        self.configuration
            .as_ref()
            .ok_or_else(|| no_configuration(self.state))
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    pub fn ledger(&self) -> &QuoteLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut QuoteLedger {
        self.updated_at = Utc::now();
        &mut self.ledger
    }

    /// File name of the last exported quote document.
    pub fn exported_document(&self) -> Option<&str> {
        self.exported_document.as_deref()
    }

    pub fn is_finalized(&self) -> bool {
        self.state == ConversationState::Finalized
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Moves to `target` if the state table allows it.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if the move is not in the table
    pub fn transition_to(&mut self, target: ConversationState) -> Result<(), DomainError> {
        self.state = self.state.transition_to(target)?;
        if target != ConversationState::ChooseComponent {
            self.selected_category = None;
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Installs a fresh in-progress configuration.
    pub fn begin_configuration(&mut self, configuration: Configuration) {
        self.configuration = Some(configuration);
        self.updated_at = Utc::now();
    }

    /// Mutable access to the in-progress configuration.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if no configuration is in progress
    pub fn configuration_mut(&mut self) -> Result<&mut Configuration, DomainError> {
        self.updated_at = Utc::now();
        self.configuration
            .as_mut()
            .ok_or_else(|| no_configuration(self.state))
    }

    /// Moves the in-progress configuration into the ledger.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if no configuration is in progress
    pub fn confirm_configuration(&mut self) -> Result<usize, DomainError> {
        let configuration = self
            .configuration
            .take()
            .ok_or_else(|| no_configuration(self.state))?;
        self.ledger.append(configuration);
        self.updated_at = Utc::now();
        Ok(self.ledger.len())
    }

    /// Remembers the category chosen in the substitution sub-flow.
    pub fn select_category(&mut self, category_key: impl Into<String>) {
        self.selected_category = Some(category_key.into());
    }

    /// Records the file name produced by the last export.
    pub fn record_export(&mut self, filename: impl Into<String>) {
        self.exported_document = Some(filename.into());
        self.updated_at = Utc::now();
    }
}

fn no_configuration(state: ConversationState) -> DomainError {
    DomainError::new(
        ErrorCode::InvalidStateTransition,
        "No configuration in progress",
    )
    .with_detail("state", state.as_str())
}
