//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, error types, money formatting and the state machine
//! trait that form the vocabulary of the quoting domain.

mod errors;
mod ids;
mod money;
mod state_machine;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{FurnitureId, SessionKey, DEFAULT_SESSION_KEY};
pub use money::{format_brl, format_reais};
pub use state_machine::StateMachine;
