//! State machine trait for lifecycle enums.
//!
//! Gives every enumerated lifecycle (the conversation state being the main one)
//! a single place that declares which transitions are legal.

use super::{DomainError, ErrorCode};

/// Trait for enums that represent state machines.
///
/// Implementors declare the transition table; `transition_to` and
/// `is_terminal` come for free.
///
/// ```ignore
/// impl StateMachine for ConversationState {
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Start => vec![Start, Configuring],
///             Finalized => vec![],
///             // ...
///         }
///     }
/// }
///
/// session.state = session.state.transition_to(ConversationState::Configuring)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns all valid target states from the current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Returns true if a transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    /// Performs the transition, returning an error if the table forbids it.
    fn transition_to(&self, target: Self) -> Result<Self, DomainError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if the current state is terminal (no outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
