//! Conversation state machine.
//!
//! Defines the dialogue states of a quoting session and the legal moves
//! between them.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Where a quoting conversation currently stands.
///
/// - `Start`: waiting for a furniture name
/// - `Configuring`: main edit menu for the in-progress item
/// - `EditDimension` / `ChooseColor` / `ChooseMaterial`: free-text entry
/// - `ChooseComponentCategory` → `ChooseComponent`: component substitution
/// - `ConfirmItem`: yes/no on adding the item to the quote
/// - `ItemAddedMenu`: add more, review or finalize
/// - `FinalReview`: review, remove items, confirm
/// - `Finalized`: document exported, nothing left to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    #[default]
    Start,
    Configuring,
    EditDimension,
    ChooseColor,
    ChooseMaterial,
    ChooseComponentCategory,
    ChooseComponent,
    ConfirmItem,
    ItemAddedMenu,
    FinalReview,
    Finalized,
}

impl ConversationState {
    /// True while an in-progress configuration must exist.
    pub fn has_configuration(&self) -> bool {
        use ConversationState::*;
        matches!(
            self,
            Configuring
                | EditDimension
                | ChooseColor
                | ChooseMaterial
                | ChooseComponentCategory
                | ChooseComponent
                | ConfirmItem
        )
    }

    /// True for states that accept free text instead of a closed menu.
    pub fn accepts_free_text(&self) -> bool {
        use ConversationState::*;
        matches!(self, Start | EditDimension | ChooseColor | ChooseMaterial)
    }

    /// Stable snake_case name, as serialized.
    pub fn as_str(&self) -> &'static str {
        use ConversationState::*;
        match self {
            Start => "start",
            Configuring => "configuring",
            EditDimension => "edit_dimension",
            ChooseColor => "choose_color",
            ChooseMaterial => "choose_material",
            ChooseComponentCategory => "choose_component_category",
            ChooseComponent => "choose_component",
            ConfirmItem => "confirm_item",
            ItemAddedMenu => "item_added_menu",
            FinalReview => "final_review",
            Finalized => "finalized",
        }
    }
}

impl StateMachine for ConversationState {
    fn valid_transitions(&self) -> Vec<Self> {
        use ConversationState::*;
        match self {
            Start => vec![Configuring],
            Configuring => vec![
                EditDimension,
                ChooseColor,
                ChooseMaterial,
                ChooseComponentCategory,
                ConfirmItem,
            ],
            EditDimension | ChooseColor | ChooseMaterial | ChooseComponent => vec![Configuring],
            ChooseComponentCategory => vec![Configuring, ChooseComponent],
            ConfirmItem => vec![Configuring, ItemAddedMenu],
            ItemAddedMenu => vec![Start, FinalReview],
            FinalReview => vec![Start, Finalized],
            Finalized => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ConversationState; 11] = [
        ConversationState::Start,
        ConversationState::Configuring,
        ConversationState::EditDimension,
        ConversationState::ChooseColor,
        ConversationState::ChooseMaterial,
        ConversationState::ChooseComponentCategory,
        ConversationState::ChooseComponent,
        ConversationState::ConfirmItem,
        ConversationState::ItemAddedMenu,
        ConversationState::FinalReview,
        ConversationState::Finalized,
    ];

    mod state_definition {
        use super::*;

        #[test]
        fn default_state_is_start() {
            assert_eq!(ConversationState::default(), ConversationState::Start);
        }

        #[test]
        fn serializes_to_snake_case() {
            let json = serde_json::to_string(&ConversationState::ChooseComponentCategory).unwrap();
            assert_eq!(json, "\"choose_component_category\"");
        }

        #[test]
        fn as_str_matches_serialized_name() {
            for state in ALL {
                let json = serde_json::to_string(&state).unwrap();
                assert_eq!(json, format!("\"{}\"", state.as_str()));
            }
        }
    }

    mod state_machine_trait {
        use super::*;

        #[test]
        fn only_finalized_is_terminal() {
            for state in ALL {
                assert_eq!(state.is_terminal(), state == ConversationState::Finalized);
            }
        }

        #[test]
        fn start_only_moves_to_configuring() {
            assert!(ConversationState::Start.can_transition_to(&ConversationState::Configuring));
            assert!(!ConversationState::Start.can_transition_to(&ConversationState::FinalReview));
        }

        #[test]
        fn confirm_item_can_go_back_or_forward() {
            let state = ConversationState::ConfirmItem;
            assert!(state.can_transition_to(&ConversationState::Configuring));
            assert!(state.can_transition_to(&ConversationState::ItemAddedMenu));
            assert!(!state.can_transition_to(&ConversationState::Finalized));
        }

        #[test]
        fn final_review_can_restart_or_finalize() {
            let state = ConversationState::FinalReview;
            assert!(state.can_transition_to(&ConversationState::Start));
            assert!(state.can_transition_to(&ConversationState::Finalized));
        }

        #[test]
        fn every_configuring_substate_returns_to_configuring() {
            for state in ALL.iter().filter(|s| s.has_configuration()) {
                if *state != ConversationState::Configuring {
                    assert!(
                        state.can_transition_to(&ConversationState::Configuring),
                        "{:?} should return to Configuring",
                        state
                    );
                }
            }
        }
    }

    #[test]
    fn free_text_states_are_the_open_prompts() {
        let free: Vec<_> = ALL.iter().filter(|s| s.accepts_free_text()).collect();
        assert_eq!(free.len(), 4);
        assert!(!ConversationState::Configuring.accepts_free_text());
    }
}
