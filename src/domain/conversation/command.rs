//! Closed-menu commands recognized by the conversation.
//!
//! Numeric commands are matched exactly after trimming; keyword commands
//! are matched case-insensitively.

/// Main edit menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditCommand {
    Dimensions,
    Color,
    Material,
    Components,
    Confirm,
}

impl EditCommand {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Dimensions),
            "2" => Some(Self::Color),
            "3" => Some(Self::Material),
            "4" => Some(Self::Components),
            "5" => Some(Self::Confirm),
            _ => None,
        }
    }
}

/// Yes/no answer to the confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "sim" | "yes" => Some(Self::Yes),
            "nao" | "não" | "no" => Some(Self::No),
            _ => None,
        }
    }
}

/// Commands after an item was added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStep {
    AddMore,
    Review,
    Finalize,
}

impl NextStep {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "mais" => Some(Self::AddMore),
            "revisar" => Some(Self::Review),
            "finalizar" => Some(Self::Finalize),
            _ => None,
        }
    }
}

/// Commands of the final review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewCommand {
    AddMore,
    Remove,
    Confirm,
    /// `0` in the removal list.
    Cancel,
    /// 1-based ledger position picked from the removal list.
    Pick(usize),
}

impl ReviewCommand {
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim().to_lowercase();
        match input.as_str() {
            "mais" => Some(Self::AddMore),
            "remover" => Some(Self::Remove),
            "confirmar" | "finalizar" => Some(Self::Confirm),
            "0" => Some(Self::Cancel),
            digits if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) => {
                digits.parse().ok().map(Self::Pick)
            }
            _ => None,
        }
    }
}

/// `0` returns from the component category list.
pub fn is_back(input: &str) -> bool {
    input.trim() == "0"
}
