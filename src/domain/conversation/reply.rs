//! Reply envelope returned for every chat message.

use serde::{Deserialize, Serialize};

/// One selectable entry of a reply menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuOption {
    pub id: String,
    pub label: String,
}

impl MenuOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Metadata of a freshly exported quote document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportInfo {
    pub filename: String,
    pub download_url: String,
}

/// What the machine answers for one message.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChatReply {
    pub text: String,
    pub options: Option<Vec<MenuOption>>,
    pub export: Option<ExportInfo>,
}

impl ChatReply {
    /// Plain text reply without a menu.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Text reply with a menu of options.
    pub fn with_options(text: impl Into<String>, options: Vec<MenuOption>) -> Self {
        Self {
            text: text.into(),
            options: Some(options),
            export: None,
        }
    }

    /// Reply carrying export metadata.
    pub fn exported(text: impl Into<String>, export: ExportInfo) -> Self {
        Self {
            text: text.into(),
            options: None,
            export: Some(export),
        }
    }

    /// Catch-all reply for input no rule matched.
    pub fn unrecognized() -> Self {
        Self::text("Nao entendi. Tente novamente.")
    }

    pub fn is_export(&self) -> bool {
        self.export.is_some()
    }

    /// Ids of the offered options, empty when there is no menu.
    pub fn option_ids(&self) -> Vec<&str> {
        self.options
            .iter()
            .flatten()
            .map(|o| o.id.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_reply_has_no_menu_or_export() {
        let reply = ChatReply::text("ola");
        assert_eq!(reply.text, "ola");
        assert!(reply.options.is_none());
        assert!(!reply.is_export());
        assert!(reply.option_ids().is_empty());
    }

    #[test]
    fn option_ids_preserve_order() {
        let reply = ChatReply::with_options(
            "menu",
            vec![MenuOption::new("sim", "Sim"), MenuOption::new("nao", "Nao")],
        );
        assert_eq!(reply.option_ids(), vec!["sim", "nao"]);
    }

    #[test]
    fn exported_reply_carries_metadata() {
        let reply = ChatReply::exported(
            "ok",
            ExportInfo {
                filename: "orcamento.md".to_string(),
                download_url: "/quotes/s/document".to_string(),
            },
        );
        assert!(reply.is_export());
    }
}
