//! ConversationStateMachine - Interprets one chat message against a session.
//!
//! Every state has one handler. A handler either returns a reply (possibly
//! after moving the session) or a `DomainError`; errors are turned into user
//! text here and never leave the machine. State is only mutated on the
//! success path, so a failed step leaves the session untouched. Replies in
//! closed-menu states always carry that state's menu.

use std::sync::Arc;

use crate::domain::catalog::normalize;
use crate::domain::configuration::{Configuration, Dimensions};
use crate::domain::conversation::command::{is_back, Answer, EditCommand, NextStep, ReviewCommand};
use crate::domain::conversation::{prompts, ChatReply, ConversationState, ExportInfo, MenuOption, Session};
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::ports::{CatalogProvider, QuoteExporter};

/// Default prefix of document download links.
pub const DEFAULT_DOWNLOAD_BASE: &str = "/quotes";

/// Drives the quoting dialogue.
pub struct ConversationStateMachine {
    catalog: Arc<dyn CatalogProvider>,
    exporter: Arc<dyn QuoteExporter>,
    download_base: String,
}

impl ConversationStateMachine {
    pub fn new(catalog: Arc<dyn CatalogProvider>, exporter: Arc<dyn QuoteExporter>) -> Self {
        Self {
            catalog,
            exporter,
            download_base: DEFAULT_DOWNLOAD_BASE.to_string(),
        }
    }

    /// Prefix for `download_url`; the link is `{base}/{session}/document`.
    pub fn with_download_base(mut self, base: impl Into<String>) -> Self {
        self.download_base = base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn download_url(&self, session: &Session) -> String {
        format!("{}/{}/document", self.download_base, session.key())
    }

    /// Processes one message. Never fails: every outcome is a reply.
    pub async fn advance(&self, session: &mut Session, message: &str) -> ChatReply {
        let from = session.state();
        let input = message.trim();

        let outcome = match from {
            ConversationState::Start => self.on_start(session, input).await,
            ConversationState::Configuring => on_configuring(session, input),
            ConversationState::EditDimension => on_edit_dimension(session, input),
            ConversationState::ChooseColor => on_choose_color(session, input),
            ConversationState::ChooseMaterial => on_choose_material(session, input),
            ConversationState::ChooseComponentCategory => self.on_choose_category(session, input).await,
            ConversationState::ChooseComponent => self.on_choose_component(session, input).await,
            ConversationState::ConfirmItem => on_confirm_item(session, input),
            ConversationState::ItemAddedMenu => on_item_added(session, input),
            ConversationState::FinalReview => self.on_final_review(session, input).await,
            ConversationState::Finalized => Ok(ChatReply::unrecognized()),
        };

        let mut reply = outcome.unwrap_or_else(|err| {
            if err.code.is_not_found() || err.code == ErrorCode::InvalidDimensions {
                tracing::debug!(session_id = %session.key(), state = from.as_str(), error = %err, "Input rejected");
            } else {
                tracing::warn!(session_id = %session.key(), state = from.as_str(), error = %err, "Conversation step failed");
            }
            reply_for_error(&err)
        });
        if reply.options.is_none() {
            reply.options = self.menu_for(session).await;
        }

        let to = session.state();
        if to != from {
            tracing::info!(
                session_id = %session.key(),
                from = from.as_str(),
                to = to.as_str(),
                "Conversation state changed"
            );
        }
        reply
    }

    /// Menu of the state the session is in, `None` for free-text states.
    async fn menu_for(&self, session: &Session) -> Option<Vec<MenuOption>> {
        match session.state() {
            ConversationState::Configuring => Some(prompts::edit_options()),
            ConversationState::ChooseComponentCategory => session
                .configuration()
                .map(|c| prompts::category_options(&c.category_keys())),
            ConversationState::ChooseComponent => {
                let category = session.selected_category()?;
                let catalog = self.catalog.substitution_catalog().await.ok()?;
                catalog.options(category).map(prompts::component_options)
            }
            ConversationState::ConfirmItem => Some(prompts::confirm_options()),
            ConversationState::ItemAddedMenu => Some(prompts::item_added_options()),
            ConversationState::FinalReview => Some(prompts::review_options()),
            ConversationState::Start
            | ConversationState::EditDimension
            | ConversationState::ChooseColor
            | ConversationState::ChooseMaterial
            | ConversationState::Finalized => None,
        }
    }

    async fn on_start(&self, session: &mut Session, input: &str) -> Result<ChatReply, DomainError> {
        if input.is_empty() {
            return Err(furniture_not_found(input));
        }

        let template = self
            .catalog
            .find_furniture_by_name(input)
            .await?
            .ok_or_else(|| furniture_not_found(input))?;
        let defaults = self.catalog.default_components_for(template.id).await?;
        let configuration = Configuration::new(template, defaults);

        let reply = prompts::edit_menu("", &configuration);
        session.transition_to(ConversationState::Configuring)?;
        session.begin_configuration(configuration);
        Ok(reply)
    }

    async fn on_choose_category(&self, session: &mut Session, input: &str) -> Result<ChatReply, DomainError> {
        if is_back(input) {
            let reply = prompts::edit_menu("Voltando ao menu principal...\n\n", session.active_configuration()?);
            session.transition_to(ConversationState::Configuring)?;
            return Ok(reply);
        }

        let key = normalize(input);
        let catalog = self.catalog.substitution_catalog().await?;
        let options = catalog.options(&key).ok_or_else(|| {
            DomainError::new(ErrorCode::CategoryNotFound, "Unknown component category")
                .with_detail("category", key.clone())
        })?;

        let reply = prompts::option_menu(options);
        session.transition_to(ConversationState::ChooseComponent)?;
        session.select_category(key);
        Ok(reply)
    }

    async fn on_choose_component(&self, session: &mut Session, input: &str) -> Result<ChatReply, DomainError> {
        let category = session
            .selected_category()
            .map(str::to_owned)
            .ok_or_else(|| DomainError::new(ErrorCode::InvalidStateTransition, "No category selected"))?;

        let catalog = self.catalog.substitution_catalog().await?;
        let option = catalog.find_option(&category, input).ok_or_else(|| {
            DomainError::new(ErrorCode::OptionNotFound, "Unknown component option")
                .with_detail("category", category.clone())
                .with_detail("option_id", input)
        })?;

        session.configuration_mut()?.select_component(&category, option);
        session.transition_to(ConversationState::Configuring)?;
        Ok(prompts::edit_menu("Componente atualizado.\n\n", session.active_configuration()?))
    }

    async fn on_final_review(&self, session: &mut Session, input: &str) -> Result<ChatReply, DomainError> {
        let Some(command) = ReviewCommand::parse(input) else {
            return Ok(ChatReply::unrecognized());
        };

        match command {
            ReviewCommand::AddMore => {
                session.transition_to(ConversationState::Start)?;
                Ok(ChatReply::text(prompts::ASK_ANOTHER_FURNITURE))
            }
            ReviewCommand::Remove if session.ledger().is_empty() => {
                Ok(ChatReply::text(prompts::NOTHING_TO_REMOVE))
            }
            ReviewCommand::Remove => Ok(prompts::removal_menu(session.ledger())),
            ReviewCommand::Cancel => Ok(prompts::review_list("", session.ledger(), "")),
            ReviewCommand::Pick(number) => remove_item(session, number),
            ReviewCommand::Confirm => self.finalize(session).await,
        }
    }

    async fn finalize(&self, session: &mut Session) -> Result<ChatReply, DomainError> {
        let exported = self
            .exporter
            .export(session.ledger().entries(), session.key())
            .await
            .map_err(|err| DomainError::new(ErrorCode::ExportFailed, err.to_string()))?;

        let text = prompts::finalized(session.ledger().len(), session.ledger().grand_total());
        session.transition_to(ConversationState::Finalized)?;
        session.record_export(exported.filename.clone());

        Ok(ChatReply::exported(
            text,
            ExportInfo {
                filename: exported.filename,
                download_url: self.download_url(session),
            },
        ))
    }
}

fn on_configuring(session: &mut Session, input: &str) -> Result<ChatReply, DomainError> {
    let Some(command) = EditCommand::parse(input) else {
        return Ok(ChatReply::unrecognized());
    };

    match command {
        EditCommand::Dimensions => {
            session.transition_to(ConversationState::EditDimension)?;
            Ok(ChatReply::text(prompts::DIMENSIONS_PROMPT))
        }
        EditCommand::Color => {
            session.transition_to(ConversationState::ChooseColor)?;
            Ok(prompts::color_menu())
        }
        EditCommand::Material => {
            session.transition_to(ConversationState::ChooseMaterial)?;
            Ok(prompts::material_menu())
        }
        EditCommand::Components => {
            let keys = session.active_configuration()?.category_keys();
            session.transition_to(ConversationState::ChooseComponentCategory)?;
            Ok(prompts::category_menu(&keys))
        }
        EditCommand::Confirm => {
            let reply = prompts::confirm_item(session.active_configuration()?);
            session.transition_to(ConversationState::ConfirmItem)?;
            Ok(reply)
        }
    }
}

fn on_edit_dimension(session: &mut Session, input: &str) -> Result<ChatReply, DomainError> {
    let dimensions: Dimensions = input.parse().map_err(|e: ValidationError| {
        DomainError::new(ErrorCode::InvalidDimensions, e.to_string())
    })?;

    session.configuration_mut()?.set_dimensions(dimensions);
    session.transition_to(ConversationState::Configuring)?;
    Ok(prompts::edit_menu("Dimensao atualizada.\n\n", session.active_configuration()?))
}

fn on_choose_color(session: &mut Session, input: &str) -> Result<ChatReply, DomainError> {
    if input.is_empty() {
        return Ok(ChatReply::unrecognized());
    }
    session.configuration_mut()?.set_color(prompts::capitalize(input));
    session.transition_to(ConversationState::Configuring)?;
    Ok(prompts::edit_menu("", session.active_configuration()?))
}

fn on_choose_material(session: &mut Session, input: &str) -> Result<ChatReply, DomainError> {
    if input.is_empty() {
        return Ok(ChatReply::unrecognized());
    }
    session.configuration_mut()?.set_material(input.to_uppercase());
    session.transition_to(ConversationState::Configuring)?;
    Ok(prompts::edit_menu("", session.active_configuration()?))
}

fn on_confirm_item(session: &mut Session, input: &str) -> Result<ChatReply, DomainError> {
    match Answer::parse(input) {
        Some(Answer::Yes) => {
            let count = session.confirm_configuration()?;
            session.transition_to(ConversationState::ItemAddedMenu)?;
            Ok(prompts::item_added(count))
        }
        Some(Answer::No) => {
            session.transition_to(ConversationState::Configuring)?;
            Ok(prompts::edit_menu("Voltando para edicao...\n\n", session.active_configuration()?))
        }
        None => Ok(ChatReply::unrecognized()),
    }
}

fn on_item_added(session: &mut Session, input: &str) -> Result<ChatReply, DomainError> {
    match NextStep::parse(input) {
        Some(NextStep::AddMore) => {
            session.transition_to(ConversationState::Start)?;
            Ok(ChatReply::text(prompts::ASK_FURNITURE))
        }
        Some(NextStep::Review) => {
            session.transition_to(ConversationState::FinalReview)?;
            Ok(prompts::review_list("", session.ledger(), "\n\nO que deseja fazer?"))
        }
        Some(NextStep::Finalize) => {
            session.transition_to(ConversationState::FinalReview)?;
            Ok(prompts::review_confirmation(session.ledger()))
        }
        None => Ok(ChatReply::unrecognized()),
    }
}

/// Removes the item at 1-based `number`.
fn remove_item(session: &mut Session, number: usize) -> Result<ChatReply, DomainError> {
    let index = number.checked_sub(1).ok_or_else(|| {
        DomainError::new(ErrorCode::ItemNotFound, "Quote item not found").with_detail("number", "0")
    })?;
    let removed = session.ledger_mut().remove(index)?;

    if session.ledger().is_empty() {
        session.transition_to(ConversationState::Start)?;
        return Ok(ChatReply::text(prompts::LEDGER_EMPTIED));
    }

    Ok(prompts::review_list(
        &format!("{} removido.\n\n", removed.name()),
        session.ledger(),
        "",
    ))
}

fn furniture_not_found(query: &str) -> DomainError {
    DomainError::new(ErrorCode::FurnitureNotFound, "No furniture matches the query")
        .with_detail("query", query)
}

/// User text for a failed step.
fn reply_for_error(err: &DomainError) -> ChatReply {
    match err.code {
        ErrorCode::FurnitureNotFound => ChatReply::text(prompts::FURNITURE_NOT_FOUND),
        ErrorCode::InvalidDimensions | ErrorCode::ValidationFailed => {
            ChatReply::text(prompts::INVALID_DIMENSIONS)
        }
        ErrorCode::CategoryNotFound => ChatReply::text(prompts::INVALID_CATEGORY),
        ErrorCode::OptionNotFound => ChatReply::text(prompts::INVALID_OPTION),
        ErrorCode::ItemNotFound => ChatReply::text(prompts::INVALID_ITEM),
        ErrorCode::CatalogUnavailable => ChatReply::text(prompts::CATALOG_UNAVAILABLE),
        ErrorCode::ExportFailed => prompts::export_failed(&err.message),
        _ => ChatReply::unrecognized(),
    }
}
