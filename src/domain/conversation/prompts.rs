//! User-facing texts and menus of the quoting conversation.

use once_cell::sync::Lazy;

use crate::domain::catalog::ComponentOption;
use crate::domain::configuration::Configuration;
use crate::domain::foundation::format_reais;
use crate::domain::quote::QuoteLedger;

use super::reply::{ChatReply, MenuOption};

pub const FURNITURE_NOT_FOUND: &str = "Movel nao encontrado. Tente: Guarda-roupa, Cozinha, Rack...";
pub const DIMENSIONS_PROMPT: &str = "Digite as dimensoes no formato:\nL x A x P\nExemplo: 800 x 700 x 600";
pub const INVALID_DIMENSIONS: &str = "Formato invalido. Use: 800 x 700 x 600";
pub const INVALID_CATEGORY: &str = "Categoria invalida. Tente novamente.";
pub const INVALID_OPTION: &str = "Opcao invalida. Tente novamente.";
pub const INVALID_ITEM: &str = "Numero de movel invalido. Tente novamente.";
pub const NOTHING_TO_REMOVE: &str = "Nao ha moveis para remover.";
pub const CATALOG_UNAVAILABLE: &str = "Catalogo indisponivel no momento. Tente novamente.";
pub const ASK_FURNITURE: &str = "Perfeito! Qual movel deseja orcar?\nExemplos: Guarda-roupa, Cozinha, Rack, Estante...";
pub const ASK_ANOTHER_FURNITURE: &str = "Qual movel deseja adicionar ao orcamento?";
pub const LEDGER_EMPTIED: &str =
    "Movel removido. Nao ha mais moveis no orcamento. Vamos comecar um novo orcamento?";

static EDIT_MENU: Lazy<Vec<MenuOption>> = Lazy::new(|| {
    vec![
        MenuOption::new("1", "Dimensao"),
        MenuOption::new("2", "Cor"),
        MenuOption::new("3", "Material"),
        MenuOption::new("4", "Componentes"),
        MenuOption::new("5", "Confirmar"),
    ]
});

static COLOR_PRESETS: Lazy<Vec<MenuOption>> = Lazy::new(|| {
    vec![
        MenuOption::new("branco", "Branco"),
        MenuOption::new("preto", "Preto"),
        MenuOption::new("amadeirado", "Amadeirado"),
    ]
});

static MATERIAL_PRESETS: Lazy<Vec<MenuOption>> = Lazy::new(|| {
    vec![
        MenuOption::new("mdp", "MDP"),
        MenuOption::new("mdf", "MDF"),
        MenuOption::new("aluminio", "Aluminio"),
    ]
});

/// Configuration summary followed by the main edit menu.
pub fn edit_menu(prefix: &str, configuration: &Configuration) -> ChatReply {
    ChatReply::with_options(
        format!("{}{}", prefix, configuration_summary(configuration)),
        edit_options(),
    )
}

pub fn edit_options() -> Vec<MenuOption> {
    EDIT_MENU.clone()
}

pub fn color_menu() -> ChatReply {
    ChatReply::with_options("Escolha a cor:", COLOR_PRESETS.clone())
}

pub fn material_menu() -> ChatReply {
    ChatReply::with_options("Escolha o material:", MATERIAL_PRESETS.clone())
}

/// Category list, sorted, with a trailing `0 Voltar`.
pub fn category_menu<'a>(category_keys: impl IntoIterator<Item = &'a String>) -> ChatReply {
    ChatReply::with_options("Qual componente deseja alterar?", category_options(category_keys))
}

pub fn category_options<'a>(category_keys: impl IntoIterator<Item = &'a String>) -> Vec<MenuOption> {
    let mut options: Vec<MenuOption> = category_keys
        .into_iter()
        .map(|key| MenuOption::new(key.as_str(), capitalize(key)))
        .collect();
    options.push(MenuOption::new("0", "Voltar"));
    options
}

pub fn option_menu(options: &[ComponentOption]) -> ChatReply {
    ChatReply::with_options("Escolha o novo componente:", component_options(options))
}

pub fn component_options(options: &[ComponentOption]) -> Vec<MenuOption> {
    options
        .iter()
        .map(|o| MenuOption::new(o.id.as_str(), format!("{} ({})", o.name, format_reais(o.unit_price))))
        .collect()
}

pub fn confirm_item(configuration: &Configuration) -> ChatReply {
    ChatReply::with_options(
        format!(
            "Movel configurado com sucesso.\n{}\nValor: {}\nDeseja confirmar este movel no orcamento?",
            configuration.name(),
            format_reais(configuration.total())
        ),
        confirm_options(),
    )
}

pub fn confirm_options() -> Vec<MenuOption> {
    vec![
        MenuOption::new("sim", "Sim, adicionar ao orcamento"),
        MenuOption::new("nao", "Nao, continuar editando"),
    ]
}

pub fn item_added(count: usize) -> ChatReply {
    ChatReply::with_options(
        format!(
            "Movel adicionado ao orcamento.\nVoce tem {} movel(is) no orcamento.\nO que deseja fazer agora?",
            count
        ),
        item_added_options(),
    )
}

pub fn item_added_options() -> Vec<MenuOption> {
    vec![
        MenuOption::new("mais", "Orcar mais moveis"),
        MenuOption::new("revisar", "Revisar orcamento"),
        MenuOption::new("finalizar", "Finalizar e gerar PDF"),
    ]
}

/// Ledger table with the list-view actions.
pub fn review_list(prefix: &str, ledger: &QuoteLedger, suffix: &str) -> ChatReply {
    ChatReply::with_options(format!("{}{}{}", prefix, ledger.summary(), suffix), review_options())
}

pub fn review_options() -> Vec<MenuOption> {
    vec![
        MenuOption::new("mais", "Adicionar mais moveis"),
        MenuOption::new("remover", "Remover movel"),
        MenuOption::new("finalizar", "Finalizar e gerar PDF"),
    ]
}

/// Ledger table with the confirmation-view actions.
pub fn review_confirmation(ledger: &QuoteLedger) -> ChatReply {
    ChatReply::with_options(
        format!("{}\n\nConfirma a finalizacao do orcamento?", ledger.summary()),
        vec![
            MenuOption::new("confirmar", "Sim, gerar PDF"),
            MenuOption::new("mais", "Adicionar mais moveis"),
            MenuOption::new("remover", "Remover movel"),
        ],
    )
}

/// Numbered ledger entries plus `0 Cancelar`.
pub fn removal_menu(ledger: &QuoteLedger) -> ChatReply {
    let mut options: Vec<MenuOption> = ledger
        .entries()
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let number = i + 1;
            MenuOption::new(
                number.to_string(),
                format!("{}. {} - {}", number, c.name(), format_reais(c.total())),
            )
        })
        .collect();
    options.push(MenuOption::new("0", "Cancelar"));
    ChatReply::with_options("Qual movel deseja remover?", options)
}

pub fn finalized(count: usize, total: f64) -> String {
    format!(
        "Orcamento finalizado com sucesso.\nTotal de moveis: {}\nValor total: {}\nSeu PDF esta pronto para download.",
        count,
        format_reais(total)
    )
}

pub fn export_failed(message: &str) -> ChatReply {
    ChatReply::text(format!("Erro ao gerar PDF: {}", message))
}

/// Multi-line description of an in-progress configuration.
pub fn configuration_summary(configuration: &Configuration) -> String {
    let dims = configuration.dimensions();
    let mut text = format!(
        "{}\n\nDimensao: {} x {} x {} mm\nArea: {:.2} m2\nMaterial: {}\nCor: {}\n\nPreco movel: {}\n",
        configuration.name(),
        dims.width_mm as i64,
        dims.height_mm as i64,
        dims.depth_mm as i64,
        configuration.current_area(),
        configuration.material(),
        configuration.color(),
        format_reais(configuration.current_price()),
    );

    if configuration.components().is_empty() {
        text.push_str("Componentes: nenhum configurado.\n");
    } else {
        text.push_str("Componentes:\n");
        for component in configuration.components().iter() {
            text.push_str(&format!(
                "- {}x {} ({})\n",
                component.quantity,
                component.name,
                format_reais(component.line_total())
            ));
        }
    }

    text.push_str(&format!("\nTotal: {}", format_reais(configuration.total())));
    text
}

/// First character upper-cased, the rest lower-cased.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
