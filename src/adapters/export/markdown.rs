//! Markdown rendering of a finished quote.

use chrono::{DateTime, Utc};
use std::fmt::Write;

use crate::domain::configuration::Configuration;
use crate::domain::foundation::{format_brl, SessionKey};
use crate::domain::quote::QuoteLedger;

/// Renders the ledger as a markdown document.
///
/// Each item lists its dimensions, material, color, a component table,
/// the base furniture price and the item total. The grand total closes
/// the document.
pub fn render_quote(items: &[Configuration], session: &SessionKey, generated_at: DateTime<Utc>) -> String {
    let mut doc = String::new();
    // Writing into a String cannot fail.
    let _ = write_quote(&mut doc, items, session, generated_at);
    doc
}

fn write_quote(
    doc: &mut String,
    items: &[Configuration],
    session: &SessionKey,
    generated_at: DateTime<Utc>,
) -> std::fmt::Result {
    writeln!(doc, "# Orcamento")?;
    writeln!(doc)?;
    writeln!(doc, "Data: {}  ", generated_at.format("%d/%m/%Y %H:%M"))?;
    writeln!(doc, "Sessao: {}", session)?;
    writeln!(doc)?;

    for (i, item) in items.iter().enumerate() {
        writeln!(doc, "## {}. {}", i + 1, item.name())?;
        writeln!(doc)?;
        writeln!(doc, "- Dimensoes: {}", item.dimensions())?;
        writeln!(doc, "- Material: {}", item.material())?;
        writeln!(doc, "- Cor: {}", item.color())?;
        writeln!(doc)?;

        if item.components().is_empty() {
            writeln!(doc, "Sem componentes.")?;
        } else {
            writeln!(doc, "| Componente | Qtd | Unitario | Subtotal |")?;
            writeln!(doc, "|---|---:|---:|---:|")?;
            for c in item.components().iter() {
                writeln!(
                    doc,
                    "| {} | {} | R$ {} | R$ {} |",
                    escape_cell(&c.name),
                    c.quantity,
                    format_brl(c.unit_price),
                    format_brl(c.line_total())
                )?;
            }
        }
        writeln!(doc)?;
        writeln!(doc, "Preco base: R$ {}  ", format_brl(item.current_price()))?;
        writeln!(doc, "**Total do item: R$ {}**", format_brl(item.total()))?;
        writeln!(doc)?;
        writeln!(doc, "---")?;
        writeln!(doc)?;
    }

    writeln!(doc, "## Total geral: R$ {}", format_brl(QuoteLedger::total_of(items)))
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::fixtures::wardrobe;
    use crate::domain::catalog::Component;
    use chrono::TimeZone;

    fn item() -> Configuration {
        Configuration::new(
            wardrobe(),
            vec![Component {
                name: "Gaveta | Soft".to_string(),
                functional_category: "gaveta".to_string(),
                quantity: 2,
                unit_price: 1200.0,
                material: None,
                color: None,
            }],
        )
    }

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 4, 10, 30, 0).unwrap()
    }

    #[test]
    fn renders_items_components_and_totals() {
        let doc = render_quote(&[item()], &SessionKey::new("abc"), at());

        assert!(doc.starts_with("# Orcamento"));
        assert!(doc.contains("Data: 04/03/2026 10:30"));
        assert!(doc.contains("Sessao: abc"));
        assert!(doc.contains("## 1. Guarda-roupa Casal"));
        assert!(doc.contains("- Dimensoes: 800 x 2000 x 600 mm"));
        assert!(doc.contains("| Gaveta \\| Soft | 2 | R$ 1.200,00 | R$ 2.400,00 |"));
        assert!(doc.contains("Preco base: R$ 1.000,00"));
        assert!(doc.contains("**Total do item: R$ 3.400,00**"));
        assert!(doc.trim_end().ends_with("## Total geral: R$ 3.400,00"));
    }

    #[test]
    fn grand_total_covers_every_item() {
        let doc = render_quote(&[item(), item()], &SessionKey::new("abc"), at());
        assert!(doc.contains("## 2. Guarda-roupa Casal"));
        assert!(doc.contains("## Total geral: R$ 6.800,00"));
    }

    #[test]
    fn grand_total_matches_the_ledger() {
        let mut ledger = QuoteLedger::new();
        ledger.append(item());
        ledger.append(Configuration::new(wardrobe(), vec![]));

        let doc = render_quote(ledger.entries(), &SessionKey::new("abc"), at());

        let expected = format!("## Total geral: R$ {}", format_brl(ledger.grand_total()));
        assert!(doc.trim_end().ends_with(&expected));
    }

    #[test]
    fn item_without_components_says_so() {
        let bare = Configuration::new(wardrobe(), vec![]);
        let doc = render_quote(&[bare], &SessionKey::new("abc"), at());
        assert!(doc.contains("Sem componentes."));
    }
}
