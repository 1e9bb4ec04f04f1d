//! Quote ledger - the ordered confirmed configurations of one session.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::configuration::Configuration;
use crate::domain::foundation::{format_reais, DomainError, ErrorCode};

/// Ordered collection of confirmed configurations.
///
/// Insertion order is confirmation order; it drives display numbering and
/// removal by index. Totals are always recomputed from the entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteLedger {
    entries: Vec<Configuration>,
}

impl QuoteLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a confirmed configuration, taking ownership of it.
    pub fn append(&mut self, configuration: Configuration) {
        self.entries.push(configuration);
    }

    /// Removes the entry at a 0-based `index`.
    ///
    /// # Errors
    ///
    /// - `ItemNotFound` if `index` is out of range
    pub fn remove(&mut self, index: usize) -> Result<Configuration, DomainError> {
        if index >= self.entries.len() {
            return Err(self.item_not_found(index));
        }
        Ok(self.entries.remove(index))
    }

    /// Mutable access to one entry for post-confirmation edits.
    pub fn entry_mut(&mut self, index: usize) -> Result<&mut Configuration, DomainError> {
        if index >= self.entries.len() {
            return Err(self.item_not_found(index));
        }
        Ok(&mut self.entries[index])
    }

    pub fn get(&self, index: usize) -> Option<&Configuration> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[Configuration] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Σ entry totals.
    pub fn grand_total(&self) -> f64 {
        Self::total_of(&self.entries)
    }

    /// Σ totals of a ledger snapshot, as handed to exporters.
    pub fn total_of(entries: &[Configuration]) -> f64 {
        entries.iter().map(Configuration::total).sum()
    }

    /// Human-readable table of the ledger.
    pub fn summary(&self) -> LedgerSummary<'_> {
        LedgerSummary { ledger: self }
    }

    fn item_not_found(&self, index: usize) -> DomainError {
        DomainError::new(ErrorCode::ItemNotFound, "Quote item not found")
            .with_detail("index", index.to_string())
            .with_detail("len", self.entries.len().to_string())
    }
}

/// Tabular text rendering of a [`QuoteLedger`].
///
/// Lists every item with 1-based numbering, its dimensions, color, material
/// and value, followed by the grand total.
pub struct LedgerSummary<'a> {
    ledger: &'a QuoteLedger,
}

impl fmt::Display for LedgerSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ledger.is_empty() {
            return write!(f, "Nenhum movel orcado ainda.");
        }

        writeln!(f, "MOVEIS ORCADOS ({}):", self.ledger.len())?;
        writeln!(f)?;
        for (number, config) in self.ledger.entries.iter().enumerate().map(|(i, c)| (i + 1, c)) {
            writeln!(f, "{}. {}", number, config.name())?;
            writeln!(f, "   Dimensoes: {}", config.dimensions())?;
            writeln!(f, "   Cor: {} | Material: {}", config.color(), config.material())?;
            writeln!(f, "   Valor: {}", format_reais(config.total()))?;
            writeln!(f)?;
        }
        write!(f, "TOTAL GERAL: {}", format_reais(self.ledger.grand_total()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::fixtures::wardrobe;
    use crate::domain::catalog::{Component, FurnitureTemplate};
    use crate::domain::configuration::Dimensions;
    use proptest::prelude::*;

    fn named(name: &str, base_price: f64) -> Configuration {
        let template = FurnitureTemplate {
            name: name.to_string(),
            base_price,
            ..wardrobe()
        };
        Configuration::new(
            template,
            vec![Component {
                name: "Puxador".to_string(),
                functional_category: "puxador".to_string(),
                quantity: 2,
                unit_price: 25.0,
                material: None,
                color: None,
            }],
        )
    }

    #[test]
    fn grand_total_sums_entry_totals() {
        let mut ledger = QuoteLedger::new();
        ledger.append(named("Rack", 500.0));
        ledger.append(named("Estante", 700.0));
        assert_eq!(ledger.grand_total(), 550.0 + 750.0);
    }

    #[test]
    fn empty_ledger_totals_zero() {
        assert_eq!(QuoteLedger::new().grand_total(), 0.0);
    }

    #[test]
    fn remove_keeps_relative_order_of_the_rest() {
        let mut ledger = QuoteLedger::new();
        for name in ["A", "B", "C", "D"] {
            ledger.append(named(name, 100.0));
        }

        let removed = ledger.remove(1).unwrap();

        assert_eq!(removed.name(), "B");
        let names: Vec<&str> = ledger.entries().iter().map(Configuration::name).collect();
        assert_eq!(names, vec!["A", "C", "D"]);
        let text = ledger.summary().to_string();
        assert!(text.contains("1. A"));
        assert!(text.contains("2. C"));
        assert!(text.contains("3. D"));
    }

    #[test]
    fn remove_out_of_range_reports_item_not_found() {
        let mut ledger = QuoteLedger::new();
        ledger.append(named("A", 100.0));
        let err = ledger.remove(1).unwrap_err();
        assert_eq!(err.code, ErrorCode::ItemNotFound);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn entry_mut_allows_repricing_a_confirmed_item() {
        let mut ledger = QuoteLedger::new();
        ledger.append(named("A", 1000.0));
        ledger
            .entry_mut(0)
            .unwrap()
            .set_dimensions(Dimensions::new(1600.0, 1.0, 600.0).unwrap());
        assert!((ledger.grand_total() - 2050.0).abs() < 1e-9);
        assert!(ledger.entry_mut(3).is_err());
    }

    #[test]
    fn summary_lists_items_and_grand_total() {
        let mut ledger = QuoteLedger::new();
        ledger.append(named("Guarda-roupa", 1000.0));
        let text = ledger.summary().to_string();
        assert!(text.starts_with("MOVEIS ORCADOS (1):"));
        assert!(text.contains("Dimensoes: 800 x 2000 x 600 mm"));
        assert!(text.contains("Cor: Branco | Material: MDP"));
        assert!(text.contains("Valor: R$ 1050.00"));
        assert!(text.ends_with("TOTAL GERAL: R$ 1050.00"));
    }

    #[test]
    fn empty_summary_says_so() {
        assert_eq!(QuoteLedger::new().summary().to_string(), "Nenhum movel orcado ainda.");
    }

    proptest! {
        #[test]
        fn grand_total_tracks_entries_through_removals(
            prices in proptest::collection::vec(1.0f64..10_000.0, 1..8),
            removal_seed in 0usize..64,
        ) {
            let mut ledger = QuoteLedger::new();
            for (i, price) in prices.iter().enumerate() {
                ledger.append(named(&format!("M{}", i), *price));
            }
            let index = removal_seed % ledger.len();
            ledger.remove(index).unwrap();

            let expected: f64 = ledger.entries().iter().map(Configuration::total).sum();
            prop_assert_eq!(ledger.grand_total(), expected);
            prop_assert_eq!(ledger.len(), prices.len() - 1);
        }
    }
}
