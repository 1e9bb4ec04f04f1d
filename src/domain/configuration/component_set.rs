//! Ordered component set keyed by normalized functional category.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{normalize, Component};

/// Components of one configuration, at most one per normalized category.
///
/// Iteration order is insertion order. Every mutation goes through
/// [`upsert`](Self::upsert) or [`replace_at`](Self::replace_at), which keep
/// the one-per-category invariant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentSet {
    entries: Vec<Component>,
}

impl ComponentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the set from catalog defaults.
    ///
    /// A repeated category with the same part name and unit price adds to the
    /// earlier quantity; a different part replaces the earlier one in place.
    pub fn from_defaults(defaults: impl IntoIterator<Item = Component>) -> Self {
        let mut set = Self::new();
        for component in defaults {
            let key = component.category_key();
            match set.position(&key) {
                Some(pos) => {
                    let existing = &mut set.entries[pos];
                    if existing.name == component.name && existing.unit_price == component.unit_price {
                        existing.quantity += component.quantity;
                    } else {
                        tracing::warn!(
                            category = %key,
                            kept = %component.name,
                            dropped = %existing.name,
                            "Catalog defaults list two parts for one category"
                        );
                        *existing = component;
                    }
                }
                None => set.entries.push(component),
            }
        }
        set
    }

    fn position(&self, category_key: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|c| c.category_key() == category_key)
    }

    /// Removes whatever holds `component`'s category and appends `component`.
    ///
    /// Returns the replaced component, if any.
    pub fn upsert(&mut self, component: Component) -> Option<Component> {
        let key = component.category_key();
        let replaced = self.position(&key).map(|pos| self.entries.remove(pos));
        self.entries.push(component);
        replaced
    }

    /// Replaces the component at `index` in place.
    ///
    /// The replacement must belong to the same category as the current
    /// occupant; otherwise nothing changes and `None` is returned.
    pub fn replace_at(&mut self, index: usize, component: Component) -> Option<Component> {
        let current = self.entries.get(index)?;
        if current.category_key() != component.category_key() {
            return None;
        }
        Some(std::mem::replace(&mut self.entries[index], component))
    }

    pub fn get(&self, index: usize) -> Option<&Component> {
        self.entries.get(index)
    }

    pub fn find_by_category(&self, category: &str) -> Option<&Component> {
        let key = normalize(category);
        self.entries.iter().find(|c| c.category_key() == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Component> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sorted normalized categories present in the set.
    pub fn category_keys(&self) -> BTreeSet<String> {
        self.entries.iter().map(Component::category_key).collect()
    }

    /// Σ line totals.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(Component::line_total).sum()
    }
}
