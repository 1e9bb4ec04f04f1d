//! Substitution catalog grouped by normalized category.

use std::collections::BTreeMap;

use serde::Serialize;

use super::component::ComponentOption;
use super::normalizer::normalize;

/// Swappable options per normalized functional category.
///
/// Keys are always normalized on insertion, so lookups must use
/// [`normalize`]d keys as well.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SubstitutionCatalog {
    categories: BTreeMap<String, Vec<ComponentOption>>,
}

impl SubstitutionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an option under the normalized form of `category`.
    pub fn insert(&mut self, category: &str, option: ComponentOption) {
        self.categories
            .entry(normalize(category))
            .or_default()
            .push(option);
    }

    /// Builder-style variant of [`insert`](Self::insert).
    pub fn with_option(mut self, category: &str, option: ComponentOption) -> Self {
        self.insert(category, option);
        self
    }

    pub fn contains(&self, category_key: &str) -> bool {
        self.categories.contains_key(category_key)
    }

    /// Options of a category, in catalog order.
    pub fn options(&self, category_key: &str) -> Option<&[ComponentOption]> {
        self.categories.get(category_key).map(Vec::as_slice)
    }

    /// Exact id match within one category.
    pub fn find_option(&self, category_key: &str, option_id: &str) -> Option<&ComponentOption> {
        self.options(category_key)?
            .iter()
            .find(|option| option.id == option_id)
    }

    /// Category keys in sorted order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
