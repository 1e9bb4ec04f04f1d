//! Configuration aggregate - one furniture instance being customized.
//!
//! Owns the pricing law: the furniture price scales with the footprint
//! relative to the template's reference area, and components add their
//! line totals on top.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Component, ComponentOption, FurnitureTemplate};
use crate::domain::foundation::{DomainError, ErrorCode};

use super::component_set::ComponentSet;
use super::dimensions::Dimensions;

/// A user-customized instance of a furniture template.
///
/// # Invariants
///
/// - `current_price == template.base_price * footprint / template.reference_area_m2`
///   after any dimension change (initially `base_price`)
/// - at most one component per normalized functional category
/// - color and material changes never touch the price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    template: FurnitureTemplate,
    dimensions: Dimensions,
    material: String,
    color: String,
    current_price: f64,
    components: ComponentSet,
}

impl Configuration {
    /// Starts a configuration from a template and its catalog defaults.
    pub fn new(template: FurnitureTemplate, defaults: Vec<Component>) -> Self {
        let dimensions = Dimensions {
            width_mm: template.width_mm,
            height_mm: template.height_mm,
            depth_mm: template.depth_mm,
        };
        Self {
            material: template.material.clone(),
            color: template.color.clone(),
            current_price: template.base_price,
            components: ComponentSet::from_defaults(defaults),
            dimensions,
            template,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn template(&self) -> &FurnitureTemplate {
        &self.template
    }

    /// Display name, taken from the template.
    pub fn name(&self) -> &str {
        &self.template.name
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn material(&self) -> &str {
        &self.material
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn components(&self) -> &ComponentSet {
        &self.components
    }

    /// Area-scaled furniture price, components excluded.
    pub fn current_price(&self) -> f64 {
        self.current_price
    }

    /// `(width/1000) * (depth/1000)` in m².
    pub fn current_area(&self) -> f64 {
        self.dimensions.footprint_m2()
    }

    pub fn components_total(&self) -> f64 {
        self.components.total()
    }

    /// `current_price + Σ component line totals`.
    pub fn total(&self) -> f64 {
        self.current_price + self.components_total()
    }

    pub fn category_keys(&self) -> BTreeSet<String> {
        self.components.category_keys()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Sets new dimensions and reprices the furniture.
    pub fn set_dimensions(&mut self, dimensions: Dimensions) {
        self.dimensions = dimensions;
        self.recalculate_price();
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    pub fn set_material(&mut self, material: impl Into<String>) {
        self.material = material.into();
    }

    /// Installs `option` as the single component of `category_key`
    /// (quantity 1), replacing whatever held that category.
    pub fn select_component(&mut self, category_key: &str, option: &ComponentOption) -> Option<Component> {
        self.components
            .upsert(Component::from_option(option, category_key, 1))
    }

    /// Swaps the component at `index` for `option`, keeping its quantity and position.
    ///
    /// # Errors
    ///
    /// - `ComponentNotFound` if `index` is out of range
    pub fn swap_component_at(
        &mut self,
        index: usize,
        category_key: &str,
        option: &ComponentOption,
    ) -> Result<Component, DomainError> {
        let quantity = self
            .components
            .get(index)
            .map(|c| c.quantity)
            .ok_or_else(|| component_not_found(index))?;

        self.components
            .replace_at(index, Component::from_option(option, category_key, quantity))
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::CategoryNotFound,
                    format!("Option '{}' does not belong to category of component {}", option.id, index),
                )
            })
    }

    fn recalculate_price(&mut self) {
        let factor = self.current_area() / self.template.reference_area_m2;
        self.current_price = self.template.base_price * factor;
    }
}

fn component_not_found(index: usize) -> DomainError {
    DomainError::new(ErrorCode::ComponentNotFound, "Component not found")
        .with_detail("index", index.to_string())
}
