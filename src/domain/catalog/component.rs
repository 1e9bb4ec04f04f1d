//! Components and substitution options.

use serde::{Deserialize, Serialize};

use super::normalizer::normalize;

/// A swappable named sub-part of a furniture item.
///
/// Catalog defaults and configured parts share this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    /// Free-text functional category, matched after normalization.
    pub functional_category: String,
    pub quantity: u32,
    pub unit_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Component {
    /// Builds a component from a substitution option.
    ///
    /// The category is stored as the already-normalized key.
    pub fn from_option(option: &ComponentOption, category_key: &str, quantity: u32) -> Self {
        Self {
            name: option.name.clone(),
            functional_category: category_key.to_string(),
            quantity,
            unit_price: option.unit_price,
            material: None,
            color: None,
        }
    }

    /// `quantity * unit_price`.
    pub fn line_total(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }

    /// Normalized matching key of this component's category.
    pub fn category_key(&self) -> String {
        normalize(&self.functional_category)
    }
}

/// One entry of the substitution catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentOption {
    pub id: String,
    pub name: String,
    pub unit_price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hinge() -> Component {
        Component {
            name: "Dobradiça Simples".to_string(),
            functional_category: "Dobradiças".to_string(),
            quantity: 4,
            unit_price: 18.0,
            material: Some("Aço".to_string()),
            color: None,
        }
    }

    #[test]
    fn line_total_multiplies_quantity_by_price() {
        assert_eq!(hinge().line_total(), 72.0);
    }

    #[test]
    fn category_key_is_normalized() {
        assert_eq!(hinge().category_key(), "dobradica");
    }

    #[test]
    fn from_option_uses_given_key_and_quantity() {
        let option = ComponentOption {
            id: "GAV02".to_string(),
            name: "Gaveta Invisível Soft Close".to_string(),
            unit_price: 240.0,
        };
        let component = Component::from_option(&option, "gaveta", 1);
        assert_eq!(component.functional_category, "gaveta");
        assert_eq!(component.quantity, 1);
        assert_eq!(component.line_total(), 240.0);
    }
}
