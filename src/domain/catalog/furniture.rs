//! Furniture templates: the immutable catalog prototypes.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{FurnitureId, ValidationError};

/// Catalog-defined prototype of a purchasable item.
///
/// # Invariants
///
/// - `reference_area_m2 > 0` (it divides every area-scaled price)
/// - `name` is non-empty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnitureTemplate {
    pub id: FurnitureId,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub material: String,
    pub color: String,
    pub base_price: f64,
    pub width_mm: f64,
    pub height_mm: f64,
    pub depth_mm: f64,
    pub reference_area_m2: f64,
    #[serde(default)]
    pub description: String,
}

impl FurnitureTemplate {
    /// Checks the template invariants.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank
    /// - `NotPositive` if the reference area is not a finite positive number
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if !self.reference_area_m2.is_finite() || self.reference_area_m2 <= 0.0 {
            return Err(ValidationError::not_positive(
                "reference_area_m2",
                self.reference_area_m2,
            ));
        }
        Ok(())
    }

    /// Case-insensitive substring match on the name.
    pub fn name_contains(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// A wardrobe whose catalog area equals its own footprint (0.8 m × 0.6 m).
    pub fn wardrobe() -> FurnitureTemplate {
        FurnitureTemplate {
            id: FurnitureId::new(1),
            name: "Guarda-roupa Casal".to_string(),
            kind: "dormitorio".to_string(),
            material: "MDP".to_string(),
            color: "Branco".to_string(),
            base_price: 1000.0,
            width_mm: 800.0,
            height_mm: 2000.0,
            depth_mm: 600.0,
            reference_area_m2: 0.48,
            description: "Guarda-roupa de duas portas".to_string(),
        }
    }
}
