//! Furniture dimensions and the `L x A x P` input format.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Width × height × depth in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width_mm: f64,
    pub height_mm: f64,
    pub depth_mm: f64,
}

impl Dimensions {
    /// Creates dimensions after checking every side is finite and positive.
    pub fn new(width_mm: f64, height_mm: f64, depth_mm: f64) -> Result<Self, ValidationError> {
        for (field, value) in [
            ("width_mm", width_mm),
            ("height_mm", height_mm),
            ("depth_mm", depth_mm),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ValidationError::not_positive(field, value));
            }
        }
        Ok(Self {
            width_mm,
            height_mm,
            depth_mm,
        })
    }

    /// Floor footprint in square metres. Height does not contribute.
    pub fn footprint_m2(&self) -> f64 {
        (self.width_mm / 1000.0) * (self.depth_mm / 1000.0)
    }
}

/// Parses `"800 x 700 x 600"`. Separators are `x` or `X`; whitespace anywhere is ignored.
impl FromStr for Dimensions {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();

        let parts: Vec<&str> = compact.split('x').collect();
        if parts.len() != 3 {
            return Err(ValidationError::invalid_format(
                "dimensions",
                format!("expected 3 values separated by 'x', got {}", parts.len()),
            ));
        }

        let mut values = [0.0_f64; 3];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part.parse::<f64>().map_err(|_| {
                ValidationError::invalid_format("dimensions", format!("'{}' is not a number", part))
            })?;
        }

        Dimensions::new(values[0], values[1], values[2])
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} x {} x {} mm",
            self.width_mm.trunc() as i64,
            self.height_mm.trunc() as i64,
            self.depth_mm.trunc() as i64
        )
    }
}
