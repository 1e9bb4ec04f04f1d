//! YAML Catalog Loader
//!
//! Reads a catalog file into an [`InMemoryCatalog`]. Prices may be written
//! as plain numbers or as Brazilian-formatted text (`"1.234,56"`).
//!
//! ```yaml
//! furniture:
//!   - id: 1
//!     name: Guarda-roupa Casal
//!     type: quarto
//!     material: MDP
//!     color: Branco
//!     base_price: "1.800,00"
//!     width_mm: 1600
//!     height_mm: 2200
//!     depth_mm: 600
//!     reference_area_m2: 0.96
//!     components:
//!       - name: Puxador Simples Cromado
//!         functional_category: Puxador
//!         quantity: 4
//!         unit_price: 30
//! substitutions:
//!   - id: PUX01
//!     category: Puxador
//!     name: Puxador Simples Cromado
//!     unit_price: "30,00"
//! ```

use serde::Deserialize;
use std::path::Path;

use crate::domain::catalog::{Component, ComponentOption, FurnitureTemplate, SubstitutionCatalog};
use crate::domain::foundation::FurnitureId;
use crate::ports::CatalogError;

use super::InMemoryCatalog;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    furniture: Vec<FurnitureRecord>,
    #[serde(default)]
    substitutions: Vec<SubstitutionRecord>,
}

#[derive(Debug, Deserialize)]
struct FurnitureRecord {
    id: u32,
    name: String,
    #[serde(rename = "type", default)]
    kind: String,
    material: String,
    color: String,
    base_price: Price,
    width_mm: f64,
    height_mm: f64,
    depth_mm: f64,
    reference_area_m2: f64,
    #[serde(default)]
    description: String,
    #[serde(default)]
    components: Vec<ComponentRecord>,
}

#[derive(Debug, Deserialize)]
struct ComponentRecord {
    name: String,
    functional_category: String,
    quantity: u32,
    unit_price: Price,
    #[serde(default)]
    material: Option<String>,
    #[serde(default)]
    color: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SubstitutionRecord {
    id: String,
    category: String,
    name: String,
    unit_price: Price,
}

/// A price as found in the file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Price {
    Number(f64),
    Text(String),
}

impl Price {
    fn resolve(&self, context: &str) -> Result<f64, CatalogError> {
        match self {
            Price::Number(value) => Ok(*value),
            Price::Text(text) => parse_price(text).ok_or_else(|| {
                CatalogError::invalid_data(format!("invalid price '{}' for {}", text, context))
            }),
        }
    }
}

/// Parses `"1.234,56"`, `"1234,56"` or `"1234.56"`. Blank text is zero.
pub fn parse_price(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0.0);
    }
    let canonical = if text.contains('.') && text.contains(',') {
        text.replace('.', "").replace(',', ".")
    } else {
        text.replace(',', ".")
    };
    canonical.parse().ok()
}

/// Loads and validates a catalog file.
///
/// # Errors
///
/// - `Unavailable` if the file cannot be read
/// - `InvalidData` if it does not parse or a template is invalid
pub async fn load_catalog_file(path: impl AsRef<Path>) -> Result<InMemoryCatalog, CatalogError> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        CatalogError::unavailable(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let catalog = parse_catalog(&raw)?;
    tracing::info!(
        path = %path.display(),
        furniture = catalog.furniture_count(),
        "Catalog file loaded"
    );
    Ok(catalog)
}

/// Parses catalog YAML text.
pub fn parse_catalog(raw: &str) -> Result<InMemoryCatalog, CatalogError> {
    let file: CatalogFile = serde_yaml::from_str(raw)
        .map_err(|e| CatalogError::invalid_data(format!("Malformed catalog YAML: {}", e)))?;

    let mut catalog = InMemoryCatalog::new();
    for record in file.furniture {
        let (template, defaults) = record.into_domain()?;
        catalog = catalog.with_furniture(template, defaults)?;
    }

    let mut substitutions = SubstitutionCatalog::new();
    for record in file.substitutions {
        let unit_price = record.unit_price.resolve(&record.id)?;
        substitutions.insert(
            &record.category,
            ComponentOption {
                id: record.id,
                name: record.name,
                unit_price,
            },
        );
    }

    Ok(catalog.with_substitutions(substitutions))
}

impl FurnitureRecord {
    fn into_domain(self) -> Result<(FurnitureTemplate, Vec<Component>), CatalogError> {
        let base_price = self.base_price.resolve(&self.name)?;
        let defaults = self
            .components
            .into_iter()
            .map(|c| {
                Ok(Component {
                    unit_price: c.unit_price.resolve(&c.name)?,
                    name: c.name,
                    functional_category: c.functional_category,
                    quantity: c.quantity,
                    material: c.material,
                    color: c.color,
                })
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        let template = FurnitureTemplate {
            id: FurnitureId::new(self.id),
            name: self.name,
            kind: self.kind,
            material: self.material,
            color: self.color,
            base_price,
            width_mm: self.width_mm,
            height_mm: self.height_mm,
            depth_mm: self.depth_mm,
            reference_area_m2: self.reference_area_m2,
            description: self.description,
        };
        Ok((template, defaults))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::CatalogProvider;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"
furniture:
  - id: 7
    name: Balcao Banheiro
    type: banheiro
    material: MDF
    color: Preto
    base_price: "1.234,50"
    width_mm: 800
    height_mm: 600
    depth_mm: 450
    reference_area_m2: 0.36
    components:
      - name: Puxador Zen
        functional_category: Puxadores
        quantity: 2
        unit_price: "85,00"
substitutions:
  - id: PUX01
    category: Puxador
    name: Puxador Simples Cromado
    unit_price: 30
  - id: DOB02
    category: Dobradiça
    name: Dobradiça Soft Close
    unit_price: "32.00"
"#;

    mod prices {
        use super::*;

        #[test]
        fn brazilian_thousands_and_decimal() {
            assert_eq!(parse_price("1.234,56"), Some(1234.56));
        }

        #[test]
        fn comma_decimal_only() {
            assert_eq!(parse_price("85,5"), Some(85.5));
        }

        #[test]
        fn dot_decimal() {
            assert_eq!(parse_price("32.00"), Some(32.0));
        }

        #[test]
        fn blank_is_zero() {
            assert_eq!(parse_price("  "), Some(0.0));
        }

        #[test]
        fn garbage_is_rejected() {
            assert_eq!(parse_price("abc"), None);
        }
    }

    #[tokio::test]
    async fn parses_templates_defaults_and_substitutions() {
        let catalog = parse_catalog(SAMPLE).unwrap();

        let template = catalog.find_furniture_by_name("balcao").await.unwrap().unwrap();
        assert_eq!(template.base_price, 1234.5);
        assert_eq!(template.kind, "banheiro");

        let defaults = catalog.default_components_for(FurnitureId::new(7)).await.unwrap();
        assert_eq!(defaults.len(), 1);
        assert_eq!(defaults[0].unit_price, 85.0);

        let subs = catalog.substitution_catalog().await.unwrap();
        assert!(subs.contains("puxador"));
        assert_eq!(subs.find_option("dobradica", "DOB02").unwrap().unit_price, 32.0);
    }

    #[test]
    fn rejects_template_with_zero_reference_area() {
        let raw = SAMPLE.replace("reference_area_m2: 0.36", "reference_area_m2: 0");
        let err = parse_catalog(&raw).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidData(_)));
    }

    #[test]
    fn rejects_unparseable_price() {
        let raw = SAMPLE.replace("\"85,00\"", "\"oitenta\"");
        let err = parse_catalog(&raw).unwrap_err();
        assert!(err.to_string().contains("oitenta"));
    }

    #[test]
    fn rejects_malformed_yaml() {
        assert!(matches!(
            parse_catalog("furniture: [").unwrap_err(),
            CatalogError::InvalidData(_)
        ));
    }

    #[tokio::test]
    async fn loads_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let catalog = load_catalog_file(file.path()).await.unwrap();
        assert_eq!(catalog.furniture_count(), 1);
    }

    #[tokio::test]
    async fn missing_file_is_unavailable() {
        let err = load_catalog_file("/nonexistent/catalog.yaml").await.unwrap_err();
        assert!(matches!(err, CatalogError::Unavailable(_)));
    }
}
