//! In-Memory Catalog Adapter
//!
//! Holds furniture templates, their default components and the
//! substitution catalog in memory. `seeded()` provides the demo catalog
//! used when no catalog file is configured.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::catalog::{Component, ComponentOption, FurnitureTemplate, SubstitutionCatalog};
use crate::domain::foundation::FurnitureId;
use crate::ports::{CatalogError, CatalogProvider};

/// In-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    furniture: Vec<FurnitureTemplate>,
    defaults: HashMap<FurnitureId, Vec<Component>>,
    substitutions: Arc<SubstitutionCatalog>,
}

impl InMemoryCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a template with its default components. Order of insertion is
    /// the search order.
    ///
    /// # Errors
    ///
    /// - `InvalidData` if the template fails validation
    pub fn with_furniture(self, template: FurnitureTemplate, defaults: Vec<Component>) -> Result<Self, CatalogError> {
        template
            .validate()
            .map_err(|e| CatalogError::invalid_data(format!("{}: {}", template.name, e)))?;
        Ok(self.insert(template, defaults))
    }

    fn insert(mut self, template: FurnitureTemplate, defaults: Vec<Component>) -> Self {
        self.defaults.insert(template.id, defaults);
        self.furniture.push(template);
        self
    }

    pub fn with_substitutions(mut self, catalog: SubstitutionCatalog) -> Self {
        self.substitutions = Arc::new(catalog);
        self
    }

    /// Get the number of furniture templates
    pub fn furniture_count(&self) -> usize {
        self.furniture.len()
    }

    /// Demo catalog: four furniture lines and the handle, drawer and hinge
    /// substitution options.
    pub fn seeded() -> Self {
        Self::new()
            .insert(
                template(1, "Guarda-roupa Casal", "quarto", 1800.0, (1600.0, 2200.0, 600.0)),
                vec![
                    part("Puxador Simples Cromado", "Puxador", 4, 30.0),
                    part("Dobradiça Simples", "Dobradiça", 8, 18.0),
                    part("Gaveta Simples Metálica", "Gaveta", 2, 120.0),
                ],
            )
            .insert(
                template(2, "Cozinha Compacta", "cozinha", 2400.0, (2000.0, 700.0, 600.0)),
                vec![
                    part("Puxador Alça Alumínio Escovado", "Puxador", 6, 55.0),
                    part("Dobradiça Simples", "Dobradiça", 6, 18.0),
                    part("Gaveta Simples Metálica", "Gavetas", 3, 120.0),
                ],
            )
            .insert(
                template(3, "Rack TV", "sala", 650.0, (1800.0, 500.0, 400.0)),
                vec![
                    part("Puxador Zen Preto Fosco", "Puxador", 2, 85.0),
                    part("Dobradiça Simples", "Dobradiça", 4, 18.0),
                ],
            )
            .insert(
                template(4, "Estante Livros", "escritorio", 900.0, (1000.0, 1800.0, 350.0)),
                vec![],
            )
            .with_substitutions(seeded_substitutions())
    }
}

fn template(id: u32, name: &str, kind: &str, base_price: f64, dims: (f64, f64, f64)) -> FurnitureTemplate {
    let (width_mm, height_mm, depth_mm) = dims;
    FurnitureTemplate {
        id: FurnitureId::new(id),
        name: name.to_string(),
        kind: kind.to_string(),
        material: "MDP".to_string(),
        color: "Branco".to_string(),
        base_price,
        width_mm,
        height_mm,
        depth_mm,
        reference_area_m2: width_mm * depth_mm / 1_000_000.0,
        description: String::new(),
    }
}

fn part(name: &str, category: &str, quantity: u32, unit_price: f64) -> Component {
    Component {
        name: name.to_string(),
        functional_category: category.to_string(),
        quantity,
        unit_price,
        material: None,
        color: None,
    }
}

fn seeded_substitutions() -> SubstitutionCatalog {
    let option = |id: &str, name: &str, unit_price: f64| ComponentOption {
        id: id.to_string(),
        name: name.to_string(),
        unit_price,
    };

    SubstitutionCatalog::new()
        .with_option("Puxador", option("PUX01", "Puxador Simples Cromado", 30.0))
        .with_option("Puxador", option("PUX02", "Puxador Alça Alumínio Escovado", 55.0))
        .with_option("Puxador", option("PUX03", "Puxador Zen Preto Fosco", 85.0))
        .with_option("Puxador", option("PUX04", "Perfil Cava Embutido", 120.0))
        .with_option("Gaveta", option("GAV01", "Gaveta Simples Metálica", 120.0))
        .with_option("Gaveta", option("GAV02", "Gaveta Invisível Soft Close", 240.0))
        .with_option("Dobradiça", option("DOB01", "Dobradiça Simples", 18.0))
        .with_option("Dobradiça", option("DOB02", "Dobradiça Soft Close", 32.0))
}

#[async_trait]
impl CatalogProvider for InMemoryCatalog {
    async fn find_furniture_by_name(
        &self,
        query: &str,
    ) -> Result<Option<FurnitureTemplate>, CatalogError> {
        Ok(self
            .furniture
            .iter()
            .find(|t| t.name_contains(query))
            .cloned())
    }

    async fn default_components_for(
        &self,
        furniture_id: FurnitureId,
    ) -> Result<Vec<Component>, CatalogError> {
        Ok(self.defaults.get(&furniture_id).cloned().unwrap_or_default())
    }

    async fn substitution_catalog(&self) -> Result<Arc<SubstitutionCatalog>, CatalogError> {
        Ok(Arc::clone(&self.substitutions))
    }
}
