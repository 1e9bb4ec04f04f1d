//! Catalog Provider Port - Interface for the furniture and component catalog.
//!
//! The conversation looks furniture up by name, seeds configurations with
//! the template's default components and offers substitutions from the
//! catalog. Adapters decide where the catalog lives (seeded in memory,
//! YAML file).

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::catalog::{Component, FurnitureTemplate, SubstitutionCatalog};
use crate::domain::foundation::{DomainError, ErrorCode, FurnitureId};

/// Errors that can occur while reading the catalog.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// The catalog source could not be read.
    #[error("Catalog source unavailable: {0}")]
    Unavailable(String),

    /// The catalog source was read but is malformed.
    #[error("Invalid catalog data: {0}")]
    InvalidData(String),
}

impl CatalogError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable(reason.into())
    }

    pub fn invalid_data(reason: impl Into<String>) -> Self {
        Self::InvalidData(reason.into())
    }
}

impl From<CatalogError> for DomainError {
    fn from(err: CatalogError) -> Self {
        DomainError::new(ErrorCode::CatalogUnavailable, err.to_string())
    }
}

/// Port for read access to the catalog.
///
/// # Contract
///
/// - `find_furniture_by_name` is a case-insensitive substring match; the
///   first match in catalog order wins
/// - `default_components_for` returns an empty list for unknown templates
/// - the substitution catalog is keyed by normalized category
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Finds the first furniture template whose name contains `query`.
    async fn find_furniture_by_name(
        &self,
        query: &str,
    ) -> Result<Option<FurnitureTemplate>, CatalogError>;

    /// Default components a new configuration of `furniture_id` starts with.
    async fn default_components_for(
        &self,
        furniture_id: FurnitureId,
    ) -> Result<Vec<Component>, CatalogError>;

    /// Substitution options grouped by normalized category.
    async fn substitution_catalog(&self) -> Result<Arc<SubstitutionCatalog>, CatalogError>;
}
