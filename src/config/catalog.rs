//! Catalog configuration

use serde::Deserialize;
use std::path::PathBuf;

/// Where furniture templates and substitution options come from.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// YAML catalog file. The built-in seed catalog is used when unset.
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    pub fn uses_seed(&self) -> bool {
        self.path.is_none()
    }
}
