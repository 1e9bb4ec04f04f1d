//! Application configuration module
//!
//! Configuration is read from environment variables with the `FURNISH_QUOTE`
//! prefix, using the `config` and `dotenvy` crates. Every section has
//! defaults, so an empty environment yields a runnable development setup.
//!
//! # Example
//!
//! ```no_run
//! use furnish_quote::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod catalog;
mod error;
mod export;
mod server;

pub use catalog::CatalogConfig;
pub use error::{ConfigError, ValidationError};
pub use export::ExportConfig;
pub use server::{LogFormat, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Listener, request limits and logging
    #[serde(default)]
    pub server: ServerConfig,

    /// Catalog source
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Quote document export
    #[serde(default)]
    pub export: ExportConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` if present, then reads `FURNISH_QUOTE__*` variables,
    /// with `__` separating nested values:
    ///
    /// - `FURNISH_QUOTE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `FURNISH_QUOTE__CATALOG__PATH=catalog.yaml` -> `catalog.path`
    /// - `FURNISH_QUOTE__EXPORT__FORMAT=pdf` -> `export.format`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("FURNISH_QUOTE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.export.validate()?;
        Ok(())
    }
}
