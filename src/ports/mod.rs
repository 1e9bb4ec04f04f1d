//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CatalogProvider` - Furniture templates, default components, substitutions
//! - `QuoteExporter` - Renders a confirmed quote into a downloadable document
//! - `SessionStore` - Keyed, individually locked conversation sessions

mod catalog_provider;
mod quote_exporter;
mod session_store;

pub use catalog_provider::{CatalogError, CatalogProvider};
pub use quote_exporter::{ExportError, ExportFormat, ExportedDocument, ExportedQuote, QuoteExporter};
pub use session_store::{SessionHandle, SessionStore, SessionStoreError};
