//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `catalog` - Furniture catalog sources (seeded, YAML file)
//! - `export` - Quote document rendering and storage
//! - `http` - REST API (axum)
//! - `storage` - Session stores

pub mod catalog;
pub mod export;
pub mod http;
pub mod storage;

pub use catalog::InMemoryCatalog;
pub use export::LocalQuoteExporter;
pub use storage::InMemorySessionStore;
