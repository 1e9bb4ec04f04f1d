//! Catalog adapters.

mod in_memory;
mod yaml_file;

pub use in_memory::InMemoryCatalog;
pub use yaml_file::{load_catalog_file, parse_catalog, parse_price};
