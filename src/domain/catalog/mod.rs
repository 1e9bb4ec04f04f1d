//! Catalog module - furniture templates, components and substitution options.
//!
//! Everything here is read-only reference data plus the normalizer that turns
//! free-text category labels into matching keys.

mod component;
mod furniture;
mod normalizer;
mod substitution;

pub use component::{Component, ComponentOption};
pub use furniture::FurnitureTemplate;
pub use normalizer::normalize;
pub use substitution::SubstitutionCatalog;

#[cfg(test)]
pub(crate) use furniture::fixtures;
