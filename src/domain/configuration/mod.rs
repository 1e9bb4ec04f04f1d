//! Configuration module - the pricing engine for one furniture item.

mod aggregate;
mod component_set;
mod dimensions;

pub use aggregate::Configuration;
pub use component_set::ComponentSet;
pub use dimensions::Dimensions;
