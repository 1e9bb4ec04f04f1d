//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors, money, state machine trait)
//! - `catalog` - Furniture templates, components and the substitution catalog
//! - `configuration` - One furniture item being configured and priced
//! - `quote` - Ledger of confirmed configurations
//! - `conversation` - Dialogue state, session aggregate and reply texts

pub mod catalog;
pub mod configuration;
pub mod conversation;
pub mod foundation;
pub mod quote;
