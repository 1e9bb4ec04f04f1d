//! Furnish Quote - Conversational furniture configuration and quoting.
//!
//! A menu-driven chat walks a customer through picking catalog furniture,
//! resizing it, choosing finishes and swapping components, then collects the
//! priced items into a quote that is exported as a document.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
