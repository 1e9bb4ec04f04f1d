//! Storage Adapters
//!
//! Implementations of the SessionStore port.
//!
//! - **InMemorySessionStore** - Sessions live in process memory and are lost
//!   on restart

mod in_memory_session_store;

pub use in_memory_session_store::InMemorySessionStore;
