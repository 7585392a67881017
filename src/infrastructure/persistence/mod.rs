//! Storage implementations of the domain repository traits.
//!
//! - [`InMemoryCodeStore`] - Process-lifetime store backed by a sharded concurrent map

pub mod memory_code_store;

pub use memory_code_store::InMemoryCodeStore;
