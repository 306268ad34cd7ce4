//! Storage backends.
//!
//! Durable engines are out of scope; this crate ships the in-memory backend
//! used for tests/dev and the end-to-end lifecycle tests.

pub mod in_memory;
mod integration_tests;

pub use in_memory::InMemoryStorage;
