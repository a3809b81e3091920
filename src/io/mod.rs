//! I/O abstractions for the fetch and write capabilities.
//!
//! This module provides:
//! - `AsyncFetch`: Trait for reading a text resource by identifier
//! - `AsyncStore`: Trait for persisting a text resource by identifier
//! - `Jitter`: Pluggable delay strategy applied before each file read
//! - File-backed implementations on top of `tokio::fs`
//! - In-memory implementations for testing

mod fetch;
mod file;
mod jitter;
mod memory;
mod store;

pub use fetch::AsyncFetch;
pub use file::{FileFetcher, FileStore};
pub use jitter::{FixedJitter, Jitter, NoJitter, RandomJitter};
pub use memory::{InMemoryFetcher, InMemoryStore};
pub use store::AsyncStore;
