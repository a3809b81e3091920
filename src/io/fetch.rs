//! Async fetch capability trait definition.

use std::fmt::Debug;

use async_trait::async_trait;

/// Trait for asynchronously fetching the text content of a resource.
///
/// Implementations must tolerate being called repeatedly and concurrently.
#[async_trait]
pub trait AsyncFetch: Send + Sync + Debug {
    /// Fetch the full content of the resource named by `id`.
    async fn fetch(&self, id: &str) -> std::io::Result<String>;
}
