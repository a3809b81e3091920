//! Async write capability trait definition.

use std::fmt::Debug;

use async_trait::async_trait;

/// Trait for asynchronously persisting text under an identifier.
#[async_trait]
pub trait AsyncStore: Send + Sync + Debug {
    /// Write `content` to the resource named by `id`, replacing any existing content.
    async fn store(&self, id: &str, content: &str) -> std::io::Result<()>;
}
