//! Asynchronous read engine: parallel fan-out, ordered reads and fail-fast ordered reads.
//!
//! All three read modes deliver content to a caller-supplied `Sink` and
//! finish with a single `done` signal. They differ in scheduling and in
//! what happens to failures:
//!
//! | mode | fetch order | failures |
//! |------|-------------|----------|
//! | `read_parallel` | all at once | swallowed |
//! | `read_in_order` | one after another | returned to the caller, no `done` |
//! | `read_in_order_fallible` | one after another | first one reported to the sink, then `done` |

use std::sync::Arc;

use futures::future;
use tracing::{debug, info};

use crate::error::{Outcome, ResourceError};
use crate::io::{AsyncFetch, AsyncStore};
use crate::sink::Sink;

/// Engine orchestrating reads and writes over pluggable fetch and write capabilities.
#[derive(Debug, Clone)]
pub struct StanzaEngine {
    fetcher: Arc<dyn AsyncFetch>,
    store: Arc<dyn AsyncStore>,
}

impl StanzaEngine {
    /// Create a new engine.
    pub fn new(fetcher: Arc<dyn AsyncFetch>, store: Arc<dyn AsyncStore>) -> Self {
        Self { fetcher, store }
    }

    /// Get the fetch capability.
    pub fn fetcher(&self) -> &Arc<dyn AsyncFetch> {
        &self.fetcher
    }

    /// Get the write capability.
    pub fn store(&self) -> &Arc<dyn AsyncStore> {
        &self.store
    }

    /// Fetch every identifier concurrently and display each as it arrives.
    ///
    /// Display order follows completion order. Failed fetches are dropped.
    /// `done` fires once, after every fetch has settled.
    pub async fn read_parallel<S>(&self, ids: &[S], sink: &dyn Sink)
    where
        S: AsRef<str>,
    {
        let futs = ids.iter().map(|id| {
            let id = id.as_ref();
            async move {
                match self.fetcher.fetch(id).await {
                    Ok(content) => sink.display(&content),
                    Err(e) => debug!(target_id = id, error = %e, "ignoring failed fetch"),
                }
            }
        });

        future::join_all(futs).await;
        sink.done();
    }

    /// Fetch identifiers one at a time, displaying each before the next fetch starts.
    ///
    /// The first failure is returned as-is: it is not reported to the sink
    /// and `done` does not fire.
    pub async fn read_in_order<S>(&self, ids: &[S], sink: &dyn Sink) -> Result<(), ResourceError>
    where
        S: AsRef<str>,
    {
        for id in ids {
            let content = self.fetch_one(id.as_ref()).await?;
            sink.display(&content);
        }

        sink.done();
        Ok(())
    }

    /// Fetch identifiers one at a time, stopping at the first failure.
    ///
    /// On failure the error goes to `sink.report` and no later identifier
    /// is fetched. `done` fires exactly once in both cases, after the last
    /// display or the report.
    pub async fn read_in_order_fallible<S>(&self, ids: &[S], sink: &dyn Sink) -> Outcome
    where
        S: AsRef<str>,
    {
        for (index, id) in ids.iter().enumerate() {
            match self.fetch_one(id.as_ref()).await {
                Ok(content) => sink.display(&content),
                Err(e) => {
                    info!(index, target_id = %e.target, "halting ordered read on first failure");
                    sink.report(&e);
                    sink.done();
                    return Outcome::Failure(e);
                }
            }
        }

        sink.done();
        Outcome::Success
    }

    /// Persist `content` under `id`, resolving with the identifier.
    pub async fn write_resource(&self, id: &str, content: &str) -> Result<String, ResourceError> {
        self.store
            .store(id, content)
            .await
            .map_err(|e| ResourceError::write(id, e))?;

        debug!(target_id = id, bytes = content.len(), "resource written");
        Ok(id.to_string())
    }

    async fn fetch_one(&self, id: &str) -> Result<String, ResourceError> {
        debug!(target_id = id, "fetching");
        self.fetcher
            .fetch(id)
            .await
            .map_err(|e| ResourceError::read(id, e))
    }
}
