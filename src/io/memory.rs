//! In-memory fetch and write implementations for testing.

use std::collections::{HashMap, HashSet};
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use super::{AsyncFetch, AsyncStore};

/// In-memory fetcher that records every identifier it is asked for.
///
/// Clones share state, so a test can keep one handle and give another
/// to the engine.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFetcher {
    entries: Arc<HashMap<String, String>>,
    delays: Arc<HashMap<String, Duration>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl InMemoryFetcher {
    /// Create a fetcher serving the given `(id, content)` pairs.
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: Arc::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
            delays: Arc::new(HashMap::new()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Delay the fetch of `id` by `delay`.
    pub fn with_delay(mut self, id: impl Into<String>, delay: Duration) -> Self {
        Arc::make_mut(&mut self.delays).insert(id.into(), delay);
        self
    }

    /// Identifiers fetched so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Forget recorded calls.
    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }
}

#[async_trait]
impl AsyncFetch for InMemoryFetcher {
    async fn fetch(&self, id: &str) -> io::Result<String> {
        self.calls.lock().unwrap().push(id.to_string());

        if let Some(delay) = self.delays.get(id) {
            tokio::time::sleep(*delay).await;
        }

        self.entries.get(id).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no such resource: {id}"))
        })
    }
}

/// In-memory store for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    data: Arc<Mutex<HashMap<String, String>>>,
    rejected: Arc<HashSet<String>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse writes to `id` with `PermissionDenied`.
    pub fn reject(mut self, id: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.rejected).insert(id.into());
        self
    }

    /// Get the content stored under `id`.
    pub fn get(&self, id: &str) -> Option<String> {
        self.data.lock().unwrap().get(id).cloned()
    }

    /// Number of stored resources.
    pub fn len(&self) -> usize {
        self.data.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl AsyncStore for InMemoryStore {
    async fn store(&self, id: &str, content: &str) -> io::Result<()> {
        if id.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "empty resource identifier",
            ));
        }
        if self.rejected.contains(id) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("write to {id} refused"),
            ));
        }

        self.data
            .lock()
            .unwrap()
            .insert(id.to_string(), content.to_string());
        Ok(())
    }
}
