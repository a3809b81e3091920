//! File-backed fetch and write implementations.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::fs::OpenOptions;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use super::{AsyncFetch, AsyncStore, Jitter, NoJitter};

/// Reads resources as UTF-8 files relative to a base directory.
///
/// Each read waits for the configured `Jitter` delay first, so that
/// concurrent reads complete in a non-deterministic order.
#[derive(Debug, Clone)]
pub struct FileFetcher {
    base_dir: PathBuf,
    jitter: Arc<dyn Jitter>,
}

impl FileFetcher {
    /// Create a new file fetcher without any delay.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            jitter: Arc::new(NoJitter),
        }
    }

    /// Set the delay strategy applied before each read.
    pub fn with_jitter(mut self, jitter: Arc<dyn Jitter>) -> Self {
        self.jitter = jitter;
        self
    }

    /// Get the base directory.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn resolve(&self, id: &str) -> PathBuf {
        self.base_dir.join(id)
    }
}

#[async_trait]
impl AsyncFetch for FileFetcher {
    async fn fetch(&self, id: &str) -> std::io::Result<String> {
        let delay = self.jitter.delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let mut file = tokio::fs::File::open(self.resolve(id)).await?;
        let mut content = String::new();
        file.read_to_string(&mut content).await?;
        Ok(content)
    }
}

/// Writes resources as files relative to a base directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    /// Create a new file store.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Get the base directory.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

#[async_trait]
impl AsyncStore for FileStore {
    async fn store(&self, id: &str, content: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(self.base_dir.join(id))
            .await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await
    }
}
