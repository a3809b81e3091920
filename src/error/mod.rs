//! Error types for stanzaio read and write operations.
//!
//! This module provides:
//! - `Stage`: Indicates whether an error happened while reading or writing
//! - `ResourceError`: A single failed operation with the identifier it targeted
//! - `Outcome`: Result of a fail-fast sequential read
//! - `ConfigError`: Errors raised while loading an `ExerciseConfig`

use std::fmt;
use std::io;

use thiserror::Error;

/// Which operation a `ResourceError` came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Error while fetching a resource
    Read,
    /// Error while persisting a resource
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Read => write!(f, "Read"),
            Stage::Write => write!(f, "Write"),
        }
    }
}

/// A failed fetch or write, tagged with the identifier it targeted.
///
/// The underlying `io::Error` is kept unmodified so callers can inspect
/// its `kind()`.
#[derive(Debug, Error)]
#[error("[{stage}] {target}: {error}")]
pub struct ResourceError {
    /// Stage where the error occurred
    pub stage: Stage,
    /// Identifier of the resource (usually a file path)
    pub target: String,
    /// The underlying error
    #[source]
    pub error: io::Error,
}

impl ResourceError {
    /// A fetch of `target` failed.
    pub fn read(target: impl Into<String>, error: io::Error) -> Self {
        Self {
            stage: Stage::Read,
            target: target.into(),
            error,
        }
    }

    /// A write to `target` failed.
    pub fn write(target: impl Into<String>, error: io::Error) -> Self {
        Self {
            stage: Stage::Write,
            target: target.into(),
            error,
        }
    }

    /// Kind of the underlying I/O error.
    pub fn kind(&self) -> io::ErrorKind {
        self.error.kind()
    }
}

/// Result of a fail-fast sequential read.
///
/// There is no partial-success variant: the first failure ends the run.
#[derive(Debug)]
pub enum Outcome {
    /// Every identifier was fetched and displayed in order.
    Success,
    /// The first identifier that could not be fetched.
    Failure(ResourceError),
}

impl Outcome {
    /// True when every identifier was read.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }

    /// The failure, if any.
    pub fn failure(&self) -> Option<&ResourceError> {
        match self {
            Outcome::Success => None,
            Outcome::Failure(e) => Some(e),
        }
    }

    /// Convert into a `Result`, for callers that want `?`.
    pub fn into_result(self) -> Result<(), ResourceError> {
        match self {
            Outcome::Success => Ok(()),
            Outcome::Failure(e) => Err(e),
        }
    }
}

/// Errors raised while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[cfg(feature = "yaml")]
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[cfg(feature = "json")]
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("fault_index {index} is out of range for {stanza_count} stanza(s)")]
    FaultIndexOutOfRange { index: usize, stanza_count: usize },

    #[error("unsupported config format: {0}")]
    UnknownFormat(String),
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
