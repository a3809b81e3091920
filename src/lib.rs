//! # stanzaio
//!
//! Parallel and sequential asynchronous reads of short text files, with
//! first-failure error propagation.
//!
//! ## Overview
//!
//! stanzaio provides:
//! - **Pluggable capabilities**: `AsyncFetch` and `AsyncStore` traits with
//!   file-backed and in-memory implementations
//! - **Three read modes**: parallel fan-out, ordered, and ordered with
//!   fail-fast error reporting
//! - **Sinks**: where fetched content, error reports and the done signal go
//! - **Strategies**: random read jitter and fault injection, swappable for
//!   deterministic stubs in tests
//! - **Demonstration routines**: five single-letter modes driven from the
//!   command line
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stanzaio::{ConsoleSink, ExerciseConfig, Outcome, build_engine_from_config};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let engine = build_engine_from_config(&ExerciseConfig::default());
//!     let sink = ConsoleSink::stdout();
//!
//!     let ids = ["poem-two/stanza-01.txt", "poem-two/stanza-02.txt"];
//!     if let Outcome::Failure(e) = engine.read_in_order_fallible(&ids, &sink).await {
//!         eprintln!("stopped at {}", e.target);
//!     }
//! }
//! ```
//!
//! ## Ordering semantics
//!
//! - `read_in_order` and `read_in_order_fallible` only start a fetch once
//!   the previous one has settled, so sink events follow input order.
//! - `read_parallel` starts every fetch at once; content is displayed in
//!   completion order and `done` waits for all of them.
//! - Nothing is retried, cancelled or timed out.
//!
//! ## Features
//!
//! - `yaml` - YAML config files (enabled by default)
//! - `json` - JSON config files (enabled by default)
//! - `miette` - Pretty error reporting with miette
//! - `sarge` - `ArgumentType` support for `ModeArgs` and the `stanzaio_sarge` binary

use std::sync::Arc;

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod exercise;
pub mod io;
pub mod logging;
pub mod sink;

pub use cli::ModeArgs;
pub use config::{ConfigFormat, ExerciseConfig};
pub use engine::StanzaEngine;
pub use error::{ConfigError, Outcome, ResourceError, Stage};
pub use exercise::{
    Exercise, FaultAt, FaultPlan, Mode, NoFault, RandomFault, inject_fault, stanza_paths,
};
pub use io::{
    AsyncFetch, AsyncStore, FileFetcher, FileStore, FixedJitter, InMemoryFetcher, InMemoryStore,
    Jitter, NoJitter, RandomJitter,
};
pub use sink::{ConsoleSink, RecordingSink, Sink, SinkEvent};

#[cfg(feature = "miette")]
pub use error::ResourceDiagnostic;

/// Build a file-backed StanzaEngine from an ExerciseConfig.
///
/// Reads wait a random delay of up to `jitter_ms` before starting.
pub fn build_engine_from_config(config: &ExerciseConfig) -> StanzaEngine {
    let jitter: Arc<dyn Jitter> = if config.jitter_ms == 0 {
        Arc::new(NoJitter)
    } else {
        Arc::new(RandomJitter::from_millis(config.jitter_ms))
    };
    let fetcher = FileFetcher::new(&config.base_dir).with_jitter(jitter);
    let store = FileStore::new(&config.base_dir);
    StanzaEngine::new(Arc::new(fetcher), Arc::new(store))
}

// Internal test modules (see src/tests)
#[cfg(test)]
mod tests;
