//! The five demonstration routines and their fault-injection strategies.
//!
//! | mode | routine |
//! |------|---------|
//! | A | stanzas 1 and 2 of poem two, in parallel |
//! | B | every stanza of poem two, in parallel |
//! | C | every stanza, in order, without failure handling |
//! | D | every stanza, in order, one replaced by a missing file, stopping at the first failure |
//! | E | a single write |

use std::fmt::{self, Debug};
use std::sync::Arc;

use rand::Rng;
use tracing::{info, warn};

use crate::config::ExerciseConfig;
use crate::engine::StanzaEngine;
use crate::error::{Outcome, ResourceError};
use crate::sink::Sink;

/// One demonstration routine, selected by a single-letter token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    A,
    B,
    C,
    D,
    E,
}

impl Mode {
    /// Every mode, in letter order.
    pub const ALL: [Mode; 5] = [Mode::A, Mode::B, Mode::C, Mode::D, Mode::E];

    /// Parse a mode token, ignoring case.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_uppercase().as_str() {
            "A" => Some(Mode::A),
            "B" => Some(Mode::B),
            "C" => Some(Mode::C),
            "D" => Some(Mode::D),
            "E" => Some(Mode::E),
            _ => None,
        }
    }

    /// One-line description for usage output.
    pub fn description(&self) -> &'static str {
        match self {
            Mode::A => "read stanzas one and two in parallel",
            Mode::B => "read every stanza in parallel",
            Mode::C => "read every stanza in order",
            Mode::D => "read every stanza in order, stopping at the first failure",
            Mode::E => "write a single file",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Mode::A => "A",
            Mode::B => "B",
            Mode::C => "C",
            Mode::D => "D",
            Mode::E => "E",
        };
        write!(f, "{letter}")
    }
}

/// Strategy choosing which identifier, if any, to replace with a missing one.
pub trait FaultPlan: Send + Sync + Debug {
    /// Index to break in a sequence of `len` identifiers.
    fn pick(&self, len: usize) -> Option<usize>;
}

/// Never inject a fault.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFault;

impl FaultPlan for NoFault {
    fn pick(&self, _len: usize) -> Option<usize> {
        None
    }
}

/// Always break the identifier at a fixed index, when it exists.
#[derive(Debug, Clone, Copy)]
pub struct FaultAt(pub usize);

impl FaultPlan for FaultAt {
    fn pick(&self, len: usize) -> Option<usize> {
        (self.0 < len).then_some(self.0)
    }
}

/// Break one uniformly chosen identifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomFault;

impl FaultPlan for RandomFault {
    fn pick(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(rand::thread_rng().gen_range(0..len))
    }
}

/// Relative paths of the stanzas of poem two, 1-based.
pub fn stanza_paths(count: usize) -> Vec<String> {
    (1..=count)
        .map(|n| format!("poem-two/stanza-{n:02}.txt"))
        .collect()
}

/// Replace the identifier chosen by `plan` with `wrong-file-name-<n>.txt`.
///
/// Returns the replaced index.
pub fn inject_fault(ids: &mut [String], plan: &dyn FaultPlan) -> Option<usize> {
    let index = plan.pick(ids.len())?;
    ids[index] = format!("wrong-file-name-{}.txt", index + 1);
    Some(index)
}

/// Runs the demonstration routines against a `StanzaEngine`.
#[derive(Debug, Clone)]
pub struct Exercise {
    engine: StanzaEngine,
    config: ExerciseConfig,
    fault_plan: Arc<dyn FaultPlan>,
}

impl Exercise {
    /// Create an exercise over an existing engine.
    ///
    /// The fault plan follows `config.fault_index`: fixed when set,
    /// random otherwise.
    pub fn new(engine: StanzaEngine, config: ExerciseConfig) -> Self {
        let fault_plan: Arc<dyn FaultPlan> = match config.fault_index {
            Some(index) => {
                if index >= config.stanza_count {
                    warn!(
                        index,
                        stanza_count = config.stanza_count,
                        "fault_index out of range, routine D will inject no fault"
                    );
                }
                Arc::new(FaultAt(index))
            }
            None => Arc::new(RandomFault),
        };
        Self {
            engine,
            config,
            fault_plan,
        }
    }

    /// Create an exercise backed by the file system, as described by `config`.
    pub fn from_config(config: ExerciseConfig) -> Self {
        let engine = crate::build_engine_from_config(&config);
        Self::new(engine, config)
    }

    /// Override the fault-injection strategy used by routine D.
    pub fn with_fault_plan(mut self, plan: Arc<dyn FaultPlan>) -> Self {
        self.fault_plan = plan;
        self
    }

    /// Get the engine.
    pub fn engine(&self) -> &StanzaEngine {
        &self.engine
    }

    /// Get the configuration.
    pub fn config(&self) -> &ExerciseConfig {
        &self.config
    }

    /// A. Stanzas one and two in any order, then `done`. Errors are ignored.
    pub async fn problem_a(&self, sink: &dyn Sink) {
        let ids = stanza_paths(self.config.stanza_count.min(2));
        self.engine.read_parallel(&ids, sink).await;
    }

    /// B. Every stanza in any order, then `done`. Errors are ignored.
    pub async fn problem_b(&self, sink: &dyn Sink) {
        let ids = stanza_paths(self.config.stanza_count);
        self.engine.read_parallel(&ids, sink).await;
    }

    /// C. Every stanza in order, then `done`. A failure is returned to the caller.
    pub async fn problem_c(&self, sink: &dyn Sink) -> Result<(), ResourceError> {
        let ids = stanza_paths(self.config.stanza_count);
        self.engine.read_in_order(&ids, sink).await
    }

    /// D. Every stanza in order with one broken path; the failure is reported, then `done`.
    pub async fn problem_d(&self, sink: &dyn Sink) -> Outcome {
        let mut ids = stanza_paths(self.config.stanza_count);
        if let Some(index) = inject_fault(&mut ids, self.fault_plan.as_ref()) {
            let broken = &ids[index];
            info!(index, target_id = %broken, "injected missing stanza");
        }
        self.engine.read_in_order_fallible(&ids, sink).await
    }

    /// E. Write the configured content; report success as a note, failure as an error.
    pub async fn problem_e(&self, sink: &dyn Sink) -> Result<String, ResourceError> {
        match self
            .engine
            .write_resource(&self.config.write_target, &self.config.write_content)
            .await
        {
            Ok(name) => {
                sink.note(&format!("{name} has finished writing"));
                Ok(name)
            }
            Err(e) => {
                sink.report(&e);
                Err(e)
            }
        }
    }

    /// Run a single routine.
    ///
    /// Only routine C lets a failure escape; D and E report theirs to the sink.
    pub async fn run(&self, mode: Mode, sink: &dyn Sink) -> Result<(), ResourceError> {
        info!(%mode, "running routine");
        match mode {
            Mode::A => self.problem_a(sink).await,
            Mode::B => self.problem_b(sink).await,
            Mode::C => self.problem_c(sink).await?,
            Mode::D => {
                self.problem_d(sink).await;
            }
            Mode::E => {
                // Already reported to the sink.
                let _ = self.problem_e(sink).await;
            }
        }
        Ok(())
    }

    /// Run routines one after another, in the given order.
    pub async fn run_all(&self, modes: &[Mode], sink: &dyn Sink) -> Result<(), ResourceError> {
        for &mode in modes {
            self.run(mode, sink).await?;
        }
        Ok(())
    }
}
